//! Generates a font texture and clover font definition from a TTF file.
//!
//! This is the library half of the `clover_fontgen` tool. The binary only parses the command line
//! into a [`FontGenConfig`] and calls [`run`].

pub mod config;
pub mod output;

pub use crate::{
    config::{FontGenConfig, UsageError},
    output::OutputPaths,
};

use anyhow::{bail, Context, Result};
use clover_font::{generate, PngEncoder, TrueTypeFont};
use log::{info, warn};
use std::fs;

/// Loads the configured font, bakes it, and writes the `.c` and `.png` outputs.
///
/// Nothing is written unless the whole font could be generated.
pub fn run(config: &FontGenConfig) -> Result<()> {
    let path = &config.font_path;
    if !path.exists() {
        bail!("file does not exist: '{}'", path.display());
    }
    let paths = OutputPaths::new(path, &config.destination())?;
    if !output::is_c_identifier(&paths.identifier) {
        warn!(
            "'{}' is not a valid C identifier, the generated source will not compile.",
            paths.identifier
        );
    }

    info!("Loading font '{}'...", path.display());
    let data = fs::read(path).with_context(|| format!("could not read '{}'", path.display()))?;
    let font = TrueTypeFont::from_bytes(&data)?;

    let generated = generate(&font, &PngEncoder, &config.generate_options(&paths.identifier))?;
    paths.write(&generated)?;
    generated.print_statistics();

    Ok(())
}
