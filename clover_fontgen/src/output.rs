use anyhow::{bail, Context, Result};
use clover_font::GeneratedFont;
use log::info;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// Finds the byte offset of the `.` that starts the extension of a file name.
///
/// A `.` in the final position does not count, so `"a.b."` has the extension `".b."`.
fn extension_start(name: &str) -> Option<usize> {
    name.char_indices()
        .rev()
        .skip(1)
        .find(|(_, ch)| *ch == '.')
        .map(|(idx, _)| idx)
}

/// Removes the extension from a file name, if it has one.
pub fn without_extension(name: &str) -> &str {
    match extension_start(name) {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Replaces the extension of a file name, or appends one if it has none.
pub fn with_extension(name: &str, ext: &str) -> String {
    format!("{}.{ext}", without_extension(name))
}

/// Checks whether a name can be used as a C identifier as-is.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(ch) if ch == '_' || ch.is_ascii_alphabetic() => {
            chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// Where the outputs for a font go, and the identifier they use.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputPaths {
    pub identifier: String,
    pub source: PathBuf,
    pub image: PathBuf,
}
impl OutputPaths {
    /// Derives the output names from the font's file name, placing them into `output_dir`.
    pub fn new(font_path: &Path, output_dir: &Path) -> Result<Self> {
        let file_name = match font_path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => bail!("font name not specified"),
        };
        Ok(OutputPaths {
            identifier: without_extension(&file_name).to_string(),
            source: output_dir.join(with_extension(&file_name, "c")),
            image: output_dir.join(with_extension(&file_name, "png")),
        })
    }

    /// Writes the generated source and image.
    pub fn write(&self, generated: &GeneratedFont) -> Result<()> {
        info!("Writing '{}'...", self.source.display());
        create(&self.source)?.write_all(generated.source.as_bytes())?;
        info!("Writing '{}'...", self.image.display());
        create(&self.image)?.write_all(&generated.image)?;
        Ok(())
    }
}

fn create(path: &Path) -> Result<File> {
    File::create(path)
        .with_context(|| format!("unable to open output file '{}'", path.display()))
}
