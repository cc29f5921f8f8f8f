use anyhow::Result;
use clover_font::{image::rgba_len, GenerateOptions, SizeRequest};
use derive_setters::Setters;
use std::{error::Error, fmt, fmt::Formatter, path::PathBuf};

/// An error caused by the command line arguments rather than by the font or the filesystem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UsageError(String);
impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        UsageError(message.into())
    }
}
impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
impl Error for UsageError {}

/// The settings for generating one font.
#[derive(Clone, Debug, Setters)]
#[setters(strip_option)]
pub struct FontGenConfig {
    #[setters(skip)]
    pub font_path: PathBuf,
    #[setters(skip)]
    pub size: SizeRequest,
    #[setters(skip)]
    pub width: u32,
    #[setters(skip)]
    pub height: u32,
    #[setters(into)]
    pub output_dir: Option<PathBuf>,
    #[setters(bool)]
    pub embed_image: bool,
}
impl FontGenConfig {
    pub fn new(font_path: PathBuf, size: SizeRequest, width: u32, height: u32) -> Self {
        FontGenConfig { font_path, size, width, height, output_dir: None, embed_image: false }
    }

    /// Returns the directory the generated files are written to.
    pub fn destination(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn generate_options(&self, name: &str) -> GenerateOptions {
        GenerateOptions {
            name: name.to_string(),
            size: self.size,
            width: self.width,
            height: self.height,
            embed_image: self.embed_image,
        }
    }
}

/// Chooses how the font is sized from the `--size` and `--ascent` arguments, where `0` means
/// that the argument was not given.
///
/// When both are given, the ascent wins.
pub fn size_request(size: f32, ascent: i32) -> Result<SizeRequest> {
    if size == 0.0 && ascent == 0 {
        return Err(UsageError::new("need to specify either font size or ascent target").into());
    }
    if ascent != 0 {
        if ascent < 0 {
            return Err(UsageError::new("ascent target must be positive").into());
        }
        Ok(SizeRequest::TargetAscent(ascent as u32))
    } else if size > 0.0 && size.is_finite() {
        Ok(SizeRequest::PixelHeight(size))
    } else {
        Err(UsageError::new("font size must be positive").into())
    }
}

/// Validates the atlas dimensions. A missing height defaults to the width.
pub fn atlas_dimensions(width: u32, height: u32) -> Result<(u32, u32)> {
    if width == 0 {
        return Err(UsageError::new("atlas width is zero or not specified").into());
    }
    let height = if height == 0 { width } else { height };
    if rgba_len(width, height).is_none() {
        let message = format!("atlas of {width}x{height} pixels is too large");
        return Err(UsageError::new(message).into());
    }
    Ok((width, height))
}
