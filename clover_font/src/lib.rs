//! Bakes TrueType fonts into glyph atlases and `cl_font_def` definitions for the clover renderer.
//!
//! The printable ASCII range is rasterized into a fixed-size coverage bitmap which is encoded as
//! an RGBA image, and the glyph placements, metrics and kerning pairs are written out as C source.
//!
//! Font access and image encoding go through the [`FontRasterizer`] and [`ImageEncoder`] traits.
//! With the default features, [`TrueTypeFont`] implements the former using `ab_glyph` and
//! `ttf-parser`, and [`PngEncoder`] implements the latter using `png`.
//!
//! ```no_run
//! use clover_font::*;
//! # fn main() -> anyhow::Result<()> {
//! let data = std::fs::read("foo.ttf")?;
//! let font = TrueTypeFont::from_bytes(&data)?;
//! let options = GenerateOptions {
//!     name: "foo".to_string(),
//!     size: SizeRequest::PixelHeight(24.0),
//!     width: 256,
//!     height: 256,
//!     embed_image: false,
//! };
//! let generated = generate(&font, &PngEncoder, &options)?;
//! std::fs::write("foo.c", &generated.source)?;
//! std::fs::write("foo.png", &generated.image)?;
//! # Ok(())
//! # }
//! ```

pub mod atlas;
pub mod emit;
pub mod font;
pub mod image;
pub mod kerning;
pub mod size;

mod generate;
#[cfg(test)]
mod test_util;
#[cfg(feature = "truetype")]
mod truetype;

/// The first codepoint baked into the atlas.
pub const FIRST_CHAR: u32 = 32;
/// The number of consecutive codepoints baked into the atlas.
pub const CHAR_COUNT: usize = 95;

pub use crate::{
    atlas::{bake_atlas, BakedAtlas, CoverageBitmap, GlyphRecord},
    emit::FontDef,
    font::{FontRasterizer, GlyphTarget, PixelBox, VMetrics},
    generate::{generate, GenerateOptions, GeneratedFont},
    image::ImageEncoder,
    kerning::{extract_kerning, KerningRecord},
    size::{resolve_size, ResolvedSize, SizeRequest},
};

#[cfg(feature = "png")]
pub use crate::image::PngEncoder;
#[cfg(feature = "truetype")]
pub use crate::truetype::TrueTypeFont;
