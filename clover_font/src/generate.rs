use crate::{
    atlas::bake_atlas,
    emit::{emit_font_def, emit_png_array, FontDef},
    font::FontRasterizer,
    image::{coverage_to_rgba, rgba_len, ImageEncoder},
    kerning::extract_kerning,
    size::{resolve_size, SizeRequest},
    CHAR_COUNT,
};
use anyhow::{ensure, Context, Result};
use log::{debug, info};

/// Everything needed to bake one font.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateOptions {
    /// The C identifier of the generated definition.
    pub name: String,
    pub size: SizeRequest,
    /// Atlas dimensions, in pixels.
    pub width: u32,
    pub height: u32,
    /// Whether the encoded atlas is embedded into the generated source.
    pub embed_image: bool,
}

/// The in-memory outputs of a generation run.
#[derive(Clone, Debug)]
pub struct GeneratedFont {
    pub def: FontDef,
    /// The generated C source.
    pub source: String,
    /// The encoded atlas image.
    pub image: Vec<u8>,
    /// Number of glyphs that fit into the atlas.
    pub packed: usize,
}
impl GeneratedFont {
    /// Prints statistics about the generated font using the `log` crate.
    pub fn print_statistics(&self) {
        info!("");
        info!("==================================================================");
        info!("Statistics");
        info!("==================================================================");
        info!("Definition     : {}", self.def.name);
        info!("Font Size      : {:.1} px", self.def.font_size);
        info!("Ascent/Descent : {:.1} / {:.1} px", self.def.ascent, self.def.descent);
        info!("Packed Glyphs  : {} / {}", self.packed, CHAR_COUNT);
        info!("Kerning Pairs  : {}", self.def.kerns.len());
        info!("Image Size     : {:.1} KiB", self.image.len() as f32 / 1024.0);
        info!("==================================================================");
        info!("");
    }
}

/// Bakes a font into an atlas image and the C source describing it.
pub fn generate<F, E>(font: &F, encoder: &E, options: &GenerateOptions) -> Result<GeneratedFont>
where
    F: FontRasterizer + ?Sized,
    E: ImageEncoder + ?Sized,
{
    ensure!(options.width != 0 && options.height != 0, "atlas width is zero or not specified");
    ensure!(
        rgba_len(options.width, options.height).is_some(),
        "atlas of {}x{} pixels is too large",
        options.width,
        options.height
    );

    let metrics = font.v_metrics();
    debug!(
        "Font metrics: ascent = {}, descent = {}, line gap = {}",
        metrics.ascent, metrics.descent, metrics.line_gap
    );
    let size = resolve_size(font, options.size);

    info!("Baking {}x{} atlas at {:.1}px...", options.width, options.height, size.font_size);
    let atlas = bake_atlas(font, size.font_size, options.width, options.height);

    info!("Encoding atlas image...");
    let rgba = coverage_to_rgba(atlas.bitmap.data());
    let image = encoder
        .encode_rgba(&rgba, options.width, options.height)
        .context("error writing png file")?;
    drop(rgba);

    info!("Extracting kerning pairs...");
    let kerns = extract_kerning(font, size.scale);

    let def = FontDef::new(&options.name, size, metrics, atlas.glyphs, kerns);
    let mut source = emit_font_def(&def);
    if options.embed_image {
        source.push_str(&emit_png_array(&def.name, &image));
    }

    Ok(GeneratedFont { def, source, image, packed: atlas.packed })
}
