//! Writing baked fonts out as clover C source.

use crate::{
    atlas::GlyphRecord, font::VMetrics, kerning::KerningRecord, size::ResolvedSize, CHAR_COUNT,
    FIRST_CHAR,
};

/// A baked font, as described by a `cl_font_def` initializer.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDef {
    /// The C identifier of the definition.
    pub name: String,
    pub font_size: f32,
    /// Ascent and descent, already scaled to pixels.
    pub ascent: f32,
    pub descent: f32,
    pub glyphs: Vec<GlyphRecord>,
    pub kerns: Vec<KerningRecord>,
}
impl FontDef {
    pub fn new(
        name: &str,
        size: ResolvedSize,
        metrics: VMetrics,
        glyphs: Vec<GlyphRecord>,
        kerns: Vec<KerningRecord>,
    ) -> Self {
        FontDef {
            name: name.to_string(),
            font_size: size.font_size,
            ascent: metrics.ascent as f32 * size.scale,
            descent: metrics.descent as f32 * size.scale,
            glyphs,
            kerns,
        }
    }
}

fn char_literal(ch: char) -> String {
    match ch {
        '\'' | '\\' => format!("'\\{ch}'"),
        _ => format!("'{ch}'"),
    }
}

/// Renders the `cl_font_def` initializer for a baked font.
pub fn emit_font_def(def: &FontDef) -> String {
    let mut out = String::new();
    out.push_str("#include \"clover.h\"\n\n");
    out.push_str(&format!("cl_font_def {} = {{\n", def.name));
    out.push_str(&format!("\t.font_size = {},\n", def.font_size.round() as i32));
    out.push_str(&format!("\t.ascent = {},\n", def.ascent.round() as i32));
    out.push_str(&format!("\t.descent = {},\n", def.descent.round() as i32));
    out.push_str(&format!("\t.min_id = {FIRST_CHAR},\n"));
    out.push_str(&format!("\t.num_chars = {CHAR_COUNT},\n"));

    out.push_str("\t.chars = {\n");
    for glyph in &def.glyphs {
        out.push_str(&format!(
            "\t\t{{ .c={}, .x={}, .y={}, .w={}, .h={}, .xoff={:.1}f, .yoff={:.1}f, .xadv={:.1}f }},\n",
            char_literal(glyph.ch),
            glyph.x,
            glyph.y,
            glyph.w,
            glyph.h,
            glyph.xoff,
            glyph.yoff,
            glyph.xadvance,
        ));
    }
    out.push_str("\t},\n");

    out.push_str("\t.kerns = {\n");
    for kern in &def.kerns {
        out.push_str(&format!(
            "\t\t{{ .first={}, .second={}, .amount={:.4}f }},\n",
            kern.first as u32, kern.second as u32, kern.amount,
        ));
    }
    out.push_str("\t},\n");
    out.push_str(&format!("\t.num_kerns={},\n", def.kerns.len()));
    out.push_str("};\n");
    out
}

/// Renders an encoded image as a byte array named `{name}_png` plus a length constant.
pub fn emit_png_array(name: &str, png: &[u8]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("unsigned char  {name}_png[] = {{\n"));
    for line in png.chunks(16) {
        out.push('\t');
        let bytes: Vec<_> = line.iter().map(|b| format!("0x{b:02x},")).collect();
        out.push_str(&bytes.join(" "));
        // partial lines keep the separator after their last byte
        if line.len() < 16 {
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("};\n\n");
    out.push_str(&format!("unsigned int {name}_png_len = {};\n", png.len()));
    out
}
