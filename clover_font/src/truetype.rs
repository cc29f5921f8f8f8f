use crate::font::{FontRasterizer, GlyphTarget, PixelBox, VMetrics};
use ab_glyph::{Font, FontRef, Glyph, PxScale};
use anyhow::{anyhow, ensure, Result};
use log::debug;
use ttf_parser::{
    gpos::{PairAdjustment, PositioningSubtable},
    opentype_layout::LayoutTable,
    Face, GlyphId,
};

/// A TrueType font, rasterized with `ab_glyph`.
///
/// Vertical metrics come from the `hhea` table and kerning from the `GPOS` pair adjustments when
/// the font has a `GPOS` table, or from the legacy `kern` table otherwise.
pub struct TrueTypeFont<'a> {
    font: FontRef<'a>,
    face: Face<'a>,
}
impl<'a> TrueTypeFont<'a> {
    /// Parses a font from the raw contents of a `.ttf` file.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        let face = Face::parse(data, 0).map_err(|e| anyhow!("bad font: {e}"))?;
        let font = FontRef::try_from_slice(data).map_err(|e| anyhow!("bad font: {e}"))?;
        let font = TrueTypeFont { font, face };

        let metrics = font.v_metrics();
        ensure!(
            metrics.ascent > metrics.descent && font.font.height_unscaled() > 0.0,
            "bad font: ascent and descent are equal"
        );
        debug!(
            "Parsed font: {} bytes, {} glyphs, GPOS kerning: {}",
            data.len(),
            font.face.number_of_glyphs(),
            font.face.tables().gpos.is_some()
        );
        Ok(font)
    }

    fn glyph(&self, ch: char, scale: f32) -> Glyph {
        // ab_glyph scales relative to its own ascent-descent height, so convert back.
        let px = scale * self.font.height_unscaled();
        self.font.glyph_id(ch).with_scale(PxScale::from(px))
    }

    fn glyph_index(&self, ch: char) -> GlyphId {
        self.face.glyph_index(ch).unwrap_or(GlyphId(0))
    }
}

/// Looks up the horizontal advance adjustment of a glyph pair in the `GPOS` pair adjustment
/// lookups. The first class-based subtable covering `first` decides the result.
fn gpos_kern(gpos: &LayoutTable<'_>, first: GlyphId, second: GlyphId) -> i32 {
    for lookup in gpos.lookups {
        for subtable in lookup.subtables.into_iter::<PositioningSubtable>() {
            let PositioningSubtable::Pair(pair) = subtable else { continue };
            let Some(index) = pair.coverage().get(first) else { continue };
            match pair {
                PairAdjustment::Format1 { sets, .. } => {
                    if let Some((record, _)) = sets.get(index).and_then(|set| set.get(second)) {
                        return record.x_advance as i32;
                    }
                }
                PairAdjustment::Format2 { classes, matrix, .. } => {
                    let classes = (classes.0.get(first), classes.1.get(second));
                    return matrix.get(classes).map_or(0, |(record, _)| record.x_advance as i32);
                }
            }
        }
    }
    0
}

impl FontRasterizer for TrueTypeFont<'_> {
    fn v_metrics(&self) -> VMetrics {
        let hhea = &self.face.tables().hhea;
        VMetrics {
            ascent: hhea.ascender as i32,
            descent: hhea.descender as i32,
            line_gap: hhea.line_gap as i32,
        }
    }

    fn kern_advance(&self, first: char, second: char) -> i32 {
        match &self.face.tables().gpos {
            Some(gpos) => gpos_kern(gpos, self.glyph_index(first), self.glyph_index(second)),
            None => {
                let first = self.font.glyph_id(first);
                let second = self.font.glyph_id(second);
                self.font.kern_unscaled(first, second) as i32
            }
        }
    }

    fn h_advance(&self, ch: char) -> i32 {
        self.font.h_advance_unscaled(self.font.glyph_id(ch)) as i32
    }

    fn bitmap_box(&self, ch: char, scale: f32) -> PixelBox {
        match self.font.outline_glyph(self.glyph(ch, scale)) {
            Some(outlined) => {
                let bounds = outlined.px_bounds();
                PixelBox {
                    x0: bounds.min.x as i32,
                    y0: bounds.min.y as i32,
                    x1: bounds.max.x as i32,
                    y1: bounds.max.y as i32,
                }
            }
            None => PixelBox::default(),
        }
    }

    fn render(&self, ch: char, scale: f32, target: &mut GlyphTarget<'_>) {
        if let Some(outlined) = self.font.outline_glyph(self.glyph(ch, scale)) {
            outlined.draw(|x, y, c| {
                target.put(x, y, (c.clamp(0.0, 1.0) * 255.0).round() as u8);
            });
        }
    }
}
