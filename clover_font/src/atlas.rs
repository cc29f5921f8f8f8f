//! Packing the glyphs of the baked character range into a single coverage bitmap.

use crate::{
    font::{FontRasterizer, GlyphTarget},
    CHAR_COUNT, FIRST_CHAR,
};
use log::{debug, warn};
use std::{cmp::max, fmt, fmt::Formatter};

/// A single channel bitmap holding glyph coverage, row-major.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct CoverageBitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}
impl CoverageBitmap {
    /// Creates an empty bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        CoverageBitmap { width, height, data: vec![0; width as usize * height as usize] }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the coverage at a pixel, or `None` outside the bitmap.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    fn target(&mut self, x: u32, y: u32, width: u32, height: u32) -> Option<GlyphTarget<'_>> {
        GlyphTarget::new(&mut self.data, self.width as usize, x, y, width, height)
    }
}
impl fmt::Debug for CoverageBitmap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        struct Length(usize);
        impl fmt::Debug for Length {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "[{} bytes]", self.0)
            }
        }
        f.debug_struct("CoverageBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("data", &Length(self.data.len()))
            .finish()
    }
}

/// The placement and metrics of one glyph in the atlas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphRecord {
    pub ch: char,
    /// Position and size of the glyph's cell in the atlas, in pixels.
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    /// Offset from the pen position to the top left of the cell.
    pub xoff: f32,
    pub yoff: f32,
    pub xadvance: f32,
}
impl GlyphRecord {
    fn unplaced(ch: char) -> Self {
        GlyphRecord { ch, x: 0, y: 0, w: 0, h: 0, xoff: 0.0, yoff: 0.0, xadvance: 0.0 }
    }
}

/// The result of baking the character range.
#[derive(Clone, Debug)]
pub struct BakedAtlas {
    pub bitmap: CoverageBitmap,
    /// One record per character, in codepoint order.
    pub glyphs: Vec<GlyphRecord>,
    /// How many glyphs were placed before the atlas ran out of rows.
    pub packed: usize,
}
impl BakedAtlas {
    pub fn is_complete(&self) -> bool {
        self.packed == self.glyphs.len()
    }
}

/// Returns the characters that are baked into every atlas.
pub fn baked_chars() -> impl Iterator<Item = char> {
    (FIRST_CHAR..FIRST_CHAR + CHAR_COUNT as u32).filter_map(char::from_u32)
}

/// Rasterizes the baked character range at `pixel_height` into a `width * height` atlas.
///
/// Glyphs are placed left to right in rows with a one pixel gutter, starting a new row below the
/// tallest glyph of the previous one. Once a glyph no longer fits vertically, packing stops; it
/// and all later glyphs keep empty records.
pub fn bake_atlas<F: FontRasterizer + ?Sized>(
    font: &F,
    pixel_height: f32,
    width: u32,
    height: u32,
) -> BakedAtlas {
    let scale = font.scale_for_pixel_height(pixel_height);
    let mut bitmap = CoverageBitmap::new(width, height);
    let mut glyphs: Vec<_> = baked_chars().map(GlyphRecord::unplaced).collect();

    let (width, height) = (width as i64, height as i64);
    let mut x = 1i64;
    let mut y = 1i64;
    let mut bottom_y = 1i64;
    let mut packed = 0;
    for glyph in &mut glyphs {
        let ch = glyph.ch;
        let bbox = font.bitmap_box(ch, scale);
        let gw = max(bbox.width(), 0) as i64;
        let gh = max(bbox.height(), 0) as i64;

        // advance to the next row
        if x + gw + 1 >= width {
            y = bottom_y;
            x = 1;
        }
        // check that the glyph fits vertically after moving to the next row
        if y + gh + 1 >= height {
            warn!(
                "Atlas is too small: only {packed} of {} glyphs fit, starting at {ch:?}.",
                CHAR_COUNT
            );
            break;
        }

        match bitmap.target(x as u32, y as u32, gw as u32, gh as u32) {
            Some(mut target) => font.render(ch, scale, &mut target),
            None => warn!("Glyph {ch:?} is wider than the atlas and was not rendered."),
        }

        *glyph = GlyphRecord {
            ch,
            x: x as u32,
            y: y as u32,
            w: gw as u32,
            h: gh as u32,
            xoff: bbox.x0 as f32,
            yoff: bbox.y0 as f32,
            xadvance: scale * font.h_advance(ch) as f32,
        };
        x += gw + 1;
        bottom_y = max(bottom_y, y + gh + 1);
        packed += 1;
    }
    debug!("Packed {packed} glyphs, bottom row ends at y = {bottom_y}");

    BakedAtlas { bitmap, glyphs, packed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::FakeFont;

    #[test]
    fn baked_range_is_printable_ascii() {
        let chars: Vec<_> = baked_chars().collect();
        assert_eq!(chars.len(), 95);
        assert_eq!(chars[0], ' ');
        assert_eq!(chars[94], '~');
    }

    #[test]
    fn packs_all_glyphs_in_order() {
        let atlas = bake_atlas(&FakeFont::new(), 16.0, 256, 256);
        assert!(atlas.is_complete());
        assert_eq!(atlas.glyphs.len(), 95);
        for (i, glyph) in atlas.glyphs.iter().enumerate() {
            assert_eq!(glyph.ch as u32, 32 + i as u32);
        }
        assert_eq!(atlas.bitmap.data().len(), 256 * 256);
    }

    #[test]
    fn packs_rows_with_gutters() {
        // every visible glyph is 8x10 pixels at 16px
        let atlas = bake_atlas(&FakeFont::new(), 16.0, 64, 64);
        let glyphs = &atlas.glyphs;

        assert_eq!(glyphs[0], GlyphRecord {
            ch: ' ',
            x: 1,
            y: 1,
            w: 0,
            h: 0,
            xoff: 0.0,
            yoff: 0.0,
            xadvance: 9.0,
        });
        assert_eq!(glyphs[1], GlyphRecord {
            ch: '!',
            x: 2,
            y: 1,
            w: 8,
            h: 10,
            xoff: 0.0,
            yoff: -10.0,
            xadvance: 9.0,
        });
        assert_eq!((glyphs[2].x, glyphs[2].y), (11, 1));
        assert_eq!((glyphs[6].x, glyphs[6].y), (47, 1));
        // the quote would touch the right edge, so it starts the second row
        assert_eq!((glyphs[7].ch, glyphs[7].x, glyphs[7].y), ('\'', 1, 12));
        assert_eq!((glyphs[12].x, glyphs[12].y), (46, 12));
        assert_eq!((glyphs[13].x, glyphs[13].y), (1, 23));
    }

    #[test]
    fn overflow_leaves_remaining_glyphs_empty() {
        let atlas = bake_atlas(&FakeFont::new(), 16.0, 64, 64);
        assert!(!atlas.is_complete());
        assert_eq!(atlas.packed, 31);
        assert_eq!(atlas.glyphs.len(), 95);
        assert_eq!((atlas.glyphs[30].ch, atlas.glyphs[30].y), ('>', 45));
        for glyph in &atlas.glyphs[31..] {
            assert_eq!(*glyph, GlyphRecord::unplaced(glyph.ch));
        }
    }

    #[test]
    fn renders_into_cells() {
        let atlas = bake_atlas(&FakeFont::new(), 16.0, 64, 64);
        let bitmap = &atlas.bitmap;
        assert_eq!(bitmap.get(0, 0), Some(0));
        assert_eq!(bitmap.get(1, 1), Some(0));
        assert_eq!(bitmap.get(2, 1), Some(b'!'));
        assert_eq!(bitmap.get(9, 10), Some(b'!'));
        assert_eq!(bitmap.get(10, 1), Some(0));
        assert_eq!(bitmap.get(9, 11), Some(0));
        assert_eq!(bitmap.get(11, 1), Some(b'"'));
        assert_eq!(bitmap.get(1, 12), Some(b'\''));
        assert_eq!(bitmap.get(64, 0), None);
    }

    #[test]
    fn tiny_atlas_packs_nothing() {
        let atlas = bake_atlas(&FakeFont::new(), 16.0, 2, 2);
        assert_eq!(atlas.packed, 0);
        assert!(atlas.bitmap.data().iter().all(|x| *x == 0));
    }
}
