//! The capability interface the baking pipeline needs from a font library.

/// Unscaled vertical metrics of a font, in font units.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct VMetrics {
    pub ascent: i32,
    pub descent: i32,
    pub line_gap: i32,
}

/// The pixel-space bounding box of a rasterized glyph.
///
/// `y` points down, so `y0` is the top edge relative to the baseline and is usually negative.
/// Glyphs without an outline have an all-zero box.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct PixelBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}
impl PixelBox {
    pub fn width(&self) -> i32 {
        self.x1.saturating_sub(self.x0)
    }
    pub fn height(&self) -> i32 {
        self.y1.saturating_sub(self.y0)
    }
}

/// A writable `width * height` window into a larger coverage bitmap.
///
/// Writes outside of the window are dropped, so a rasterizer whose coverage extends slightly past
/// the box it reported can never touch neighbouring glyph cells.
pub struct GlyphTarget<'a> {
    data: &'a mut [u8],
    offset: usize,
    stride: usize,
    width: u32,
    height: u32,
}
impl<'a> GlyphTarget<'a> {
    /// Creates a window at `(x, y)` inside a bitmap with the given row stride.
    ///
    /// Returns `None` if the window does not fit inside `data`.
    pub fn new(
        data: &'a mut [u8],
        stride: usize,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Option<Self> {
        let offset = y as usize * stride + x as usize;
        if width != 0 && height != 0 {
            if x as usize + width as usize > stride {
                return None;
            }
            let last = offset + (height as usize - 1) * stride + width as usize;
            if last > data.len() {
                return None;
            }
        }
        Some(GlyphTarget { data, offset, stride, width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Stores a coverage value at `(x, y)` relative to the window origin.
    pub fn put(&mut self, x: u32, y: u32, coverage: u8) {
        if x < self.width && y < self.height {
            self.data[self.offset + y as usize * self.stride + x as usize] = coverage;
        }
    }
}

/// A parsed font that can report metrics and rasterize the glyphs of single codepoints.
///
/// Scales follow the stb_truetype convention: a scale converts font units to pixels, and
/// [`scale_for_pixel_height`](`FontRasterizer::scale_for_pixel_height`) maps the distance from
/// descent to ascent onto the requested pixel height.
pub trait FontRasterizer {
    /// Returns the unscaled vertical metrics of the font.
    fn v_metrics(&self) -> VMetrics;

    /// Returns the scale that makes `ascent - descent` span `pixel_height` pixels.
    fn scale_for_pixel_height(&self, pixel_height: f32) -> f32 {
        let metrics = self.v_metrics();
        pixel_height / (metrics.ascent - metrics.descent) as f32
    }

    /// Returns the unscaled kerning adjustment between two codepoints.
    fn kern_advance(&self, first: char, second: char) -> i32;

    /// Returns the unscaled horizontal advance of a codepoint.
    fn h_advance(&self, ch: char) -> i32;

    /// Returns the pixel bounding box of a codepoint's glyph at the given scale.
    fn bitmap_box(&self, ch: char, scale: f32) -> PixelBox;

    /// Renders the coverage of a codepoint's glyph at the given scale.
    ///
    /// The target window has the dimensions of [`bitmap_box`](`FontRasterizer::bitmap_box`), with
    /// `(0, 0)` corresponding to `(x0, y0)`.
    fn render(&self, ch: char, scale: f32, target: &mut GlyphTarget<'_>);
}
