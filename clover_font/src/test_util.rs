use crate::font::{FontRasterizer, GlyphTarget, PixelBox, VMetrics};
use std::collections::HashMap;

/// A font with made-up but predictable metrics.
///
/// The font is 1024 units tall, so integer pixel heights give exact scales. Every glyph except
/// the space is a 512x640 unit box sitting on the baseline with an advance of 576 units, and
/// renders with its own codepoint as the coverage value.
pub struct FakeFont {
    pub metrics: VMetrics,
    pub kerns: HashMap<(char, char), i32>,
    pub scale_fn: Option<fn(f32) -> f32>,
}
impl FakeFont {
    pub fn new() -> Self {
        FakeFont {
            metrics: VMetrics { ascent: 768, descent: -256, line_gap: 90 },
            kerns: HashMap::new(),
            scale_fn: None,
        }
    }

    pub fn with_kern(mut self, first: char, second: char, amount: i32) -> Self {
        self.kerns.insert((first, second), amount);
        self
    }
}
impl FontRasterizer for FakeFont {
    fn v_metrics(&self) -> VMetrics {
        self.metrics
    }

    fn scale_for_pixel_height(&self, pixel_height: f32) -> f32 {
        match self.scale_fn {
            Some(scale_fn) => scale_fn(pixel_height),
            None => pixel_height / (self.metrics.ascent - self.metrics.descent) as f32,
        }
    }

    fn kern_advance(&self, first: char, second: char) -> i32 {
        self.kerns.get(&(first, second)).copied().unwrap_or(0)
    }

    fn h_advance(&self, _ch: char) -> i32 {
        576
    }

    fn bitmap_box(&self, ch: char, scale: f32) -> PixelBox {
        if ch == ' ' {
            PixelBox::default()
        } else {
            PixelBox {
                x0: 0,
                y0: (-640.0 * scale).floor() as i32,
                x1: (512.0 * scale).ceil() as i32,
                y1: 0,
            }
        }
    }

    fn render(&self, ch: char, _scale: f32, target: &mut GlyphTarget<'_>) {
        for y in 0..target.height() {
            for x in 0..target.width() {
                target.put(x, y, ch as u8);
            }
        }
    }
}
