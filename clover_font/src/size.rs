use crate::font::FontRasterizer;
use log::{debug, trace};

/// Step between candidate pixel sizes when searching for a target ascent.
const SIZE_STEP: f32 = 0.1;

/// How the pixel size of the baked font is chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SizeRequest {
    /// Use this pixel height directly.
    PixelHeight(f32),
    /// Search for the pixel height whose scaled ascent is closest to this many pixels.
    TargetAscent(u32),
}

/// A pixel size together with the scale from font units that it implies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedSize {
    pub font_size: f32,
    pub scale: f32,
}

pub fn resolve_size<F: FontRasterizer + ?Sized>(font: &F, request: SizeRequest) -> ResolvedSize {
    let resolved = match request {
        SizeRequest::PixelHeight(font_size) => {
            ResolvedSize { font_size, scale: font.scale_for_pixel_height(font_size) }
        }
        SizeRequest::TargetAscent(target) => find_size_for_ascent(font, target),
    };
    debug!("Resolved size: {request:?} -> {resolved:?}");
    resolved
}

/// Scans pixel sizes upwards from `target_ascent` for the one whose scaled ascent is nearest.
///
/// The scan covers `[target, 2 * target)` in steps of 0.1 pixels and stops at the first step
/// where the error grows, so only the first local minimum is found.
pub fn find_size_for_ascent<F: FontRasterizer + ?Sized>(
    font: &F,
    target_ascent: u32,
) -> ResolvedSize {
    let ascent = font.v_metrics().ascent as f32;
    let target = target_ascent as f32;
    let limit = target * 2.0;

    let mut closest: Option<(f32, f32)> = None;
    let mut last_diff: Option<f32> = None;
    let mut font_size = target;
    while font_size < limit {
        let scale = font.scale_for_pixel_height(font_size);
        let diff = (target - ascent * scale).abs();
        trace!("size {font_size}: scaled ascent {}, diff {diff}", ascent * scale);

        match closest {
            Some((_, closest_diff)) if diff >= closest_diff => {}
            _ => closest = Some((font_size, diff)),
        }
        if matches!(last_diff, Some(last) if diff > last) {
            break;
        }
        last_diff = Some(diff);

        let next = font_size + SIZE_STEP;
        if next <= font_size {
            break;
        }
        font_size = next;
    }

    let font_size = closest.map_or(0.0, |(size, _)| size);
    ResolvedSize { font_size, scale: font.scale_for_pixel_height(font_size) }
}
