use crate::{atlas::baked_chars, font::FontRasterizer};
use log::debug;

/// A kerning adjustment between two baked characters, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KerningRecord {
    pub first: char,
    pub second: char,
    pub amount: f32,
}

/// Collects the kerning pairs between distinct baked characters.
///
/// Pairs are returned in row-major order over `(first, second)`. A pair is kept whenever its
/// unscaled kerning is non-zero, even if the scaled amount rounds to zero.
pub fn extract_kerning<F: FontRasterizer + ?Sized>(font: &F, scale: f32) -> Vec<KerningRecord> {
    let mut kerns = Vec::new();
    for first in baked_chars() {
        for second in baked_chars() {
            if first == second {
                continue;
            }
            let kern = font.kern_advance(first, second);
            if kern != 0 {
                kerns.push(KerningRecord { first, second, amount: kern as f32 * scale });
            }
        }
    }
    debug!("Found {} kerning pairs", kerns.len());
    kerns
}
