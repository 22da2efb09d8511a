//! Crop rectangles for facing pages
//!
//! Front and back pages are cropped separately so that the gutter margin
//! ends up on the spine side of each. Both sides are widened to the same
//! content width before margins are added.

use crate::options::Margins;
use crate::types::*;
use std::path::Path;

/// Compute odd/even crop rectangles from per-page bounding boxes.
///
/// `boxes` is in document order: index 0 is page 1 (front), index 1 is
/// page 2 (back), and so on. `source` is only used for the error message.
pub fn compute_crop_geometry(
    boxes: &[BoundingBox],
    margins: &Margins,
    source: &Path,
) -> Result<CropGeometry> {
    let (mut min_l_odd, max_r_odd) = horizontal_extent(boxes.iter().step_by(2))
        .ok_or_else(|| BookletError::MissingBounds(source.to_path_buf()))?;
    let (min_l_even, mut max_r_even) =
        horizontal_extent(boxes.iter().skip(1).step_by(2)).unwrap_or((min_l_odd, max_r_odd));

    // Top and bottom are shared by both sides
    let min_t = boxes.iter().map(|b| b.top).fold(f64::INFINITY, f64::min);
    let max_b = boxes
        .iter()
        .map(|b| b.bottom)
        .fold(f64::NEG_INFINITY, f64::max);

    let width_odd = max_r_odd - min_l_odd;
    let width_even = max_r_even - min_l_even;
    let max_width = width_odd.max(width_even);
    min_l_odd -= max_width - width_odd;
    max_r_even += max_width - width_even;

    let outer = margins.outer as f64;
    let half_inner = margins.inner as f64 / 2.0;
    let top = min_t - margins.top as f64;
    // margins.bottom is intentionally not applied here
    let bottom = max_b + outer;

    Ok(CropGeometry {
        odd: CropRect {
            left: min_l_odd - half_inner,
            top,
            right: max_r_odd + outer,
            bottom,
        },
        even: CropRect {
            left: min_l_even - outer,
            top,
            right: max_r_even + half_inner,
            bottom,
        },
    })
}

/// Minimum left and maximum right edge, or `None` for an empty set
fn horizontal_extent<'a>(boxes: impl Iterator<Item = &'a BoundingBox>) -> Option<(f64, f64)> {
    boxes.fold(None, |acc, b| match acc {
        None => Some((b.left, b.right)),
        Some((l, r)) => Some((l.min(b.left), r.max(b.right))),
    })
}
