//! Aspect-ratio-constrained item sizing.
//!
//! Every item gets the full column width; only height varies. Portrait
//! items keep their true ratio up to a configurable cap so a very tall
//! image cannot dominate a column. Square and landscape items collapse to
//! a 1:1 square of the column width: a landscape photo is shown as a
//! square crop rather than a short strip. The square collapse discards the
//! true ratio on purpose; it is product policy, not a bug.

use crate::item::Size;

/// Computes the display size of one item in a `columns`-wide grid.
///
/// `ratio = intrinsic_height / intrinsic_width`. For `ratio > 1` the
/// height is `item_width * ratio` clamped to `item_width *
/// max_aspect_ratio`; for `ratio <= 1` the height is `item_width` exactly.
///
/// Pure and deterministic; safe to call for every item independently and
/// in any order. Callers are responsible for positive, finite inputs
/// (see `MasonryConfig::validate`); behavior for degenerate inputs is
/// undefined.
pub fn resize(
    container_width: f32,
    columns: usize,
    max_aspect_ratio: f32,
    intrinsic_width: f32,
    intrinsic_height: f32,
) -> Size {
    let item_width = container_width / columns as f32;

    let ratio = intrinsic_height / intrinsic_width;
    let height = if ratio > 1.0 {
        (item_width * ratio).min(item_width * max_aspect_ratio)
    } else {
        item_width
    };

    Size {
        width: item_width,
        height,
    }
}
