//! Layout failure conditions.

use thiserror::Error;

/// Errors produced by the masonry engine.
///
/// These signal caller misconfiguration, not transient faults; layout is
/// deterministic and pure, so there is no retry path. A pass either fully
/// succeeds or fails before producing any output.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// Container width, item width, or the column count derived from them
    /// is non-positive or non-finite.
    #[error(
        "invalid layout geometry: container width {container_width}, item width {item_width}"
    )]
    InvalidLayoutConfig {
        container_width: f32,
        item_width: f32,
    },
}
