//! Scalar configuration for one masonry pass.

use crate::error::LayoutError;
use crate::item::Size;
use crate::resize::resize;

/// Default cap on `height / width` for portrait items (2:1).
pub const DEFAULT_MAX_ASPECT_RATIO: f32 = 2.0;

/// Everything a pass needs beyond the item feed itself.
///
/// Plain scalars, cheap to copy; a changed config means a fresh pass, the
/// engine never diffs against a previous one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasonryConfig {
    pub container_width: f32,
    pub columns: usize,
    /// Fixed height added to every item after sizing, e.g. for captions.
    pub item_extra_height: f32,
    pub max_aspect_ratio: f32,
}

impl MasonryConfig {
    pub fn new(container_width: f32, columns: usize) -> Self {
        Self {
            container_width,
            columns,
            item_extra_height: 0.0,
            max_aspect_ratio: DEFAULT_MAX_ASPECT_RATIO,
        }
    }

    pub fn with_item_extra_height(mut self, extra: f32) -> Self {
        self.item_extra_height = extra;
        self
    }

    pub fn with_max_aspect_ratio(mut self, ratio: f32) -> Self {
        self.max_aspect_ratio = ratio;
        self
    }

    /// Display width shared by every item: `container_width / columns`.
    pub fn item_width(&self) -> f32 {
        self.container_width / self.columns as f32
    }

    /// Rejects degenerate geometry before a pass runs.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let item_width = self.item_width();
        if self.columns == 0
            || self.container_width <= 0.0
            || !self.container_width.is_finite()
            || item_width <= 0.0
            || !item_width.is_finite()
        {
            return Err(LayoutError::InvalidLayoutConfig {
                container_width: self.container_width,
                item_width,
            });
        }
        Ok(())
    }

    /// Sizes one item under this config, including the extra height.
    pub fn resize(&self, intrinsic_width: f32, intrinsic_height: f32) -> Size {
        let mut size = resize(
            self.container_width,
            self.columns,
            self.max_aspect_ratio,
            intrinsic_width,
            intrinsic_height,
        );
        size.height += self.item_extra_height;
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = MasonryConfig::new(300.0, 3);
        assert_eq!(config.item_width(), 100.0);
        assert_eq!(config.item_extra_height, 0.0);
        assert_eq!(config.max_aspect_ratio, DEFAULT_MAX_ASPECT_RATIO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_columns() {
        assert!(MasonryConfig::new(300.0, 0).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_width() {
        assert!(MasonryConfig::new(0.0, 3).validate().is_err());
        assert!(MasonryConfig::new(-10.0, 3).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_width() {
        assert!(MasonryConfig::new(f32::INFINITY, 3).validate().is_err());
        assert!(MasonryConfig::new(f32::NAN, 3).validate().is_err());
    }

    #[test]
    fn extra_height_is_purely_additive() {
        let config = MasonryConfig::new(300.0, 3).with_item_extra_height(24.0);
        let size = config.resize(100.0, 100.0);
        assert_eq!(size, Size::new(100.0, 124.0));
    }
}
