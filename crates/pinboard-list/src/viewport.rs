//! Visible-range and spacing helpers for a windowed renderer.
//!
//! The renderer consumes pre-positioned boxes and owns presentation; these
//! helpers answer the two questions it asks of a layout: which indices are
//! on screen right now, and how big is an item's content box once the gap
//! inset is applied.

use pinboard_layout::{MasonryLayout, PositionedItem, Size};

/// The window the renderer currently shows, in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the top edge.
    pub offset: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(offset: f32, height: f32) -> Self {
        Self { offset, height }
    }
}

/// Indices of items whose boxes intersect the viewport expanded by
/// `overscan_px` on both ends.
///
/// Masonry columns interleave vertically, so this is a filter over the
/// whole feed rather than a contiguous slice. Indices come back in feed
/// order and can key a windowed list directly.
pub fn visible_range<T>(
    layout: &MasonryLayout<T>,
    viewport: Viewport,
    overscan_px: f32,
) -> Vec<usize> {
    let start = viewport.offset - overscan_px;
    let end = viewport.offset + viewport.height + overscan_px;
    layout
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.top < end && item.top + item.height > start)
        .map(|(index, _)| index)
        .collect()
}

/// Presentation-layer gap subtracted from each item's full box. The layout
/// always supplies full-box geometry; insetting happens on top of it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListSpacing {
    pub horizontal: f32,
    pub vertical: f32,
}

impl ListSpacing {
    pub const fn uniform(spacing: f32) -> Self {
        Self {
            horizontal: spacing,
            vertical: spacing,
        }
    }

    /// Content size of an item after the gap inset, floored at zero.
    pub fn inner_size<T>(&self, item: &PositionedItem<T>) -> Size {
        Size::new(
            (item.width - self.horizontal).max(0.0),
            (item.height - self.vertical).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinboard_layout::{layout, SizedItem};

    fn grid() -> MasonryLayout<usize> {
        // Two columns of 100-wide items with varying heights.
        let items = (0..10)
            .map(|i| SizedItem {
                width: 100.0,
                height: 100.0 + (i % 3) as f32 * 40.0,
                payload: i,
            })
            .collect();
        layout(items, 200.0, 100.0).unwrap()
    }

    #[test]
    fn top_of_the_feed_is_visible_at_offset_zero() {
        let grid = grid();
        let visible = visible_range(&grid, Viewport::new(0.0, 250.0), 0.0);
        assert!(visible.contains(&0));
        assert!(visible.contains(&1));
        // Far items stay out.
        assert!(!visible.contains(&9));
    }

    #[test]
    fn scrolled_window_drops_items_above_it() {
        let grid = grid();
        let visible = visible_range(&grid, Viewport::new(400.0, 200.0), 0.0);
        assert!(!visible.contains(&0));
        for index in &visible {
            let item = &grid.items[*index];
            assert!(item.top < 600.0 && item.top + item.height > 400.0);
        }
    }

    #[test]
    fn overscan_widens_the_window() {
        let grid = grid();
        let tight = visible_range(&grid, Viewport::new(300.0, 100.0), 0.0);
        let wide = visible_range(&grid, Viewport::new(300.0, 100.0), 200.0);
        assert!(wide.len() >= tight.len());
        for index in &tight {
            assert!(wide.contains(index));
        }
    }

    #[test]
    fn indices_come_back_in_feed_order() {
        let grid = grid();
        let visible = visible_range(&grid, Viewport::new(0.0, 10_000.0), 0.0);
        let mut sorted = visible.clone();
        sorted.sort_unstable();
        assert_eq!(visible, sorted);
        assert_eq!(visible.len(), grid.len());
    }

    #[test]
    fn spacing_insets_the_full_box() {
        let item = PositionedItem {
            width: 100.0,
            height: 150.0,
            top: 0.0,
            left: 0.0,
            payload: (),
        };
        let spacing = ListSpacing::uniform(8.0);
        assert_eq!(spacing.inner_size(&item), Size::new(92.0, 142.0));
    }

    #[test]
    fn spacing_never_goes_negative() {
        let item = PositionedItem {
            width: 4.0,
            height: 4.0,
            top: 0.0,
            left: 0.0,
            payload: (),
        };
        let spacing = ListSpacing::uniform(10.0);
        assert_eq!(spacing.inner_size(&item), Size::ZERO);
    }
}
