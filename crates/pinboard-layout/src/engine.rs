//! Greedy shortest-column placement.
//!
//! Items are processed in feed order and each goes to the currently
//! shortest column, with the lowest index winning ties. Columns end up
//! visually near-balanced (they differ by at most roughly one item height)
//! without attempting globally optimal packing; the linear scan per item
//! is O(items * columns), fine for the 2-5 column feeds this serves.

use smallvec::{smallvec, SmallVec};

use crate::config::MasonryConfig;
use crate::error::LayoutError;
use crate::item::{MasonryItem, MasonryLayout, PositionedItem, SizedItem};

/// Inline capacity for the per-column accumulators. Real feeds use 2-5
/// columns, so placement never touches the heap for them.
type ColumnVec = SmallVec<[f32; 8]>;

/// Running column heights for one placement pass. Transient: built at the
/// start of a pass, discarded at the end, no identity beyond the index.
#[derive(Debug)]
struct ColumnHeights {
    heights: ColumnVec,
}

impl ColumnHeights {
    fn new(columns: usize) -> Self {
        Self {
            heights: smallvec![0.0; columns],
        }
    }

    /// Index of the shortest column. The strict `<` scan keeps the lowest
    /// index on ties, which makes placement reproducible.
    fn shortest(&self) -> usize {
        let mut best = 0;
        for (index, height) in self.heights.iter().enumerate().skip(1) {
            if *height < self.heights[best] {
                best = index;
            }
        }
        best
    }

    /// Appends an item to `column`, returning the top it was placed at.
    fn push(&mut self, column: usize, height: f32) -> f32 {
        let top = self.heights[column];
        self.heights[column] += height;
        top
    }

    fn tallest(&self) -> f32 {
        self.heights.iter().copied().fold(0.0, f32::max)
    }
}

/// Derives the column count from the geometry the caller sized items with.
fn derive_columns(container_width: f32, item_width: f32) -> Result<usize, LayoutError> {
    let invalid = LayoutError::InvalidLayoutConfig {
        container_width,
        item_width,
    };
    if container_width <= 0.0
        || !container_width.is_finite()
        || item_width <= 0.0
        || !item_width.is_finite()
    {
        return Err(invalid);
    }
    let columns = (container_width / item_width).round();
    if columns < 1.0 {
        return Err(invalid);
    }
    Ok(columns as usize)
}

/// Places sized items into columns, producing absolute positions and the
/// overall content height.
///
/// `item_width` must be the `container_width / columns` the items were
/// sized with; the engine re-derives the column count from it and trusts
/// the caller for consistency. The returned `items` are index-aligned with
/// the input, whatever column each one landed in. An empty feed is valid
/// and yields a zero-height layout; degenerate geometry is an error before
/// any output is produced.
pub fn layout<T>(
    items: Vec<SizedItem<T>>,
    container_width: f32,
    item_width: f32,
) -> Result<MasonryLayout<T>, LayoutError> {
    let columns = derive_columns(container_width, item_width)?;

    let mut heights = ColumnHeights::new(columns);
    let mut positioned = Vec::with_capacity(items.len());
    for item in items {
        let column = heights.shortest();
        let top = heights.push(column, item.height);
        positioned.push(PositionedItem {
            width: item.width,
            height: item.height,
            top,
            left: column as f32 * item_width,
            payload: item.payload,
        });
    }

    Ok(MasonryLayout {
        items: positioned,
        container_width,
        container_height: heights.tallest(),
    })
}

/// Runs a full pass: validate the config, size every item (extra height
/// included), then place. This is the entry point the list layer uses.
pub fn compute_layout<T>(
    items: impl IntoIterator<Item = MasonryItem<T>>,
    config: &MasonryConfig,
) -> Result<MasonryLayout<T>, LayoutError> {
    config.validate()?;
    let sized = items
        .into_iter()
        .map(|item| {
            let size = config.resize(item.intrinsic_width, item.intrinsic_height);
            SizedItem::new(size, item.payload)
        })
        .collect();
    layout(sized, config.container_width, config.item_width())
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
