//! Item and geometry types flowing through a masonry pass.

/// Display size of one item.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// An input item: intrinsic dimensions plus an opaque payload.
///
/// Intrinsic dimensions are immutable inputs; the payload is carried
/// through sizing and placement unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct MasonryItem<T> {
    pub intrinsic_width: f32,
    pub intrinsic_height: f32,
    pub payload: T,
}

impl<T> MasonryItem<T> {
    pub fn new(intrinsic_width: f32, intrinsic_height: f32, payload: T) -> Self {
        Self {
            intrinsic_width,
            intrinsic_height,
            payload,
        }
    }
}

/// An item after sizing: intrinsic dimensions replaced by display
/// dimensions, payload untouched. One per input item, order preserving.
#[derive(Clone, Debug, PartialEq)]
pub struct SizedItem<T> {
    pub width: f32,
    pub height: f32,
    pub payload: T,
}

impl<T> SizedItem<T> {
    pub fn new(size: Size, payload: T) -> Self {
        Self {
            width: size.width,
            height: size.height,
            payload,
        }
    }
}

/// A sized item with its absolute placement within the container.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedItem<T> {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
    pub payload: T,
}

/// Result of one layout pass.
///
/// `items` is index-aligned with the input feed. `container_height` is the
/// tallest column after placement; header/footer chrome is added on top of
/// it by the list layer, never in here.
#[derive(Clone, Debug, PartialEq)]
pub struct MasonryLayout<T> {
    pub items: Vec<PositionedItem<T>>,
    pub container_width: f32,
    pub container_height: f32,
}

impl<T> MasonryLayout<T> {
    /// The zero-item, zero-height layout. Also the published fallback when
    /// a pass fails outright.
    pub fn empty(container_width: f32) -> Self {
        Self {
            items: Vec::new(),
            container_width,
            container_height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
