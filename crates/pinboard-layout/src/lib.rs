//! Masonry sizing and placement for Pinboard

mod config;
mod engine;
mod error;
mod item;
mod resize;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use item::*;
pub use resize::*;

pub mod prelude {
    pub use crate::config::{MasonryConfig, DEFAULT_MAX_ASPECT_RATIO};
    pub use crate::engine::{compute_layout, layout};
    pub use crate::error::LayoutError;
    pub use crate::item::{MasonryItem, MasonryLayout, PositionedItem, Size, SizedItem};
    pub use crate::resize::resize;
}
