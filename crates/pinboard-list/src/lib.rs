//! Orchestration for Pinboard masonry lists
//!
//! The layout pass itself lives in `pinboard-layout` and is pure; this
//! crate owns everything around it: deferring recomputation until the host
//! is idle, superseding stale triggers, header/footer chrome accounting,
//! and the visible-range helpers a windowed renderer consumes.

mod chrome;
mod controller;
mod scheduler;
mod viewport;

pub use chrome::*;
pub use controller::*;
pub use scheduler::*;
pub use viewport::*;

pub mod prelude {
    pub use crate::chrome::ListChrome;
    pub use crate::controller::MasonryListController;
    pub use crate::scheduler::{IdleRegistration, IdleScheduler, ManualIdleScheduler};
    pub use crate::viewport::{visible_range, ListSpacing, Viewport};
}
