//! Recompute-on-change controller for a masonry list.
//!
//! Every input change defers exactly one layout pass to idle time. A newer
//! change before the pass fires supersedes it, so the latest inputs always
//! win and duplicate work never queues up. Teardown cancels outstanding
//! work; a pass that somehow fires afterwards does nothing.
//!
//! Single-threaded by design: the layout pass itself is pure and the
//! controller mirrors a host UI loop, so shared state is `Rc`/`RefCell`,
//! not locks.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use pinboard_layout::{compute_layout, MasonryConfig, MasonryItem, MasonryLayout};
use web_time::Instant;

use crate::chrome::ListChrome;
use crate::scheduler::{IdleRegistration, IdleScheduler};

/// Invoked with every freshly published layout.
pub type LayoutListener<T> = Box<dyn Fn(&MasonryLayout<T>)>;

/// Drives masonry recomputation for one list instance.
pub struct MasonryListController<T> {
    scheduler: Rc<dyn IdleScheduler>,
    inner: Rc<RefCell<Inner<T>>>,
}

struct Inner<T> {
    config: MasonryConfig,
    items: Vec<MasonryItem<T>>,
    chrome: ListChrome,
    layout: MasonryLayout<T>,
    listener: Option<LayoutListener<T>>,
    pending: Option<IdleRegistration>,
}

impl<T: Clone + 'static> MasonryListController<T> {
    pub fn new(scheduler: Rc<dyn IdleScheduler>, config: MasonryConfig) -> Self {
        let inner = Inner {
            config,
            items: Vec::new(),
            chrome: ListChrome::new(),
            layout: MasonryLayout::empty(config.container_width),
            listener: None,
            pending: None,
        };
        Self {
            scheduler,
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Registers the consumer notified after each pass, replacing any
    /// previous listener.
    pub fn set_listener(&self, listener: impl Fn(&MasonryLayout<T>) + 'static) {
        self.inner.borrow_mut().listener = Some(Box::new(listener));
    }

    /// Replaces the item feed and schedules a pass.
    pub fn set_items(&self, items: Vec<MasonryItem<T>>) {
        self.inner.borrow_mut().items = items;
        self.schedule();
    }

    /// Replaces the geometry and sizing policy and schedules a pass.
    pub fn set_config(&self, config: MasonryConfig) {
        self.inner.borrow_mut().config = config;
        self.schedule();
    }

    /// Reports the on-screen header measurement. Purely additive to the
    /// scrollable height; does not trigger a pass.
    pub fn set_measured_header(&self, height: f32) {
        self.inner.borrow_mut().chrome.set_measured_header(height);
    }

    pub fn set_footer_height(&self, height: f32) {
        self.inner.borrow_mut().chrome.set_footer_height(height);
    }

    /// Snapshot of the last published layout.
    pub fn layout(&self) -> MasonryLayout<T> {
        self.inner.borrow().layout.clone()
    }

    pub fn item_count(&self) -> usize {
        self.inner.borrow().layout.len()
    }

    /// Content height plus header/footer chrome, the height the scroll
    /// surface should report.
    pub fn scrollable_height(&self) -> f32 {
        let inner = self.inner.borrow();
        inner.layout.container_height + inner.chrome.added_height()
    }

    /// Whether a pass is scheduled but has not fired yet.
    pub fn has_pending_pass(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    fn schedule(&self) {
        // Supersede, never queue: at most one pass is in flight.
        if let Some(previous) = self.inner.borrow_mut().pending.take() {
            previous.cancel();
        }

        let weak = Rc::downgrade(&self.inner);
        let id = self
            .scheduler
            .run_when_idle(Box::new(move || Inner::run_pass(&weak)));
        let registration = IdleRegistration::new(Rc::clone(&self.scheduler), id);
        self.inner.borrow_mut().pending = Some(registration);
    }
}

impl<T: Clone> Inner<T> {
    fn run_pass(cell: &Weak<RefCell<Self>>) {
        // A torn-down controller must never produce a result.
        let Some(cell) = cell.upgrade() else {
            return;
        };

        let (config, items) = {
            let mut inner = cell.borrow_mut();
            inner.pending = None;
            (inner.config, inner.items.clone())
        };

        let started = Instant::now();
        let layout = if items.is_empty() {
            // An empty feed is valid and publishes the empty layout
            // without touching the engine.
            MasonryLayout::empty(config.container_width)
        } else {
            match compute_layout(items, &config) {
                Ok(layout) => layout,
                Err(error) => {
                    // Caller misconfiguration. A partial grid is worse
                    // than an empty one, so fall back to zero items.
                    log::error!("masonry pass failed ({error}), publishing empty layout");
                    MasonryLayout::empty(config.container_width)
                }
            }
        };
        log::debug!(
            "masonry pass placed {} items in {:?}",
            layout.items.len(),
            started.elapsed()
        );

        // Notify outside the borrow so the listener may read the
        // controller again.
        let (snapshot, listener) = {
            let mut inner = cell.borrow_mut();
            inner.layout = layout;
            (inner.layout.clone(), inner.listener.take())
        };
        if let Some(listener) = listener {
            listener(&snapshot);
            let mut inner = cell.borrow_mut();
            if inner.listener.is_none() {
                inner.listener = Some(listener);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualIdleScheduler;
    use std::cell::Cell;

    fn controller(
        config: MasonryConfig,
    ) -> (Rc<ManualIdleScheduler>, MasonryListController<&'static str>) {
        let scheduler = Rc::new(ManualIdleScheduler::new());
        let controller =
            MasonryListController::new(Rc::clone(&scheduler) as Rc<dyn IdleScheduler>, config);
        (scheduler, controller)
    }

    fn feed() -> Vec<MasonryItem<&'static str>> {
        vec![
            MasonryItem::new(100.0, 100.0, "a"),
            MasonryItem::new(50.0, 150.0, "b"),
            MasonryItem::new(200.0, 50.0, "c"),
        ]
    }

    #[test]
    fn nothing_is_published_before_idle() {
        let (scheduler, controller) = controller(MasonryConfig::new(300.0, 3));
        controller.set_items(feed());

        assert!(controller.has_pending_pass());
        assert!(controller.layout().is_empty());

        scheduler.run_pending();
        assert!(!controller.has_pending_pass());
        assert_eq!(controller.item_count(), 3);
    }

    #[test]
    fn pass_produces_the_expected_grid() {
        let (scheduler, controller) = controller(MasonryConfig::new(300.0, 3));
        controller.set_items(feed());
        scheduler.run_pending();

        let layout = controller.layout();
        assert_eq!(layout.container_height, 200.0);
        assert_eq!((layout.items[1].top, layout.items[1].left), (0.0, 100.0));
        let payloads: Vec<_> = layout.items.iter().map(|item| item.payload).collect();
        assert_eq!(payloads, vec!["a", "b", "c"]);
    }

    #[test]
    fn newer_trigger_supersedes_the_pending_one() {
        let (scheduler, controller) = controller(MasonryConfig::new(300.0, 3));
        controller.set_items(feed());
        controller.set_items(vec![MasonryItem::new(100.0, 100.0, "only")]);

        // The first trigger was cancelled, exactly one pass runs.
        assert_eq!(scheduler.run_pending(), 1);
        assert_eq!(controller.item_count(), 1);
        assert_eq!(controller.layout().items[0].payload, "only");
    }

    #[test]
    fn listener_sees_each_published_layout() {
        let (scheduler, controller) = controller(MasonryConfig::new(300.0, 3));
        let seen = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&seen);
        controller.set_listener(move |layout| counter.set(layout.len()));

        controller.set_items(feed());
        scheduler.run_pending();
        assert_eq!(seen.get(), 3);

        controller.set_items(Vec::new());
        scheduler.run_pending();
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn invalid_config_falls_back_to_the_empty_layout() {
        let (scheduler, controller) = controller(MasonryConfig::new(300.0, 3));
        controller.set_items(feed());
        scheduler.run_pending();
        assert_eq!(controller.item_count(), 3);

        controller.set_config(MasonryConfig::new(300.0, 0));
        scheduler.run_pending();
        assert!(controller.layout().is_empty());
        assert_eq!(controller.scrollable_height(), 0.0);
    }

    #[test]
    fn drop_cancels_the_pending_pass() {
        let (scheduler, controller) = controller(MasonryConfig::new(300.0, 3));
        controller.set_items(feed());
        assert_eq!(scheduler.pending(), 1);

        drop(controller);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.run_pending(), 0);
    }

    #[test]
    fn chrome_is_added_on_top_of_content_height() {
        let (scheduler, controller) = controller(MasonryConfig::new(300.0, 3));
        controller.set_items(feed());
        scheduler.run_pending();
        assert_eq!(controller.scrollable_height(), 200.0);

        controller.set_footer_height(40.0);
        // Footer alone adds nothing until the header is measured.
        assert_eq!(controller.scrollable_height(), 200.0);

        controller.set_measured_header(120.0);
        assert_eq!(controller.scrollable_height(), 200.0 + 120.0 + 40.0 + 60.0);
    }

    #[test]
    fn config_change_reflows_the_same_feed() {
        let (scheduler, controller) = controller(MasonryConfig::new(300.0, 3));
        controller.set_items(feed());
        scheduler.run_pending();
        assert_eq!(controller.layout().items[0].width, 100.0);

        controller.set_config(MasonryConfig::new(400.0, 2));
        scheduler.run_pending();
        let layout = controller.layout();
        assert_eq!(layout.items[0].width, 200.0);
        assert_eq!(layout.container_width, 400.0);
    }
}
