//! Cancellable idle scheduling.
//!
//! A layout pass is deferred until the host declares itself idle so it
//! never lands in the middle of a scroll or animation. Hosts bridge
//! [`IdleScheduler`] to their platform's interaction-completion primitive;
//! [`ManualIdleScheduler`] is a deterministic queue for headless use and
//! tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Identifies one scheduled idle callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdleCallbackId(u64);

impl IdleCallbackId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Defers callbacks until the host UI is idle.
pub trait IdleScheduler {
    /// Schedules `callback` to run once the host goes idle.
    fn run_when_idle(&self, callback: Box<dyn FnOnce()>) -> IdleCallbackId;

    /// Cancels a scheduled callback. Idempotent, and a no-op when the
    /// callback already ran.
    fn cancel(&self, id: IdleCallbackId);
}

/// Owns one scheduled callback and cancels it when dropped, so a torn-down
/// holder can never receive a stale pass.
pub struct IdleRegistration {
    scheduler: Rc<dyn IdleScheduler>,
    id: Option<IdleCallbackId>,
}

impl IdleRegistration {
    pub fn new(scheduler: Rc<dyn IdleScheduler>, id: IdleCallbackId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for IdleRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

/// Queue-backed scheduler: nothing runs until [`run_pending`] is called.
///
/// [`run_pending`]: ManualIdleScheduler::run_pending
#[derive(Default)]
pub struct ManualIdleScheduler {
    queue: RefCell<VecDeque<(IdleCallbackId, Box<dyn FnOnce()>)>>,
    next_id: Cell<u64>,
}

impl ManualIdleScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs queued callbacks until the queue is empty, including ones
    /// scheduled by the callbacks themselves. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            // Pop before invoking: the callback may borrow the queue again.
            let entry = self.queue.borrow_mut().pop_front();
            let Some((_, callback)) = entry else {
                break;
            };
            callback();
            ran += 1;
        }
        ran
    }

    /// Number of callbacks waiting for idle.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl IdleScheduler for ManualIdleScheduler {
    fn run_when_idle(&self, callback: Box<dyn FnOnce()>) -> IdleCallbackId {
        let id = IdleCallbackId::new(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.queue.borrow_mut().push_back((id, callback));
        id
    }

    fn cancel(&self, id: IdleCallbackId) {
        self.queue.borrow_mut().retain(|(queued, _)| *queued != id);
    }
}
