//! Single-threaded frame callback registry.
//!
//! Hosts drive the clock by calling [`FrameClock::drain_frame_callbacks`]
//! once per rendered frame with the frame timestamp; there are no internal
//! timers or threads. Callbacks are one-shot -- anything that wants the
//! next frame too re-registers from inside its callback and runs on the
//! following drain.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;
type PendingFrames = SmallVec<[(FrameCallbackId, FrameCallback); 4]>;

#[derive(Clone, Default)]
pub struct FrameClock {
    inner: Rc<RefCell<ClockInner>>,
}

#[derive(Default)]
struct ClockInner {
    next_id: FrameCallbackId,
    pending: PendingFrames,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a one-shot callback for the next drain. Dropping the
    /// returned registration (or calling [`FrameCallbackRegistration::cancel`])
    /// before the drain unregisters it.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.pending.push((id, Box::new(callback)));
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Whether any callback is waiting for a frame. Hosts use this to keep
    /// their frame loop alive while animations run.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().pending.is_empty()
    }

    /// Fires the callbacks registered before this call with the given frame
    /// timestamp. Callbacks registered while draining (including
    /// re-registrations) run on the next drain.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let batch: PendingFrames = std::mem::take(&mut self.inner.borrow_mut().pending);
        for (_, callback) in batch {
            callback(frame_time_nanos);
        }
    }
}

/// Handle to a registered frame callback. Dropping it cancels the callback
/// if it has not fired yet.
pub struct FrameCallbackRegistration {
    clock: Weak<RefCell<ClockInner>>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let (Some(id), Some(clock)) = (self.id.take(), self.clock.upgrade()) {
            clock.borrow_mut().pending.retain(|(entry, _)| *entry != id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn callback_fires_once_with_frame_time() {
        let clock = FrameClock::new();
        let seen = Rc::new(Cell::new(0u64));
        let registration = clock.with_frame_nanos({
            let seen = Rc::clone(&seen);
            move |time| seen.set(time)
        });
        assert!(clock.has_pending());

        clock.drain_frame_callbacks(16_000_000);
        assert_eq!(seen.get(), 16_000_000);
        assert!(!clock.has_pending());

        // A second drain must not re-run the one-shot callback.
        clock.drain_frame_callbacks(32_000_000);
        assert_eq!(seen.get(), 16_000_000);
        drop(registration);
    }

    #[test]
    fn cancel_unregisters() {
        let clock = FrameClock::new();
        let fired = Rc::new(Cell::new(false));
        let registration = clock.with_frame_nanos({
            let fired = Rc::clone(&fired);
            move |_| fired.set(true)
        });
        registration.cancel();
        assert!(!clock.has_pending());

        clock.drain_frame_callbacks(0);
        assert!(!fired.get());
    }

    #[test]
    fn drop_cancels() {
        let clock = FrameClock::new();
        let fired = Rc::new(Cell::new(false));
        {
            let _registration = clock.with_frame_nanos({
                let fired = Rc::clone(&fired);
                move |_| fired.set(true)
            });
        }
        clock.drain_frame_callbacks(0);
        assert!(!fired.get());
    }

    #[test]
    fn re_registration_lands_on_next_drain() {
        type Slot = Rc<RefCell<Option<FrameCallbackRegistration>>>;

        fn tick(clock: &FrameClock, count: &Rc<Cell<u32>>, slot: &Slot) {
            let clock_again = clock.clone();
            let count_again = Rc::clone(count);
            let slot_again = Rc::clone(slot);
            let registration = clock.with_frame_nanos(move |_| {
                count_again.set(count_again.get() + 1);
                if count_again.get() < 3 {
                    tick(&clock_again, &count_again, &slot_again);
                }
            });
            *slot.borrow_mut() = Some(registration);
        }

        let clock = FrameClock::new();
        let count = Rc::new(Cell::new(0u32));
        let slot: Slot = Rc::new(RefCell::new(None));

        tick(&clock, &count, &slot);
        clock.drain_frame_callbacks(1);
        assert_eq!(count.get(), 1);
        clock.drain_frame_callbacks(2);
        assert_eq!(count.get(), 2);
        clock.drain_frame_callbacks(3);
        assert_eq!(count.get(), 3);
        clock.drain_frame_callbacks(4);
        assert_eq!(count.get(), 3);
    }
}
