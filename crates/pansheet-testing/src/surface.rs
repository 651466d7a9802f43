//! A render surface that records instead of drawing.

use pansheet_core::{RenderSurface, TransitionToken};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct SurfaceLog {
    heights: Vec<f32>,
    animations: Vec<(f32, u64)>,
    pending: Option<TransitionToken>,
    dismissed: usize,
}

/// Recording stand-in for the rendering layer.
///
/// Every `set_height` and `animate_height` is logged; the latest
/// transition token is parked until the test resolves it (a newer
/// transition replaces the parked token, dropping the superseded one, the
/// way a real animator would). Clones share the log, so a handle kept
/// outside the controller observes everything.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All heights pushed through `set_height`, oldest first.
    pub fn heights(&self) -> Vec<f32> {
        self.log.borrow().heights.clone()
    }

    pub fn last_height(&self) -> Option<f32> {
        self.log.borrow().heights.last().copied()
    }

    /// All `(target, duration_millis)` animation requests, oldest first.
    pub fn animations(&self) -> Vec<(f32, u64)> {
        self.log.borrow().animations.clone()
    }

    pub fn last_animation_target(&self) -> Option<f32> {
        self.log.borrow().animations.last().map(|(target, _)| *target)
    }

    /// Takes the pending transition token, if an animation is in flight.
    pub fn take_token(&self) -> Option<TransitionToken> {
        self.log.borrow_mut().pending.take()
    }

    pub fn has_pending_animation(&self) -> bool {
        self.log.borrow().pending.is_some()
    }

    /// How many times the controller signalled dismissal.
    pub fn dismissed_times(&self) -> usize {
        self.log.borrow().dismissed
    }
}

impl RenderSurface for RecordingSurface {
    fn set_height(&mut self, height: f32) {
        self.log.borrow_mut().heights.push(height);
    }

    fn animate_height(&mut self, target: f32, duration_millis: u64, token: TransitionToken) {
        let mut log = self.log.borrow_mut();
        log.animations.push((target, duration_millis));
        // Replacing the parked token drops a superseded transition.
        log.pending = Some(token);
    }

    fn sheet_dismissed(&mut self) {
        self.log.borrow_mut().dismissed += 1;
    }
}
