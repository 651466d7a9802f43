//! Robot-style driver for scripted sheet gestures.

use crate::assertions::assert_approx_eq;
use crate::surface::RecordingSurface;
use pansheet_core::{SheetConfig, SheetController, SheetValue};
use pansheet_foundation::{PanGestureRecognizer, Point, PointerPhase};

/// Milliseconds between scripted pointer samples, roughly one 60 Hz frame.
const STEP_MS: i64 = 16;

/// Drives a [`SheetController`] through scripted pan gestures.
///
/// The robot plays the role of both the input system (synthesising pointer
/// events with realistic timestamps) and the frame loop (resolving pending
/// snap transitions on request). Pointer samples are spaced [`STEP_MS`]
/// apart, so the drag distance per step determines the release velocity:
/// `drag_by(16.0)` repeated reads as ~1000 px/s, a downward flick, while
/// `drag_by(4.0)` reads as ~250 px/s, below the default threshold.
pub struct SheetRobot {
    controller: SheetController<RecordingSurface>,
    surface: RecordingSurface,
    recognizer: PanGestureRecognizer,
    cursor: Point,
    time_ms: i64,
}

impl Default for SheetRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetRobot {
    pub fn new() -> Self {
        Self::with_config(SheetConfig::default())
    }

    pub fn with_config(config: SheetConfig) -> Self {
        let surface = RecordingSurface::new();
        let handle = surface.clone();
        Self {
            controller: SheetController::new(surface, config),
            surface: handle,
            recognizer: PanGestureRecognizer::new(),
            cursor: Point::new(200.0, 600.0),
            time_ms: 0,
        }
    }

    pub fn controller(&self) -> &SheetController<RecordingSurface> {
        &self.controller
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn value(&self) -> SheetValue {
        self.controller.value()
    }

    pub fn height(&self) -> f32 {
        self.controller.height()
    }

    /// Touch down at the current cursor position.
    pub fn press(&mut self) {
        self.feed(PointerPhase::Start);
    }

    /// Move the pointer down by `dy` (negative = up) over one step.
    pub fn drag_by(&mut self, dy: f32) {
        self.time_ms += STEP_MS;
        self.cursor.y += dy;
        self.feed(PointerPhase::Move);
    }

    /// Lift the pointer where it is.
    pub fn release(&mut self) {
        self.time_ms += STEP_MS;
        self.feed(PointerPhase::End);
    }

    /// Platform-cancelled gesture; handled like a release.
    pub fn cancel(&mut self) {
        self.time_ms += STEP_MS;
        self.feed(PointerPhase::Cancel);
    }

    /// A full gesture: press, `steps` equal drags, release.
    pub fn swipe(&mut self, dy_per_step: f32, steps: usize) {
        self.press();
        for _ in 0..steps {
            self.drag_by(dy_per_step);
        }
        self.release();
    }

    /// Resolve the pending snap transition, as if the host's animation
    /// just finished. Panics if none is in flight.
    pub fn complete_animation(&mut self) {
        let token = self
            .surface
            .take_token()
            .expect("no snap transition in flight");
        self.controller.finish_transition(token);
    }

    fn feed(&mut self, phase: PointerPhase) {
        if let Some(event) = self
            .recognizer
            .on_pointer_event(phase, self.time_ms, self.cursor)
        {
            event.dispatch(&mut self.controller);
        }
    }

    pub fn assert_value(&self, expected: SheetValue) {
        assert_eq!(
            self.controller.value(),
            expected,
            "sheet tier mismatch (heights so far: {:?})",
            self.surface.heights()
        );
    }

    pub fn assert_height(&self, expected: f32, tolerance: f32) {
        assert_approx_eq(self.controller.height(), expected, tolerance, "sheet height");
    }

    pub fn assert_last_animation_target(&self, expected: f32) {
        let target = self
            .surface
            .last_animation_target()
            .expect("no animation requested");
        assert_approx_eq(target, expected, 0.001, "animation target");
    }

    pub fn assert_dismissed_times(&self, expected: usize) {
        assert_eq!(
            self.surface.dismissed_times(),
            expected,
            "dismissal count mismatch"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robot_records_through_the_shared_surface() {
        let mut robot = SheetRobot::new();
        robot.press();
        robot.drag_by(10.0);
        assert_eq!(robot.surface().last_height(), Some(390.0));
        robot.release();
        assert!(robot.surface().has_pending_animation());
        robot.complete_animation();
        assert!(!robot.surface().has_pending_animation());
    }

    #[test]
    #[should_panic(expected = "no snap transition in flight")]
    fn completing_without_a_transition_panics() {
        let mut robot = SheetRobot::new();
        robot.complete_animation();
    }
}
