//! Pan gesture recognition over a raw pointer stream.

use crate::gesture_constants::MAX_FLING_VELOCITY;
use crate::velocity_tracker::VelocityTracker1D;
use pansheet_core::{RenderSurface, SheetController};

/// A position in logical pixels, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Lifecycle of a single pointer, the subset a one-finger pan needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Output of the recognizer, ready to feed a [`SheetController`].
///
/// `delta_y` is the vertical movement since the previous sample, matching
/// the translation-reset-per-event convention of the pan gesture: positive
/// is downwards. `velocity_y` is the release velocity in px/s, positive
/// downwards, capped at [`MAX_FLING_VELOCITY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    Update { delta_y: f32 },
    End { delta_y: f32, velocity_y: f32 },
}

impl PanEvent {
    /// Routes the event to the matching controller operation.
    pub fn dispatch<S: RenderSurface>(self, controller: &mut SheetController<S>) {
        match self {
            PanEvent::Update { delta_y } => controller.on_drag_update(delta_y),
            PanEvent::End { delta_y, velocity_y } => controller.on_drag_end(delta_y, velocity_y),
        }
    }
}

/// Turns a pointer event stream into incremental pan deltas and a release
/// velocity.
///
/// Tracking starts on [`PointerPhase::Start`]; every move while tracking
/// emits an update with the movement since the previous sample; end and
/// cancel both finish the gesture with the tracked velocity (cancellation
/// is handled identically to a normal release). Events arriving without a
/// preceding start belong to some other gesture and are ignored.
#[derive(Default)]
pub struct PanGestureRecognizer {
    last_position: Option<Point>,
    tracker: VelocityTracker1D,
}

impl PanGestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.last_position.is_some()
    }

    /// Feeds one pointer event; `uptime_ms` stamps the sample for velocity
    /// estimation.
    pub fn on_pointer_event(
        &mut self,
        phase: PointerPhase,
        uptime_ms: i64,
        position: Point,
    ) -> Option<PanEvent> {
        match phase {
            PointerPhase::Start => {
                log::trace!("pan started at {position:?}");
                self.tracker.reset();
                self.tracker.add_sample(uptime_ms, position.y);
                self.last_position = Some(position);
                None
            }
            PointerPhase::Move => {
                let last = self.last_position?;
                self.tracker.add_sample(uptime_ms, position.y);
                self.last_position = Some(position);
                Some(PanEvent::Update {
                    delta_y: position.y - last.y,
                })
            }
            PointerPhase::End | PointerPhase::Cancel => {
                let last = self.last_position.take()?;
                self.tracker.add_sample(uptime_ms, position.y);
                let velocity_y = self.tracker.velocity_capped(MAX_FLING_VELOCITY);
                self.tracker.reset();
                log::trace!("pan ended at {position:?} with velocity {velocity_y}");
                Some(PanEvent::End {
                    delta_y: position.y - last.y,
                    velocity_y,
                })
            }
        }
    }
}
