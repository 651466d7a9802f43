//! Pointer input and pan gesture recognition for pansheet.
//!
//! A platform feeds raw pointer events into [`PanGestureRecognizer`]; the
//! recognizer turns them into the incremental drag deltas and the release
//! velocity that [`SheetController`] consumes. Velocity is estimated from
//! the pointer history with an impulse-based tracker, since no platform
//! hands it to us for free.
//!
//! [`SheetController`]: pansheet_core::SheetController

pub mod gesture_constants;
pub mod pan_gesture;
pub mod velocity_tracker;

pub use gesture_constants::MAX_FLING_VELOCITY;
pub use pan_gesture::{PanEvent, PanGestureRecognizer, Point, PointerPhase};
pub use velocity_tracker::VelocityTracker1D;
