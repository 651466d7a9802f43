//! Testing utilities and harness for pansheet.
//!
//! [`SheetRobot`] drives a real controller through scripted pointer
//! gestures the way a finger would, with a [`RecordingSurface`] standing in
//! for the rendering layer and recording everything the controller asks of
//! it.

pub mod assertions;
pub mod robot;
pub mod surface;

pub use assertions::assert_approx_eq;
pub use robot::SheetRobot;
pub use surface::RecordingSurface;
