//! Time-based tween animation for pansheet.
//!
//! Hosts that want ready-made snap transitions drive an [`AnimatedHeight`]
//! from their frame loop: the controller's `animate_height` request becomes
//! an `animate_to`, each rendered frame drains the shared
//! [`FrameClock`], and the finished transition's completion payload is
//! collected with `take_finished` and handed back to the controller.
//!
//! [`FrameClock`]: pansheet_core::FrameClock

pub mod animation;

pub use animation::{AnimatedHeight, AnimationSpec, Easing};
