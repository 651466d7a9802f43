//! Core runtime for pansheet, a snap-point bottom sheet kit.
//!
//! The sheet is a panel whose height follows a vertical pan gesture and, on
//! release, snaps to one of three tiers: hidden, half expanded, expanded.
//! This crate owns the tier state machine ([`SheetValue`]), the snap
//! decision logic ([`SheetController`]) and the narrow callback boundary to
//! the host rendering layer ([`RenderSurface`]). Everything visual -- how
//! heights are drawn, how the 300 ms snap transition is interpolated -- is
//! the host's business; the controller only reports target heights and
//! collects completion tokens.

pub mod config;
pub mod controller;
pub mod frame_clock;
pub mod state;

pub use config::SheetConfig;
pub use controller::{RenderSurface, SheetController, TransitionToken};
pub use frame_clock::{FrameCallbackId, FrameCallbackRegistration, FrameClock};
pub use state::SheetValue;
