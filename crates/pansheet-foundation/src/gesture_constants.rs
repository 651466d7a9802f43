//! Shared gesture constants.

/// Maximum release velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on
/// a baseline density. Estimated velocities above this are clamped before
/// they reach the snap decision; since the flick threshold sits far below
/// the cap, clamping never changes which tier a release snaps to.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
