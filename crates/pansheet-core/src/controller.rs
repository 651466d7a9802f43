//! The gesture-to-snap-state controller and its host boundary.

use crate::config::SheetConfig;
use crate::state::SheetValue;

/// Callback contract between a [`SheetController`] and the host rendering
/// layer.
///
/// The controller never draws; it reports heights through this trait and
/// leaves interpolation to the host. All calls arrive on the single thread
/// delivering gesture events.
pub trait RenderSurface {
    /// Apply a height immediately, without animation. Called on every drag
    /// update and once more with the release height as the starting frame
    /// of a snap transition.
    fn set_height(&mut self, height: f32);

    /// Run an animated transition from the current height to `target` over
    /// `duration_millis`. Ownership of the transition is the host's; when
    /// it completes, hand `token` back to
    /// [`SheetController::finish_transition`]. Starting a newer transition
    /// supersedes this one -- its token can simply be dropped.
    fn animate_height(&mut self, target: f32, duration_millis: u64, token: TransitionToken);

    /// Terminal event: the sheet settled in the hidden tier. The host
    /// should remove the sheet (and any dimming overlay) from its tree.
    fn sheet_dismissed(&mut self);
}

/// One-shot completion continuation for a snap transition.
///
/// Deliberately not `Clone`: returning it to
/// [`SheetController::finish_transition`] consumes it, so a transition can
/// complete at most once. Tokens from superseded gestures are recognised by
/// generation and ignored.
#[derive(Debug)]
pub struct TransitionToken {
    generation: u64,
}

/// Translates pan gesture samples into sheet heights and snap decisions.
///
/// While a drag is active the height follows the finger directly (inverse
/// of the vertical translation, clamped to the configured range). On
/// release the tier moves by at most one step, decided solely by the flick
/// velocity; the resting drag height is discarded and the sheet snaps to
/// the current tier's fixed height. This matches the original behaviour of
/// the gesture: a long slow drag settles back where it started.
pub struct SheetController<S: RenderSurface> {
    surface: S,
    config: SheetConfig,
    value: SheetValue,
    height: f32,
    generation: u64,
    dismissal_armed: bool,
}

impl<S: RenderSurface> SheetController<S> {
    /// Creates a controller settled in the half expanded tier and pushes
    /// the initial height to the surface.
    pub fn new(surface: S, config: SheetConfig) -> Self {
        let height = config.height_for(SheetValue::HalfExpanded);
        let mut controller = Self {
            surface,
            config,
            value: SheetValue::HalfExpanded,
            height,
            generation: 0,
            dismissal_armed: true,
        };
        controller.surface.set_height(height);
        controller
    }

    /// The tier the sheet is settled in or snapping towards.
    pub fn value(&self) -> SheetValue {
        self.value
    }

    /// The model height: the live drag height while a gesture is active,
    /// the snap target once one has been decided.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Feed an incremental drag movement. `delta_y` is the vertical
    /// movement since the previous sample (positive = downwards), not
    /// cumulative from gesture start. The height tracks the inverse of the
    /// translation and is clamped on every update; no tier change happens
    /// here.
    pub fn on_drag_update(&mut self, delta_y: f32) {
        let new_height = self.clamped(self.height - delta_y);
        log::trace!("drag update: delta_y {delta_y} -> height {new_height}");
        self.height = new_height;
        self.surface.set_height(new_height);
    }

    /// Feed the final drag movement and the release velocity. Gesture
    /// cancellation takes this same path.
    ///
    /// The release height is pushed unanimated as the transition's starting
    /// frame, then the flick decision runs: faster than the threshold
    /// downwards lowers the tier by one, faster upwards raises it by one,
    /// anything in `[-threshold, threshold]` leaves the tier alone. The
    /// snap target is always the tier's fixed height.
    pub fn on_drag_end(&mut self, delta_y: f32, velocity_y: f32) {
        let release_height = self.clamped(self.height - delta_y);
        self.surface.set_height(release_height);

        if velocity_y > self.config.flick_threshold {
            self.value = self.value.lowered();
        } else if velocity_y < -self.config.flick_threshold {
            self.value = self.value.raised();
        }
        if !self.value.is_hidden() {
            self.dismissal_armed = true;
        }

        let target = self.config.height_for(self.value);
        log::debug!(
            "release at {release_height} with velocity {velocity_y}: snapping to {:?} ({target})",
            self.value
        );
        // The model height settles on the target immediately; the surface
        // animates towards it and reports back through the token.
        self.height = target;
        self.generation += 1;
        let token = TransitionToken {
            generation: self.generation,
        };
        self.surface
            .animate_height(target, self.config.animation_millis, token);
    }

    /// Host notification that an animated transition finished. Stale tokens
    /// (from gestures that have since been superseded) are ignored. A
    /// current token for a transition into the hidden tier fires
    /// [`RenderSurface::sheet_dismissed`], once per entry into that tier.
    pub fn finish_transition(&mut self, token: TransitionToken) {
        if token.generation != self.generation {
            log::trace!(
                "ignoring stale transition token (generation {} != {})",
                token.generation,
                self.generation
            );
            return;
        }
        if self.value.is_hidden() && self.dismissal_armed {
            self.dismissal_armed = false;
            log::debug!("hide transition completed, dismissing sheet");
            self.surface.sheet_dismissed();
        }
    }

    fn clamped(&self, height: f32) -> f32 {
        height.clamp(0.0, self.config.expanded_height)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
