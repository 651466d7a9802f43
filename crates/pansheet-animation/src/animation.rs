//! Easing curves and the frame-driven height tween.

use pansheet_core::{FrameCallbackRegistration, FrameClock};
use std::cell::RefCell;
use std::rc::Rc;

/// Easing functions for snap transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using a cubic curve.
    EaseIn,
    /// Ease out using a cubic curve.
    EaseOut,
    /// Ease in and out using a cubic curve. The classic platform default
    /// for sheet transitions.
    EaseInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve evaluation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t matching the x fraction, with a
    // bisection fallback when the derivative collapses.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Duration and easing of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }
}

impl Default for AnimationSpec {
    /// The sheet's snap transition: 300 ms, single ease, no spring.
    fn default() -> Self {
        Self::tween(300, Easing::EaseInOut)
    }
}

/// A height value that can tween towards a target on the frame clock.
///
/// Generic over a one-shot completion payload `C` (the controller's
/// transition token in production): the payload rides along with the tween
/// and surfaces through [`take_finished`] when the tween settles, so the
/// host loop can hand it back to the controller. Starting a new tween or
/// snapping drops the superseded payload -- a superseded transition never
/// completes.
///
/// Cloning shares the underlying value, like the state holders it is
/// modelled on.
///
/// [`take_finished`]: AnimatedHeight::take_finished
pub struct AnimatedHeight<C: 'static> {
    inner: Rc<RefCell<AnimatedHeightInner<C>>>,
}

struct AnimatedHeightInner<C> {
    clock: FrameClock,
    current: f32,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    completion: Option<C>,
    finished: Option<C>,
    registration: Option<FrameCallbackRegistration>,
}

impl<C: 'static> AnimatedHeight<C> {
    pub fn new(initial: f32, clock: FrameClock) -> Self {
        let inner = AnimatedHeightInner {
            clock,
            current: initial,
            start: initial,
            target: initial,
            spec: AnimationSpec::default(),
            start_time_nanos: None,
            completion: None,
            finished: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// The interpolated height as of the last drained frame.
    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Jump to a value immediately, cancelling any running tween. The
    /// cancelled tween's payload is dropped.
    pub fn snap_to(&self, value: f32) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        if inner.completion.take().is_some() {
            log::trace!("tween superseded by snap to {value}");
        }
        inner.current = value;
        inner.start = value;
        inner.target = value;
        inner.start_time_nanos = None;
    }

    /// Tween from the current value to `target`, delivering `completion`
    /// through [`AnimatedHeight::take_finished`] once settled.
    pub fn animate_to(&self, target: f32, spec: AnimationSpec, completion: C) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            if inner.completion.take().is_some() {
                log::trace!("tween superseded by a new target {target}");
            }
            inner.start = inner.current;
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.completion = Some(completion);
        }
        Self::schedule_frame(&self.inner);
    }

    /// Collects the completion payload of a settled tween, at most once
    /// per tween.
    pub fn take_finished(&self) -> Option<C> {
        self.inner.borrow_mut().finished.take()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatedHeightInner<C>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatedHeightInner<C>>>, frame_time_nanos: u64) {
        let mut schedule_next = false;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            let progress = inner.spec.easing.transform(linear_progress);

            inner.current = inner.start + (inner.target - inner.start) * progress;

            if linear_progress >= 1.0 {
                inner.current = inner.target;
                inner.start = inner.target;
                inner.start_time_nanos = None;
                inner.finished = inner.completion.take();
            } else {
                schedule_next = true;
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<C: 'static> Clone for AnimatedHeight<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
