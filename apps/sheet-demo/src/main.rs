//! Scripted, headless run of the full sheet pipeline: pointer events
//! through the pan recognizer into the controller, with snap transitions
//! interpolated on the frame clock in real time.
//!
//! Run with:
//! ```bash
//! cargo run --package sheet-demo
//! ```

use pansheet_animation::{AnimatedHeight, AnimationSpec, Easing};
use pansheet_core::{
    FrameClock, RenderSurface, SheetConfig, SheetController, TransitionToken,
};
use pansheet_foundation::{PanGestureRecognizer, Point, PointerPhase};
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use web_time::Instant;

/// Render surface backed by a frame-clock tween.
struct AnimatedSurface {
    height: AnimatedHeight<TransitionToken>,
    dismissed: Rc<Cell<bool>>,
}

impl RenderSurface for AnimatedSurface {
    fn set_height(&mut self, height: f32) {
        self.height.snap_to(height);
    }

    fn animate_height(&mut self, target: f32, duration_millis: u64, token: TransitionToken) {
        log::info!("animating sheet to {target} over {duration_millis} ms");
        self.height.animate_to(
            target,
            AnimationSpec::tween(duration_millis, Easing::EaseInOut),
            token,
        );
    }

    fn sheet_dismissed(&mut self) {
        log::info!("sheet dismissed, removing panel and dim overlay");
        self.dismissed.set(true);
    }
}

struct Demo {
    controller: SheetController<AnimatedSurface>,
    recognizer: PanGestureRecognizer,
    clock: FrameClock,
    height: AnimatedHeight<TransitionToken>,
    dismissed: Rc<Cell<bool>>,
    started: Instant,
    cursor: Point,
}

impl Demo {
    fn new() -> Self {
        let clock = FrameClock::new();
        let height = AnimatedHeight::new(0.0, clock.clone());
        let dismissed = Rc::new(Cell::new(false));
        let surface = AnimatedSurface {
            height: height.clone(),
            dismissed: Rc::clone(&dismissed),
        };
        Self {
            controller: SheetController::new(surface, SheetConfig::default()),
            recognizer: PanGestureRecognizer::new(),
            clock,
            height,
            dismissed,
            started: Instant::now(),
            cursor: Point::new(200.0, 600.0),
        }
    }

    /// One ~60 Hz frame: sleep, drain the clock, collect a finished
    /// transition if there is one.
    fn frame(&mut self) {
        thread::sleep(Duration::from_millis(16));
        let now_nanos = self.started.elapsed().as_nanos() as u64;
        self.clock.drain_frame_callbacks(now_nanos);
        if let Some(token) = self.height.take_finished() {
            self.controller.finish_transition(token);
        }
    }

    fn feed(&mut self, phase: PointerPhase) {
        let uptime_ms = self.started.elapsed().as_millis() as i64;
        if let Some(event) = self.recognizer.on_pointer_event(phase, uptime_ms, self.cursor) {
            event.dispatch(&mut self.controller);
        }
    }

    /// Press, drag `dy_per_frame` for `frames` frames, release, then let
    /// the snap transition play out.
    fn gesture(&mut self, label: &str, dy_per_frame: f32, frames: usize) {
        log::info!("gesture: {label}");
        self.feed(PointerPhase::Start);
        for _ in 0..frames {
            self.frame();
            self.cursor.y += dy_per_frame;
            self.feed(PointerPhase::Move);
        }
        self.feed(PointerPhase::End);

        while self.clock.has_pending() {
            self.frame();
        }
        log::info!(
            "settled: {:?} at {:.1} px",
            self.controller.value(),
            self.height.value()
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== pansheet demo ===");
    println!("Scripted pan gestures against a live sheet controller:");
    println!("  - a slow drag settles back on the current tier");
    println!("  - flicks move the sheet one tier per release");
    println!("  - hiding the sheet dismisses it after the animation");
    println!();

    let mut demo = Demo::new();

    // A long slow drag: the sheet follows the finger up 200 px, then
    // snaps back to the half expanded tier on release.
    demo.gesture("slow drag up 200 px", -4.0, 50);

    // ~1900 px/s upwards: expand.
    demo.gesture("flick up", -30.0, 6);

    // ~1900 px/s downwards, twice: back to half expanded, then hidden.
    demo.gesture("flick down", 30.0, 6);
    demo.gesture("flick down again", 30.0, 6);

    assert!(demo.dismissed.get(), "demo should end with the sheet dismissed");
    println!();
    println!("sheet dismissed, demo complete");
}
