//! Headless walk through a page stack with one long page.
//!
//! Run with `RUST_LOG=quick_slider=debug` to see every classification.

use std::time::Duration;

use quick_slider::{
    Decision, GesturePoint, LogPanel, MemorySurface, QuickSlider, SliderArgs, SliderError,
};
use tracing::info;
use web_time::Instant;

const VIEWPORT: f32 = 640.0;

/// One scripted user action.
enum Step {
    Swipe(f32),
    NativeScroll(usize, f32),
    FinishTransition,
}

fn main() -> Result<(), SliderError> {
    init_tracing();

    let surface = MemorySurface::new(VIEWPORT, [640.0, 1600.0, 640.0, 300.0]).mark_long(3);
    let panel = LogPanel::new();
    let args = SliderArgs::new(".page")
        .debug(true)
        .duration(Duration::from_millis(350));
    let mut slider = QuickSlider::new(args, surface, panel.clone())?;

    let script = [
        Step::Swipe(-120.0),
        Step::FinishTransition,
        Step::Swipe(-120.0),
        Step::NativeScroll(1, 960.0),
        Step::Swipe(-40.0),
        Step::Swipe(-120.0),
        Step::Swipe(-120.0),
        Step::FinishTransition,
        Step::Swipe(-120.0),
        Step::FinishTransition,
        Step::Swipe(-120.0),
        Step::Swipe(90.0),
        Step::FinishTransition,
    ];

    let mut now = Instant::now();
    for step in script {
        now += Duration::from_millis(200);
        match step {
            Step::Swipe(delta_y) => {
                let start = GesturePoint::new(180.0, 400.0);
                slider.touch_start(Some(start), now);
                let outcome =
                    slider.touch_end(Some(GesturePoint::new(start.x, start.y + delta_y)), now);
                info!(
                    delta_y,
                    decision = ?outcome.decision,
                    page = slider.current_page(),
                    transitioning = slider.is_transitioning(),
                    "swipe"
                );
                if outcome.decision != Decision::Ignore {
                    info!(offset = slider.offset(), "surface moved");
                }
            }
            Step::NativeScroll(page, scroll_top) => {
                slider.surface_mut().set_scroll_top(page, scroll_top);
                info!(page, scroll_top, "native scroll");
            }
            Step::FinishTransition => slider.transition_end(),
        }
    }

    info!(panel = %panel.render(), "debug panel");
    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,example=info,quick_slider=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}
