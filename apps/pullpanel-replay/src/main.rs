use anyhow::{bail, Context, Result};
use pullpanel_gesture::PointerSample;
use pullpanel_testing::{FrameDriver, GestureScript};
use pullpanel_transition::prelude::*;

const SHIFT_RANGE: f32 = 1600.0;
const MAX_FRAMES: usize = 240;

/// Host that logs what a real launcher would draw.
#[derive(Default)]
struct LoggingHost {
    frames: usize,
    settled: Option<Endpoint>,
}

impl TransitionHost for LoggingHost {
    fn apply_visuals(&mut self, visuals: &ProgressVisuals) {
        log::debug!(
            "panel y={:.1} alpha={:.2} workspace y={:.1} alpha={:.2}",
            visuals.panel_translation,
            visuals.content_alpha,
            visuals.workspace_translation,
            visuals.workspace_alpha
        );
    }

    fn set_light_status_bar(&mut self, light: bool) {
        log::trace!("light status bar: {light}");
    }

    fn prepare_pull(&mut self) {
        log::info!("preparing pull");
    }

    fn expand_system_panel(&mut self) {
        log::info!("expanding system panel");
    }

    fn request_frame(&mut self) {
        self.frames += 1;
    }

    fn on_settled(&mut self, endpoint: Endpoint) {
        log::info!("settled at {endpoint:?}");
        self.settled = Some(endpoint);
    }
}

fn feed(controller: &mut TransitionController<LoggingHost>, samples: &[PointerSample]) {
    let mut intercepted = false;
    for sample in samples {
        if intercepted {
            controller.on_touch_event(sample);
        } else {
            intercepted = controller.on_intercept_touch_event(sample);
        }
    }
}

fn run_scenario(name: &str, controller: &mut TransitionController<LoggingHost>) -> Result<()> {
    let mut frames = FrameDriver::new();
    match name {
        "open" => {
            let duration = controller.config().default_duration_ms;
            controller.animate_to_open(duration);
        }
        "fling-close" => {
            controller.finish_pull_up();
            let swipe = GestureScript::new()
                .down(540.0, 300.0)
                .move_by(0.0, 40.0)
                .move_by(0.0, 60.0)
                .move_by(0.0, 80.0)
                .up();
            feed(controller, swipe.samples());
        }
        "recatch" => {
            let swipe = GestureScript::new()
                .down(540.0, 1500.0)
                .move_by(0.0, -40.0)
                .move_by(0.0, -300.0)
                .up();
            feed(controller, swipe.samples());
            for _ in 0..4 {
                frames.step(controller);
            }
            log::info!("re-catching at progress {:.3}", controller.progress());
            let recatch = GestureScript::starting_at_time(swipe.now_ms() + 100)
                .step(120)
                .down(540.0, 900.0)
                .move_by(0.0, 60.0)
                .move_by(0.0, 40.0)
                .up();
            feed(controller, recatch.samples());
        }
        "two-finger" => {
            let swipe = GestureScript::new()
                .step(40)
                .down(400.0, 1500.0)
                .move_by(0.0, -30.0)
                .pointer_down(1, 700.0, 1400.0)
                .move_by(0.0, -100.0)
                .pointer_up(0)
                .move_pointer(1, 700.0, 1000.0)
                .move_pointer(1, 700.0, 700.0)
                .up();
            feed(controller, swipe.samples());
        }
        other => bail!("unknown scenario `{other}` (expected open, fling-close, recatch or two-finger)"),
    }

    let delivered = frames.run_until_idle(controller, MAX_FRAMES);
    log::info!(
        "{name}: {delivered} frames, {} requested, progress {:.3}",
        controller.host().frames,
        controller.progress()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let scenario = std::env::args().nth(1).unwrap_or_else(|| "open".to_string());

    let mut controller = TransitionController::new(LoggingHost::default(), TransitionConfig::default());
    controller
        .attach(SHIFT_RANGE)
        .context("attaching transition controller")?;

    run_scenario(&scenario, &mut controller)?;

    match controller.host().settled {
        Some(endpoint) => println!("{scenario}: settled {endpoint:?}"),
        None => println!("{scenario}: still at progress {:.3}", controller.progress()),
    }
    Ok(())
}
