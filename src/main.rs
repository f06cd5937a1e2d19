//! Headless demo: drives a [`Session`] through every control mode with a
//! synthetic hand feed and logs the camera pose.
//!
//! ```text
//! RUST_LOG=info cargo run -- [options.toml] [catalog.toml]
//! ```

use std::path::Path;

use glam::Vec2;
use orrery::gesture::landmarks::{Finger, LANDMARK_COUNT, THUMB_TIP, WRIST};
use orrery::input::{InputEvent, MouseButton};
use orrery::options::Options;
use orrery::util::frame_timing::FrameTiming;
use orrery::{
    BodyCatalog, BodyId, Command, ControlMode, InputProcessor, LandmarkSource,
    Session,
};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Seconds of demo time at which each scripted step fires.
const SCRIPT: &[(f32, Step)] = &[
    (0.5, Step::Mode(ControlMode::Pointer)),
    (0.6, Step::Drag),
    (2.0, Step::Mode(ControlMode::Keyboard)),
    (2.5, Step::Key("KeyW")),
    (2.7, Step::Key("KeyE")),
    (3.0, Step::Key("KeyD")),
    (4.0, Step::Focus(BodyId::Earth)),
    (5.0, Step::Cycle),
    (6.0, Step::Mode(ControlMode::Hand)),
    (9.5, Step::Mode(ControlMode::Autopilot)),
    (12.0, Step::Stop),
];

#[derive(Debug, Clone, Copy)]
enum Step {
    Mode(ControlMode),
    Drag,
    Key(&'static str),
    Focus(BodyId),
    Cycle,
    Stop,
}

/// Scripted hand feed keyed on the sample timestamp: a peace sign sweeping
/// right, then two hands spreading apart, then an open palm held until the
/// focus is released.
struct SyntheticSource {
    rng: ThreadRng,
}

impl SyntheticSource {
    fn jitter(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(-0.0008..0.0008),
            self.rng.random_range(-0.0008..0.0008),
        )
    }

    fn hand(&mut self, wrist: Vec2, extended: [bool; 4]) -> Vec<Vec2> {
        let mut points = vec![wrist; LANDMARK_COUNT];
        for joint in WRIST + 1..=THUMB_TIP {
            points[joint] = wrist + Vec2::new(-0.03, -0.02) * joint as f32;
        }
        for (column, (finger, up)) in
            Finger::ALL.into_iter().zip(extended).enumerate()
        {
            let base = wrist + Vec2::new(0.02 * column as f32 - 0.03, 0.0);
            let reach = if up { [-0.19, -0.22] } else { [-0.13, -0.11] };
            points[finger.pip() - 1] = base + Vec2::new(0.0, -0.10);
            points[finger.pip()] = base + Vec2::new(0.0, -0.15);
            points[finger.pip() + 1] = base + Vec2::new(0.0, reach[0]);
            points[finger.tip()] = base + Vec2::new(0.0, reach[1]);
        }
        let offset = self.jitter();
        points.iter_mut().for_each(|p| *p += offset);
        points
    }
}

impl LandmarkSource for SyntheticSource {
    fn load_model(&mut self) -> Result<(), String> {
        log::info!("Synthetic landmark model ready");
        Ok(())
    }

    fn open_stream(&mut self) -> Result<(), String> {
        log::info!("Synthetic hand feed opened");
        Ok(())
    }

    fn detect(&mut self, timestamp_ms: f64) -> Vec<Vec<Vec2>> {
        let t = (timestamp_ms / 1000.0) as f32;
        match t {
            t if t < 6.8 => {
                let x = 0.3 + (t - 6.0).max(0.0) * 0.3;
                vec![self.hand(Vec2::new(x, 0.7), [true, true, false, false])]
            }
            t if t < 7.6 => {
                let spread = 0.1 + (t - 6.8) * 0.2;
                vec![
                    self.hand(Vec2::new(0.5 - spread / 2.0, 0.7), [false; 4]),
                    self.hand(Vec2::new(0.5 + spread / 2.0, 0.7), [false; 4]),
                ]
            }
            t if t < 7.8 => Vec::new(),
            _ => vec![self.hand(Vec2::new(0.5, 0.7), [true; 4])],
        }
    }

    fn stop(&mut self) {
        log::info!("Synthetic hand feed stopped");
    }
}

fn load_or_default<T: Default>(
    path: Option<String>,
    load: impl FnOnce(&Path) -> Result<T, orrery::OrreryError>,
) -> T {
    let Some(path) = path else {
        return T::default();
    };
    match load(Path::new(&path)) {
        Ok(value) => {
            log::info!("Loaded {path}");
            value
        }
        Err(e) => {
            log::error!("Failed to load {path}: {e}; using defaults");
            T::default()
        }
    }
}

fn run_step(step: Step, session: &mut Session, input: &mut InputProcessor) {
    match step {
        Step::Mode(mode) => session.execute(Command::SetControlMode(mode)),
        Step::Drag => {
            let _ = input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
            let _ = input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            });
            for i in 1..=20 {
                let x = 400.0 + 6.0 * i as f32;
                if let Some(cmd) =
                    input.handle_event(InputEvent::CursorMoved { x, y: 300.0 })
                {
                    session.execute(cmd);
                }
            }
            let _ = input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            });
            if let Some(cmd) = input.handle_event(InputEvent::Scroll { delta: 1.0 }) {
                session.execute(cmd);
            }
        }
        Step::Key(key) => {
            if let Some(cmd) = input.handle_key_press(key) {
                session.execute(cmd);
            }
        }
        Step::Focus(id) => session.execute(Command::SetFocus(Some(id))),
        Step::Cycle => session.execute(Command::CycleFocus),
        Step::Stop => {}
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let options: Options = load_or_default(args.next(), Options::load);
    let catalog: BodyCatalog = load_or_default(args.next(), BodyCatalog::load);

    let source = SyntheticSource { rng: rand::rng() };
    let mut input = InputProcessor::with_key_bindings(options.keybindings.clone());
    let mut session = Session::new(options, catalog, Box::new(source));
    log::info!("Hand tracking: {}", session.hand_status());

    let mut timing = FrameTiming::new(60);
    let mut script = SCRIPT.iter().peekable();
    let mut frame: u64 = 0;
    let mut next_report = 1.0;

    loop {
        std::thread::sleep(timing.time_to_next_frame());
        let tick = timing.tick();

        while let Some(&&(at, step)) = script.peek() {
            if tick.elapsed < at {
                break;
            }
            let _ = script.next();
            if matches!(step, Step::Stop) {
                log::info!("Demo finished after {frame} frames");
                return;
            }
            run_step(step, &mut session, &mut input);
        }

        // Video runs at half the render rate.
        if frame % 2 == 0 {
            if let Some(event) = session.on_video_frame(tick.timestamp_ms) {
                if !event.is_none() {
                    log::debug!("Gesture: {}", event.name());
                }
            }
        }

        session.update(tick.dt);
        frame += 1;

        if tick.elapsed >= next_report {
            next_report += 1.0;
            let pose = session.pose();
            let control = session.control();
            log::info!(
                "[{:>4.1}s {:>5.1} fps] mode={} focus={} eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1})",
                tick.elapsed,
                timing.fps(),
                control.mode(),
                control.focus().map_or("none", BodyId::as_str),
                pose.position.x,
                pose.position.y,
                pose.position.z,
                pose.target.x,
                pose.target.y,
                pose.target.z,
            );
        }
    }
}
