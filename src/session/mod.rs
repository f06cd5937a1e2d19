//! Integration façade owning every component of the control core.
//!
//! A host drives a [`Session`] from two uncorrelated loops:
//!
//! - the video loop calls [`Session::on_video_frame`] once per camera
//!   sample;
//! - the render loop calls [`Session::update`] once per frame and then
//!   reads [`Session::pose`] and [`Session::body_positions`].
//!
//! UI and input go through [`Session::execute`].

mod command;

use glam::Vec3;

pub use command::Command;

use crate::camera::{CameraController, CameraPose, FrameInput};
use crate::catalog::{BodyCatalog, BodyId};
use crate::control::{ControlMode, ControlState};
use crate::gesture::GestureEvent;
use crate::hand::{
    GestureReceiver, HandControllerLifecycle, HandTracker, LandmarkSource,
};
use crate::input::KeyAction;
use crate::options::Options;
use crate::orbit;

/// Owns the catalog, control state, camera controller and hand tracker.
pub struct Session {
    options: Options,
    catalog: BodyCatalog,
    control: ControlState,
    camera: CameraController,
    tracker: HandTracker,
    gestures: GestureReceiver,
    pending_keys: Vec<KeyAction>,
    elapsed: f32,
}

impl Session {
    /// Build a session and start acquiring the landmark source.
    ///
    /// Acquisition failure does not fail construction; it is reported
    /// through [`hand_lifecycle`](Self::hand_lifecycle) and
    /// [`hand_status`](Self::hand_status).
    #[must_use]
    pub fn new(
        options: Options,
        catalog: BodyCatalog,
        source: Box<dyn LandmarkSource>,
    ) -> Self {
        let (mut tracker, gestures) =
            HandTracker::new(source, options.gesture.clone());
        let _ = tracker.initialize();
        log::info!("Session started with {} bodies", catalog.len());
        Self {
            control: ControlState::new(options.simulation.speed),
            camera: CameraController::new(options.camera.clone()),
            options,
            catalog,
            tracker,
            gestures,
            pending_keys: Vec::new(),
            elapsed: 0.0,
        }
    }

    /// Execute a command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::SetControlMode(mode) => self.set_mode(mode),
            Command::SetSimulationSpeed(speed) => {
                self.control.set_simulation_speed(speed);
            }
            Command::SetFocus(focus) => self.control.set_focus(focus),
            Command::CycleFocus => {
                let next = self.catalog.next_after(self.control.focus());
                self.control.set_focus(next);
            }
            Command::OrbitDrag { delta } => {
                if self.control.mode() == ControlMode::Pointer {
                    self.camera.pointer_rotate(delta);
                }
            }
            Command::Zoom { delta } => {
                if self.control.mode() == ControlMode::Pointer {
                    self.camera.pointer_zoom(delta);
                }
            }
            Command::Key(action) => {
                if self.control.mode() != ControlMode::Keyboard {
                    return;
                }
                if action.is_movement() {
                    self.pending_keys.push(action);
                } else {
                    self.control.set_focus(None);
                }
            }
        }
    }

    fn set_mode(&mut self, mode: ControlMode) {
        let previous = self.control.set_mode(mode);
        if previous == mode {
            return;
        }
        if previous == ControlMode::Hand {
            self.tracker.teardown();
            self.gestures.drain();
        }
        if previous == ControlMode::Keyboard {
            self.pending_keys.clear();
        }
        if mode == ControlMode::Hand && !self.tracker.start_stream() {
            log::warn!(
                "Hand mode selected but tracking is {}: {}",
                self.tracker.lifecycle(),
                self.tracker.status()
            );
        }
    }

    /// Process one video sample. Returns the classified gesture, or `None`
    /// when Hand mode is not streaming.
    pub fn on_video_frame(&mut self, timestamp_ms: f64) -> Option<GestureEvent> {
        self.tracker.on_video_frame(timestamp_ms)
    }

    /// Advance one render frame by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);

        let gesture = if self.control.mode() == ControlMode::Hand {
            self.gestures.take_latest()
        } else {
            None
        };
        if gesture == Some(GestureEvent::ExitFocus) {
            self.control.set_focus(None);
        }

        self.camera.update(&FrameInput {
            elapsed: self.elapsed,
            dt,
            mode: self.control.mode(),
            focus: self.control.focus(),
            gesture,
            keys: &self.pending_keys,
            simulation_speed: self.control.simulation_speed(),
            catalog: &self.catalog,
        });
        self.pending_keys.clear();
    }

    /// Current camera pose, for the renderer.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Live world position of every body, in catalog order.
    #[must_use]
    pub fn body_positions(&self) -> Vec<(BodyId, Vec3)> {
        orbit::catalog_positions(
            &self.catalog,
            self.elapsed,
            self.control.simulation_speed(),
        )
    }

    /// Mode, focus and speed.
    #[must_use]
    pub fn control(&self) -> &ControlState {
        &self.control
    }

    /// The camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// The body catalog.
    #[must_use]
    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Options the session was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Seconds of simulation time elapsed.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Acquisition state of hand tracking.
    #[must_use]
    pub fn hand_lifecycle(&self) -> HandControllerLifecycle {
        self.tracker.lifecycle()
    }

    /// Hand-tracking status for UI display.
    #[must_use]
    pub fn hand_status(&self) -> &str {
        self.tracker.status()
    }
}
