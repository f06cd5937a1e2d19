//! Per-frame camera state machine.
//!
//! Once per render frame the controller reads the active mode, the focus
//! target, the latest gesture and any keystrokes, and updates the owned
//! [`CameraPose`]. Precedence, highest first:
//!
//! 1. a running return-to-overview flight
//! 2. Autopilot
//! 3. focus tracking (any other mode with a resolvable focus)
//! 4. the active mode's own handler

use glam::{Vec2, Vec3};

use super::orbit_control::OrbitControl;
use super::pose::{CameraPose, Spherical};
use super::transition::ResetTransition;
use crate::catalog::{BodyCatalog, BodyId, CelestialBody};
use crate::control::ControlMode;
use crate::gesture::GestureEvent;
use crate::input::KeyAction;
use crate::options::CameraOptions;
use crate::orbit;

/// Everything the controller reads for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    /// Simulation time in seconds, as used by orbit kinematics.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Active input modality.
    pub mode: ControlMode,
    /// Requested focus target. Ids absent from `catalog` count as none.
    pub focus: Option<BodyId>,
    /// Latest fresh gesture; only consulted in Hand mode.
    pub gesture: Option<GestureEvent>,
    /// Key actions pressed since the previous frame; only consulted in
    /// Keyboard mode.
    pub keys: &'a [KeyAction],
    /// Global simulation speed multiplier.
    pub simulation_speed: f32,
    /// Bodies available for focus.
    pub catalog: &'a BodyCatalog,
}

/// Camera state machine driving a single [`CameraPose`].
#[derive(Debug, Clone)]
pub struct CameraController {
    options: CameraOptions,
    pose: CameraPose,
    orbit: OrbitControl,
    transition: Option<ResetTransition>,
    hand: Spherical,
    hand_goal: Option<Vec3>,
    autopilot_angle: f32,
    cursor: Option<Vec2>,
    last_mode: Option<ControlMode>,
    last_focus: Option<BodyId>,
}

impl CameraController {
    /// Create a controller resting at the overview pose.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        let pose = CameraPose::overview(&options);
        let orbit = OrbitControl::new(&options, &pose);
        let hand = Spherical::from_offset(pose.position);
        Self {
            options,
            pose,
            orbit,
            transition: None,
            hand,
            hand_goal: None,
            autopilot_angle: 0.0,
            cursor: None,
            last_mode: None,
            last_focus: None,
        }
    }

    /// Current camera pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Hand-mode virtual cursor from the last pointing gesture, in
    /// normalized screen units.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Hand-mode orbit radius.
    #[must_use]
    pub fn hand_zoom(&self) -> f32 {
        self.hand.radius
    }

    /// Whether the return-to-overview flight is running.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Tuning in effect.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Forward a pointer drag to the orbit helper. Ignored unless the
    /// helper is enabled (Pointer mode, no focus, no flight).
    pub fn pointer_rotate(&mut self, delta: Vec2) {
        self.orbit.rotate(delta);
    }

    /// Forward a scroll to the orbit helper. Ignored unless the helper is
    /// enabled.
    pub fn pointer_zoom(&mut self, delta: f32) {
        self.orbit.zoom(delta);
    }

    /// Advance one frame.
    pub fn update(&mut self, input: &FrameInput<'_>) {
        let focus = input.focus.and_then(|id| input.catalog.get(id));

        if self.last_mode != Some(input.mode) {
            self.enter_mode(input.mode);
        }
        self.track_focus_change(input.mode, focus.map(|body| body.id));

        let orbit_enabled = input.mode == ControlMode::Pointer
            && focus.is_none()
            && self.transition.is_none();
        self.orbit.set_enabled(orbit_enabled, &self.pose);

        if input.mode == ControlMode::Hand {
            if let Some(GestureEvent::Focus { x, y }) = input.gesture {
                self.cursor = Some(Vec2::new(x, y));
            }
        }

        if let Some(transition) = self.transition.as_mut() {
            self.pose = transition.advance(input.dt);
            if transition.is_finished() {
                log::debug!("Returned to overview");
                self.transition = None;
                self.orbit
                    .set_enabled(input.mode == ControlMode::Pointer, &self.pose);
            }
        } else {
            match (input.mode, focus) {
                (ControlMode::Autopilot, _) => self.update_autopilot(input),
                (_, Some(body)) => self.update_focus_tracking(body, input),
                (ControlMode::Pointer, None) => self.orbit.update(&mut self.pose),
                (ControlMode::Keyboard, None) => self.update_keyboard(input.keys),
                (ControlMode::Hand, None) => self.update_hand(input.gesture),
            }
        }
        if self.transition.is_some() || focus.is_some() {
            self.hand_goal = None;
        }

        if input.mode.is_distance_clamped() {
            self.clamp_distance();
        }
    }

    fn enter_mode(&mut self, mode: ControlMode) {
        if self.last_mode == Some(ControlMode::Hand) {
            self.cursor = None;
        }
        match mode {
            ControlMode::Hand => {
                self.hand_goal = None;
                self.seed_hand();
            }
            ControlMode::Autopilot => {
                if self.transition.take().is_some() {
                    log::debug!("Return flight cancelled by autopilot");
                }
                self.autopilot_angle =
                    self.pose.position.z.atan2(self.pose.position.x);
            }
            ControlMode::Pointer | ControlMode::Keyboard => {}
        }
        self.last_mode = Some(mode);
    }

    /// Start the return flight when a focus is cleared outside Autopilot,
    /// cancel it when a new focus is set.
    fn track_focus_change(&mut self, mode: ControlMode, focus: Option<BodyId>) {
        let previous = std::mem::replace(&mut self.last_focus, focus);
        match (previous, focus) {
            (Some(_), None) if mode != ControlMode::Autopilot => {
                log::debug!("Focus cleared, returning to overview");
                self.transition = Some(ResetTransition::new(
                    self.pose,
                    CameraPose::overview(&self.options),
                    self.options.reset_duration,
                    self.options.reset_easing,
                ));
            }
            (_, Some(_)) => {
                if self.transition.take().is_some() {
                    log::debug!("Return flight cancelled by new focus");
                }
            }
            _ => {}
        }
    }

    fn update_autopilot(&mut self, input: &FrameInput<'_>) {
        self.autopilot_angle +=
            self.options.autopilot_rate * input.simulation_speed * input.dt;
        let (sin, cos) = self.autopilot_angle.sin_cos();
        let waypoint = Vec3::new(
            cos * self.options.autopilot_radius,
            self.options.autopilot_height,
            sin * self.options.autopilot_radius,
        );
        self.pose.position = self
            .pose
            .position
            .lerp(waypoint, self.options.autopilot_blend);
        self.pose.target = Vec3::ZERO;
    }

    fn update_focus_tracking(
        &mut self,
        body: &CelestialBody,
        input: &FrameInput<'_>,
    ) {
        let center =
            orbit::world_position(body, input.elapsed, input.simulation_speed);
        let framing = center + Vec3::from(self.options.focus_offset) * body.radius;
        self.pose.target = self
            .pose
            .target
            .lerp(center, self.options.focus_target_blend);
        self.pose.position = self
            .pose
            .position
            .lerp(framing, self.options.focus_position_blend);
    }

    fn update_keyboard(&mut self, keys: &[KeyAction]) {
        let step = self.options.keyboard_step;
        for &key in keys {
            let direction = match key {
                KeyAction::MoveForward => self.pose.forward(),
                KeyAction::MoveBack => -self.pose.forward(),
                KeyAction::StrafeLeft => -self.pose.right(),
                KeyAction::StrafeRight => self.pose.right(),
                KeyAction::MoveUp => Vec3::Y,
                KeyAction::MoveDown => Vec3::NEG_Y,
                KeyAction::ResetFocus => continue,
            };
            self.pose.translate(direction * step);
        }
    }

    /// Restart the hand orbit from wherever the camera is now.
    fn seed_hand(&mut self) {
        let mut hand = Spherical::from_offset(self.pose.position);
        hand.radius = hand
            .radius
            .clamp(self.options.hand_min_zoom, self.options.hand_max_zoom);
        hand.elevation = hand.elevation.clamp(
            self.options.hand_min_elevation,
            self.options.hand_max_elevation,
        );
        self.hand = hand;
    }

    /// Fold a fresh gesture into the hand goal, then ease toward the goal.
    /// The goal persists between gestures, so motion continues on frames
    /// without one. No goal yet means the pose holds still.
    fn update_hand(&mut self, gesture: Option<GestureEvent>) {
        match gesture {
            Some(GestureEvent::Rotate { dx, dy }) => {
                if self.hand_goal.is_none() {
                    self.seed_hand();
                }
                let gain = self.options.hand_rotate_gain;
                self.hand.azimuth += dx * gain;
                self.hand.elevation = (self.hand.elevation + dy * gain).clamp(
                    self.options.hand_min_elevation,
                    self.options.hand_max_elevation,
                );
                self.hand_goal = Some(self.hand.to_offset());
            }
            Some(GestureEvent::Zoom { delta }) => {
                if self.hand_goal.is_none() {
                    self.seed_hand();
                }
                self.hand.radius = (self.hand.radius
                    - delta * self.options.hand_zoom_gain)
                    .clamp(self.options.hand_min_zoom, self.options.hand_max_zoom);
                self.hand_goal = Some(
                    self.pose.position.normalize_or(self.hand.direction())
                        * self.hand.radius,
                );
            }
            Some(
                GestureEvent::Focus { .. }
                | GestureEvent::ExitFocus
                | GestureEvent::None,
            )
            | None => {}
        }
        let Some(goal) = self.hand_goal else {
            return;
        };
        let blend = self.options.hand_blend;
        self.pose.position = self.pose.position.lerp(goal, blend);
        self.pose.target = self.pose.target.lerp(Vec3::ZERO, blend);
    }

    fn clamp_distance(&mut self) {
        let distance = self.pose.position.length();
        let clamped =
            distance.clamp(self.options.min_distance, self.options.max_distance);
        if clamped != distance {
            self.pose.position = self.pose.position.normalize_or(Vec3::Z) * clamped;
        }
    }
}
