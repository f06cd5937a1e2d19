use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera motion parameters for every control mode.
pub struct CameraOptions {
    /// Overview position the camera starts at and returns to when a focus
    /// is cleared.
    #[schemars(skip)]
    pub default_position: [f32; 3],
    /// Look-at target paired with `default_position`.
    #[schemars(skip)]
    pub default_target: [f32; 3],
    /// Closest allowed distance from the origin in Pointer and Hand mode.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed distance from the origin in Pointer and Hand mode.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Fraction of pending drag rotation applied (and removed) per frame.
    #[schemars(title = "Pointer Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub pointer_damping: f32,
    /// Radians of orbit per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub pointer_rotate_speed: f32,
    /// Fractional distance change per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub pointer_zoom_speed: f32,
    /// World units moved per movement keystroke.
    #[schemars(title = "Keyboard Step", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub keyboard_step: f32,
    /// Radius of the autopilot's circular flight path.
    #[schemars(title = "Autopilot Radius", range(min = 50.0, max = 600.0), extend("step" = 10.0))]
    pub autopilot_radius: f32,
    /// Height of the autopilot's flight path above the ecliptic.
    #[schemars(title = "Autopilot Height", range(min = 0.0, max = 300.0), extend("step" = 10.0))]
    pub autopilot_height: f32,
    /// Autopilot orbit rate in radians per second (before the simulation
    /// speed multiplier).
    #[schemars(skip)]
    pub autopilot_rate: f32,
    /// Per-frame blend toward the autopilot's path point.
    #[schemars(skip)]
    pub autopilot_blend: f32,
    /// Multiplier from a gesture's normalized rotate delta to radians.
    #[schemars(title = "Hand Rotate Gain", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub hand_rotate_gain: f32,
    /// Multiplier from a zoom gesture's delta to world units of radius.
    #[schemars(title = "Hand Zoom Gain", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub hand_zoom_gain: f32,
    /// Smallest hand-mode orbit radius.
    #[schemars(skip)]
    pub hand_min_zoom: f32,
    /// Largest hand-mode orbit radius.
    #[schemars(skip)]
    pub hand_max_zoom: f32,
    /// Per-gesture blend toward the hand-mode target position.
    #[schemars(skip)]
    pub hand_blend: f32,
    /// Lowest hand-mode elevation in radians (0 = horizon).
    #[schemars(skip)]
    pub hand_min_elevation: f32,
    /// Highest hand-mode elevation in radians, short of the zenith.
    #[schemars(skip)]
    pub hand_max_elevation: f32,
    /// Per-frame look-at blend toward a focused body.
    #[schemars(skip)]
    pub focus_target_blend: f32,
    /// Per-frame position blend toward the focus framing point.
    #[schemars(skip)]
    pub focus_position_blend: f32,
    /// Camera offset from a focused body, in multiples of its radius.
    #[schemars(skip)]
    pub focus_offset: [f32; 3],
    /// Seconds taken to fly back to the overview after a focus is cleared.
    #[schemars(title = "Reset Duration", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub reset_duration: f32,
    /// Easing curve for the return flight.
    #[schemars(skip)]
    pub reset_easing: EasingFunction,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            default_position: [0.0, 150.0, 300.0],
            default_target: [0.0, 0.0, 0.0],
            min_distance: 10.0,
            max_distance: 650.0,
            pointer_damping: 0.05,
            pointer_rotate_speed: 0.005,
            pointer_zoom_speed: 0.1,
            keyboard_step: 8.0,
            autopilot_radius: 350.0,
            autopilot_height: 100.0,
            autopilot_rate: 0.05,
            autopilot_blend: 0.05,
            hand_rotate_gain: 5.0,
            hand_zoom_gain: 5.0,
            hand_min_zoom: 50.0,
            hand_max_zoom: 600.0,
            hand_blend: 0.1,
            hand_min_elevation: 0.0,
            hand_max_elevation: 1.4,
            focus_target_blend: 0.1,
            focus_position_blend: 0.05,
            focus_offset: [0.0, 3.0, 8.0],
            reset_duration: 2.0,
            reset_easing: EasingFunction::CubicInOut,
        }
    }
}
