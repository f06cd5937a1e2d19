use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Hand-gesture classifier tuning.
///
/// Dead zones are in normalized image units and suppress landmark jitter;
/// a delta must strictly exceed its dead zone to count.
pub struct GestureOptions {
    /// Minimum per-axis wrist movement for a rotate gesture.
    #[schemars(title = "Rotate Dead Zone", range(min = 0.002, max = 0.005), extend("step" = 0.0005))]
    pub rotate_dead_zone: f32,
    /// Minimum change in two-hand separation for a zoom gesture.
    #[schemars(title = "Zoom Dead Zone", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub zoom_dead_zone: f32,
    /// Multiplier applied to the two-hand separation change.
    #[schemars(skip)]
    pub two_hand_zoom_gain: f32,
    /// How long an open palm must be held to exit focus.
    #[schemars(title = "Exit Hold (ms)", range(min = 200.0, max = 3000.0), extend("step" = 100.0))]
    pub exit_hold_ms: f64,
    /// Mirror the pointing cursor horizontally to undo a mirrored camera
    /// preview.
    #[schemars(title = "Mirror Cursor")]
    pub mirror_cursor: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            rotate_dead_zone: 0.003,
            zoom_dead_zone: 0.005,
            two_hand_zoom_gain: 20.0,
            exit_hold_ms: 1000.0,
            mirror_cursor: true,
        }
    }
}
