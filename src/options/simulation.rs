use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Simulation", inline)]
#[serde(default)]
/// Simulation clock parameters.
pub struct SimulationOptions {
    /// Initial global speed multiplier for orbits and the autopilot.
    #[schemars(title = "Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub speed: f32,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}
