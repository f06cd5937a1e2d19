use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a body in the catalog.
///
/// Serde serializes as `snake_case` strings so catalog TOML stays readable:
/// ```toml
/// [[bodies]]
/// id = "earth"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BodyId {
    /// The central star.
    Sun,
    /// First planet.
    Mercury,
    /// Second planet.
    Venus,
    /// Third planet.
    Earth,
    /// Fourth planet.
    Mars,
    /// Fifth planet.
    Jupiter,
    /// Sixth planet.
    Saturn,
    /// Seventh planet.
    Uranus,
    /// Eighth planet.
    Neptune,
}

impl BodyId {
    /// Every id in catalog order.
    pub const ALL: [BodyId; 9] = [
        Self::Sun,
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    /// Stable lowercase name, matching the serde form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static descriptor of one celestial body.
///
/// Shared read-only by the renderer and by orbit kinematics; never mutated
/// after the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Catalog id.
    pub id: BodyId,
    /// Display name for UI labels.
    pub name: String,
    /// Visual radius in world units. Also scales the focus framing offset.
    pub radius: f32,
    /// Orbital radius around the origin (0 for the central star).
    pub distance: f32,
    /// Orbital angular speed (radians per second before scaling).
    pub angular_speed: f32,
    /// Spin about the body's own axis (radians per second).
    pub rotation_speed: f32,
    /// Linear RGB base color.
    pub color: [f32; 3],
    /// Number of decorative moons, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moons: Option<u32>,
    /// Whether the body is drawn with rings.
    #[serde(default)]
    pub has_rings: bool,
}

impl CelestialBody {
    /// Whether the body sits at the origin and never moves.
    #[must_use]
    pub fn is_central(&self) -> bool {
        self.distance == 0.0
    }
}
