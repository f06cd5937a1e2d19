//! The built-in catalog: the Sun and the eight planets.
//!
//! Distances and sizes are display units, compressed so the whole system
//! fits the camera's zoom band. Angular speeds are relative, with Earth at 1.

use super::body::{BodyId, CelestialBody};

struct Row {
    id: BodyId,
    name: &'static str,
    radius: f32,
    distance: f32,
    angular_speed: f32,
    rotation_speed: f32,
    color: [f32; 3],
    moons: Option<u32>,
    has_rings: bool,
}

const ROWS: [Row; 9] = [
    Row {
        id: BodyId::Sun,
        name: "Sun",
        radius: 10.0,
        distance: 0.0,
        angular_speed: 0.0,
        rotation_speed: 0.05,
        color: [1.0, 0.78, 0.25],
        moons: None,
        has_rings: false,
    },
    Row {
        id: BodyId::Mercury,
        name: "Mercury",
        radius: 0.8,
        distance: 28.0,
        angular_speed: 4.15,
        rotation_speed: 0.01,
        color: [0.6, 0.58, 0.55],
        moons: None,
        has_rings: false,
    },
    Row {
        id: BodyId::Venus,
        name: "Venus",
        radius: 1.5,
        distance: 44.0,
        angular_speed: 1.62,
        rotation_speed: 0.005,
        color: [0.9, 0.75, 0.45],
        moons: None,
        has_rings: false,
    },
    Row {
        id: BodyId::Earth,
        name: "Earth",
        radius: 1.6,
        distance: 62.0,
        angular_speed: 1.0,
        rotation_speed: 0.5,
        color: [0.2, 0.45, 0.9],
        moons: Some(1),
        has_rings: false,
    },
    Row {
        id: BodyId::Mars,
        name: "Mars",
        radius: 1.1,
        distance: 78.0,
        angular_speed: 0.53,
        rotation_speed: 0.48,
        color: [0.85, 0.35, 0.2],
        moons: Some(2),
        has_rings: false,
    },
    Row {
        id: BodyId::Jupiter,
        name: "Jupiter",
        radius: 5.0,
        distance: 120.0,
        angular_speed: 0.084,
        rotation_speed: 1.2,
        color: [0.85, 0.7, 0.55],
        moons: Some(4),
        has_rings: false,
    },
    Row {
        id: BodyId::Saturn,
        name: "Saturn",
        radius: 4.2,
        distance: 170.0,
        angular_speed: 0.034,
        rotation_speed: 1.1,
        color: [0.92, 0.82, 0.6],
        moons: Some(3),
        has_rings: true,
    },
    Row {
        id: BodyId::Uranus,
        name: "Uranus",
        radius: 2.6,
        distance: 220.0,
        angular_speed: 0.012,
        rotation_speed: 0.7,
        color: [0.55, 0.82, 0.88],
        moons: Some(2),
        has_rings: true,
    },
    Row {
        id: BodyId::Neptune,
        name: "Neptune",
        radius: 2.5,
        distance: 260.0,
        angular_speed: 0.006,
        rotation_speed: 0.75,
        color: [0.25, 0.4, 0.9],
        moons: Some(1),
        has_rings: false,
    },
];

/// Descriptors for the built-in solar system, in catalog order.
pub(crate) fn bodies() -> Vec<CelestialBody> {
    ROWS.iter()
        .map(|row| CelestialBody {
            id: row.id,
            name: row.name.to_owned(),
            radius: row.radius,
            distance: row.distance,
            angular_speed: row.angular_speed,
            rotation_speed: row.rotation_speed,
            color: row.color,
            moons: row.moons,
            has_rings: row.has_rings,
        })
        .collect()
}
