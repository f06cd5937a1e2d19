//! Pointer drag-to-orbit / scroll-to-zoom helper with inertial damping.
//!
//! Drag deltas accumulate as pending rotation. Each frame applies a
//! `damping` fraction of what is pending and keeps the rest, so a flick
//! keeps coasting briefly after the pointer stops.

use glam::{Vec2, Vec3};

use super::pose::{CameraPose, Spherical};
use crate::options::CameraOptions;

/// Keeps the orbit off the poles so the view never flips.
const POLE_MARGIN: f32 = 0.01;

/// Orbit-around-target helper used in Pointer mode.
#[derive(Debug, Clone)]
pub struct OrbitControl {
    enabled: bool,
    center: Vec3,
    spherical: Spherical,
    pending: Vec2,
    damping: f32,
    rotate_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitControl {
    /// Create an enabled helper orbiting the target of `pose`.
    #[must_use]
    pub fn new(options: &CameraOptions, pose: &CameraPose) -> Self {
        let mut control = Self {
            enabled: true,
            center: pose.target,
            spherical: Spherical::from_offset(pose.position - pose.target),
            pending: Vec2::ZERO,
            damping: options.pointer_damping.clamp(0.0, 1.0),
            rotate_speed: options.pointer_rotate_speed,
            zoom_speed: options.pointer_zoom_speed,
            min_distance: options.min_distance,
            max_distance: options.max_distance,
        };
        control.sync_from(pose);
        control
    }

    /// Whether drags and scrolls currently move the camera.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the helper. Re-enabling re-reads `pose` so the
    /// camera does not jump back to where the helper last left it.
    pub fn set_enabled(&mut self, enabled: bool, pose: &CameraPose) {
        if enabled && !self.enabled {
            self.sync_from(pose);
        }
        self.enabled = enabled;
    }

    /// Adopt `pose` as the current orbit and drop pending motion.
    pub fn sync_from(&mut self, pose: &CameraPose) {
        self.center = pose.target;
        self.spherical = Spherical::from_offset(pose.position - pose.target);
        self.spherical.radius = self
            .spherical
            .radius
            .clamp(self.min_distance, self.max_distance);
        self.pending = Vec2::ZERO;
    }

    /// Queue rotation for a pointer drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        if self.enabled {
            self.pending += delta * self.rotate_speed;
        }
    }

    /// Dolly by a scroll amount (positive moves closer).
    pub fn zoom(&mut self, delta: f32) {
        if self.enabled {
            self.spherical.radius = (self.spherical.radius
                * (1.0 - delta * self.zoom_speed))
                .clamp(self.min_distance, self.max_distance);
        }
    }

    /// Advance one frame of damped motion and write the result into
    /// `pose`. Does nothing while disabled.
    pub fn update(&mut self, pose: &mut CameraPose) {
        if !self.enabled {
            return;
        }
        let step = self.pending * self.damping;
        self.pending -= step;

        let limit = std::f32::consts::FRAC_PI_2 - POLE_MARGIN;
        self.spherical.azimuth -= step.x;
        self.spherical.elevation =
            (self.spherical.elevation + step.y).clamp(-limit, limit);

        pose.position = self.center + self.spherical.to_offset();
        pose.target = self.center;
    }

    /// Rotation still waiting to be applied, in radians.
    #[must_use]
    pub fn pending(&self) -> Vec2 {
        self.pending
    }
}
