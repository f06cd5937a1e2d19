use glam::Vec3;

use crate::options::CameraOptions;

/// Camera position and look-at target, the controller's sole output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at point in world space.
    pub target: Vec3,
}

impl CameraPose {
    /// Pose at `position` looking at `target`.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// The overview pose from the camera options.
    #[must_use]
    pub fn overview(options: &CameraOptions) -> Self {
        Self::new(
            Vec3::from(options.default_position),
            Vec3::from(options.default_target),
        )
    }

    /// Unit view direction. Falls back to -Z for a degenerate pose.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }

    /// Unit screen-right direction, kept level with the ecliptic.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or(Vec3::X)
    }

    /// Distance of the eye from the world origin.
    #[must_use]
    pub fn distance_from_origin(&self) -> f32 {
        self.position.length()
    }

    /// Componentwise linear blend toward `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            target: self.target.lerp(other.target, t),
        }
    }

    /// Move both eye and target by `offset`.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
        self.target += offset;
    }
}

/// Spherical coordinates around a center point.
///
/// Azimuth is measured from +Z toward +X, elevation up from the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Horizontal angle in radians.
    pub azimuth: f32,
    /// Vertical angle in radians (0 = horizon).
    pub elevation: f32,
    /// Distance from the center.
    pub radius: f32,
}

impl Spherical {
    /// Decompose a center-relative offset.
    #[must_use]
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return Self {
                azimuth: 0.0,
                elevation: 0.0,
                radius: 0.0,
            };
        }
        Self {
            azimuth: offset.x.atan2(offset.z),
            elevation: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            radius,
        }
    }

    /// Unit direction for the current angles.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }

    /// Center-relative offset for the current angles and radius.
    #[must_use]
    pub fn to_offset(&self) -> Vec3 {
        self.direction() * self.radius
    }
}
