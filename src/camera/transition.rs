use super::pose::CameraPose;
use crate::util::easing::EasingFunction;

/// Timed, eased flight between two poses.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetTransition {
    from: CameraPose,
    to: CameraPose,
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
}

impl ResetTransition {
    /// Start a flight from `from` to `to` lasting `duration` seconds.
    #[must_use]
    pub fn new(
        from: CameraPose,
        to: CameraPose,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Advance by `dt` seconds and return the pose for this frame. The last
    /// frame lands exactly on the destination.
    pub fn advance(&mut self, dt: f32) -> CameraPose {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        if self.is_finished() {
            return self.to;
        }
        let t = self.easing.evaluate(self.elapsed / self.duration);
        self.from.lerp(&self.to, t)
    }

    /// Whether the destination has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Fraction of the duration elapsed, in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    /// Destination pose.
    #[must_use]
    pub fn destination(&self) -> CameraPose {
        self.to
    }
}
