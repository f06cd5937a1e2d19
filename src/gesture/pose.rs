use super::landmarks::{Finger, HandLandmarks};

/// Static single-hand pose, read from which fingers are extended.
///
/// The thumb is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPose {
    /// All four fingers extended.
    OpenPalm,
    /// Index and middle extended, ring and pinky curled.
    Peace,
    /// Only the index finger extended.
    Pointing,
    /// Anything else (fist, three fingers, ...).
    Other,
}

impl HandPose {
    /// Read the pose of one hand.
    #[must_use]
    pub fn of(hand: &HandLandmarks) -> Self {
        let [index, middle, ring, pinky] =
            Finger::ALL.map(|finger| hand.is_extended(finger));

        match (index, middle, ring, pinky) {
            (true, true, true, true) => Self::OpenPalm,
            (true, true, false, false) => Self::Peace,
            (true, false, false, false) => Self::Pointing,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::gesture::landmarks::fixtures::hand;

    fn pose(extended: [bool; 4]) -> HandPose {
        let points = hand(Vec2::new(0.5, 0.7), extended);
        HandPose::of(&HandLandmarks::from_points(&points).unwrap())
    }

    #[test]
    fn recognizes_vocabulary() {
        assert_eq!(pose([true; 4]), HandPose::OpenPalm);
        assert_eq!(pose([true, true, false, false]), HandPose::Peace);
        assert_eq!(pose([true, false, false, false]), HandPose::Pointing);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(pose([false; 4]), HandPose::Other);
        assert_eq!(pose([true, true, true, false]), HandPose::Other);
        assert_eq!(pose([false, true, false, false]), HandPose::Other);
        assert_eq!(pose([true, false, false, true]), HandPose::Other);
    }
}
