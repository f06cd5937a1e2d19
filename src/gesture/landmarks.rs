//! Hand landmark layout and per-finger tests.
//!
//! A hand arrives as 21 normalized image-space points in the standard
//! wrist-then-fingers order. Image y grows downward, so "above" means a
//! numerically smaller y.

use glam::Vec2;

/// Number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

/// Base of the palm.
pub const WRIST: usize = 0;
/// Thumb carpometacarpal joint.
pub const THUMB_CMC: usize = 1;
/// Thumb metacarpophalangeal joint.
pub const THUMB_MCP: usize = 2;
/// Thumb interphalangeal joint.
pub const THUMB_IP: usize = 3;
/// Thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index knuckle.
pub const INDEX_MCP: usize = 5;
/// Index PIP joint (second from the tip).
pub const INDEX_PIP: usize = 6;
/// Index DIP joint.
pub const INDEX_DIP: usize = 7;
/// Index fingertip.
pub const INDEX_TIP: usize = 8;
/// Middle knuckle.
pub const MIDDLE_MCP: usize = 9;
/// Middle PIP joint (second from the tip).
pub const MIDDLE_PIP: usize = 10;
/// Middle DIP joint.
pub const MIDDLE_DIP: usize = 11;
/// Middle fingertip.
pub const MIDDLE_TIP: usize = 12;
/// Ring knuckle.
pub const RING_MCP: usize = 13;
/// Ring PIP joint (second from the tip).
pub const RING_PIP: usize = 14;
/// Ring DIP joint.
pub const RING_DIP: usize = 15;
/// Ring fingertip.
pub const RING_TIP: usize = 16;
/// Pinky knuckle.
pub const PINKY_MCP: usize = 17;
/// Pinky PIP joint (second from the tip).
pub const PINKY_PIP: usize = 18;
/// Pinky DIP joint.
pub const PINKY_DIP: usize = 19;
/// Pinky fingertip.
pub const PINKY_TIP: usize = 20;

/// The four non-thumb fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    /// Index finger.
    Index,
    /// Middle finger.
    Middle,
    /// Ring finger.
    Ring,
    /// Little finger.
    Pinky,
}

impl Finger {
    /// All four fingers, index first.
    pub const ALL: [Finger; 4] =
        [Self::Index, Self::Middle, Self::Ring, Self::Pinky];

    /// Landmark index of the fingertip.
    #[must_use]
    pub fn tip(self) -> usize {
        match self {
            Self::Index => INDEX_TIP,
            Self::Middle => MIDDLE_TIP,
            Self::Ring => RING_TIP,
            Self::Pinky => PINKY_TIP,
        }
    }

    /// Landmark index of the proximal interphalangeal joint (second joint
    /// from the tip).
    #[must_use]
    pub fn pip(self) -> usize {
        match self {
            Self::Index => INDEX_PIP,
            Self::Middle => MIDDLE_PIP,
            Self::Ring => RING_PIP,
            Self::Pinky => PINKY_PIP,
        }
    }
}

/// One detected hand: exactly [`LANDMARK_COUNT`] normalized points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    points: [Vec2; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Wrap a raw point slice, or `None` if it does not hold exactly 21
    /// points.
    #[must_use]
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let points: [Vec2; LANDMARK_COUNT] = points.try_into().ok()?;
        Some(Self { points })
    }

    /// Landmark by index.
    #[inline]
    #[must_use]
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    /// Reference point used for hand motion and two-hand distance.
    #[inline]
    #[must_use]
    pub fn wrist(&self) -> Vec2 {
        self.points[WRIST]
    }

    /// Whether `finger` is extended: its tip is above its PIP joint.
    ///
    /// Only valid for a roughly upright hand; a sideways or inverted hand
    /// is misclassified.
    #[inline]
    #[must_use]
    pub fn is_extended(&self, finger: Finger) -> bool {
        self.points[finger.tip()].y < self.points[finger.pip()].y
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{fist, peace};
    use super::*;

    #[test]
    fn wrong_point_count_is_rejected() {
        assert!(HandLandmarks::from_points(&[Vec2::ZERO; 20]).is_none());
        assert!(HandLandmarks::from_points(&[Vec2::ZERO; 22]).is_none());
        assert!(HandLandmarks::from_points(&[]).is_none());
        assert!(HandLandmarks::from_points(&[Vec2::ZERO; 21]).is_some());
    }

    #[test]
    fn extension_follows_tip_above_pip() {
        let hand =
            HandLandmarks::from_points(&peace(Vec2::new(0.5, 0.8))).unwrap();
        assert!(hand.is_extended(Finger::Index));
        assert!(hand.is_extended(Finger::Middle));
        assert!(!hand.is_extended(Finger::Ring));
        assert!(!hand.is_extended(Finger::Pinky));
        assert_eq!(hand.wrist(), Vec2::new(0.5, 0.8));
    }

    #[test]
    fn inverted_hand_reads_inverted() {
        // Flip a fist vertically: every curled finger now "points up".
        let flipped: Vec<Vec2> = fist(Vec2::new(0.5, 0.5))
            .into_iter()
            .map(|p| Vec2::new(p.x, 1.0 - p.y))
            .collect();
        let hand = HandLandmarks::from_points(&flipped).unwrap();
        assert!(Finger::ALL.iter().all(|&f| hand.is_extended(f)));
    }
}
