/// One classified gesture, produced once per video sample.
///
/// Only the most recent event matters; events are signals, not
/// accumulated state. Deltas are in normalized image units with the
/// classifier's gain already applied where noted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureEvent {
    /// No actionable gesture this sample.
    #[default]
    None,
    /// Peace-sign hand moved.
    Rotate {
        /// Horizontal wrist movement (raw, no gain).
        dx: f32,
        /// Vertical wrist movement (raw, no gain).
        dy: f32,
    },
    /// Two hands moved apart (positive) or together (negative).
    Zoom {
        /// Separation change multiplied by the two-hand zoom gain.
        delta: f32,
    },
    /// Index finger pointing at a screen position.
    Focus {
        /// Horizontal cursor position in [0, 1], mirrored for a selfie feed.
        x: f32,
        /// Vertical cursor position in [0, 1].
        y: f32,
    },
    /// Open palm held long enough to leave the focused body.
    ExitFocus,
}

impl GestureEvent {
    /// Whether this is the [`GestureEvent::None`] signal.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rotate { .. } => "rotate",
            Self::Zoom { .. } => "zoom",
            Self::Focus { .. } => "focus",
            Self::ExitFocus => "exit-focus",
        }
    }
}
