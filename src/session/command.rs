//! The session's complete interactive vocabulary.
//!
//! Every user-facing operation (UI widget, pointer drag, scroll, key press)
//! is represented as a [`Command`] and passed to
//! [`Session::execute`](super::Session::execute). The session never cares
//! how a command was triggered.

use glam::Vec2;

use crate::catalog::BodyId;
use crate::control::ControlMode;
use crate::input::KeyAction;

/// A discrete or parameterized operation the session can perform.
///
/// ```ignore
/// session.execute(Command::SetControlMode(ControlMode::Hand));
/// session.execute(Command::SetFocus(Some(BodyId::Saturn)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    // ── Control ─────────────────────────────────────────────────────
    /// Switch the active input modality.
    SetControlMode(ControlMode),

    /// Set the global simulation speed multiplier.
    SetSimulationSpeed(f32),

    // ── Focus ───────────────────────────────────────────────────────
    /// Focus a body, or clear the focus with `None`.
    SetFocus(Option<BodyId>),

    /// Focus the next body in catalog order, wrapping around.
    CycleFocus,

    // ── Pointer ─────────────────────────────────────────────────────
    /// Orbit by a pointer drag of `delta` pixels. Pointer mode only.
    OrbitDrag {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Dolly by a scroll amount (positive = closer). Pointer mode only.
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    // ── Keyboard ────────────────────────────────────────────────────
    /// A bound key was pressed. Keyboard mode only.
    Key(KeyAction),
}
