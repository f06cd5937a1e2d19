//! Converts raw platform events into session commands.
//!
//! The `InputProcessor` owns all transient pointer state (cursor tracking,
//! drag state) and the key-binding map. It is the only thing that sits
//! between raw window events and [`Session::execute`](crate::Session::execute).
//! Whether a command has any effect (pointer orbit only in Pointer mode,
//! keys only in Keyboard mode) is decided by the session, not here.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::options::KeybindingOptions;
use crate::session::Command;

/// Converts raw window events into [`Command`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     session.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyW") {
///     session.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor position, `None` until the first move.
    last_cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            last_cursor: None,
            mouse_pressed: false,
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels, if known.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.last_cursor
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<Command> {
        self.key_bindings.lookup(key).map(Command::Key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => Some(Command::Zoom { delta }),
        }
    }

    /// Cursor moved: a drag with the primary button held orbits the camera.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<Command> {
        let position = Vec2::new(x, y);
        let previous = self.last_cursor.replace(position)?;

        let delta = position - previous;
        if self.mouse_pressed && delta != Vec2::ZERO {
            return Some(Command::OrbitDrag { delta });
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
