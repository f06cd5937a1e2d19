use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

const DEFAULT_BINDINGS: [(KeyAction, &str); 7] = [
    (KeyAction::MoveForward, "KeyW"),
    (KeyAction::MoveBack, "KeyS"),
    (KeyAction::StrafeLeft, "KeyA"),
    (KeyAction::StrafeRight, "KeyD"),
    (KeyAction::MoveUp, "KeyE"),
    (KeyAction::MoveDown, "KeyQ"),
    (KeyAction::ResetFocus, "KeyR"),
];

/// The `[keybindings]` table as written in a preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct KeyTable {
    bindings: HashMap<KeyAction, String>,
}

/// Keyboard-mode bindings: one key per action, one action per key.
///
/// A preset only lists the actions it rebinds; every other action keeps
/// its default key unless the preset took that key. A preset that binds
/// one key to two actions is rejected when it loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyTable", into = "KeyTable")]
pub struct KeybindingOptions {
    bindings: HashMap<KeyAction, String>,
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            bindings: HashMap::new(),
            key_to_action: HashMap::new(),
        };
        for (action, key) in DEFAULT_BINDINGS {
            opts.bind(action, key);
        }
        opts
    }
}

impl TryFrom<KeyTable> for KeybindingOptions {
    type Error = String;

    fn try_from(table: KeyTable) -> Result<Self, Self::Error> {
        let mut key_to_action = HashMap::new();
        for (&action, key) in &table.bindings {
            if let Some(other) = key_to_action.insert(key.clone(), action) {
                return Err(format!(
                    "key {key:?} is bound to both {other:?} and {action:?}"
                ));
            }
        }
        let mut opts = Self {
            bindings: table.bindings,
            key_to_action,
        };
        for (action, key) in DEFAULT_BINDINGS {
            if opts.bindings.contains_key(&action) {
                continue;
            }
            if opts.key_to_action.contains_key(key) {
                log::debug!("{action:?} left unbound: {key} was rebound");
                continue;
            }
            opts.bind(action, key);
        }
        Ok(opts)
    }
}

impl From<KeybindingOptions> for KeyTable {
    fn from(opts: KeybindingOptions) -> Self {
        Self {
            bindings: opts.bindings,
        }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// The key bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Rebind `action` to `key`. Whatever action held `key` before is left
    /// unbound, and `action`'s old key is freed.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        if let Some(previous) = self.key_to_action.remove(&key) {
            let _ = self.bindings.remove(&previous);
        }
        if let Some(old_key) = self.bindings.insert(action, key.clone()) {
            let _ = self.key_to_action.remove(&old_key);
        }
        let _ = self.key_to_action.insert(key, action);
    }
}
