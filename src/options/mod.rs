//! Centralized tuning options with TOML preset support.
//!
//! Every tweakable constant of the control core (camera blend factors and
//! bands, gesture dead zones and gains, keybindings, the simulation speed)
//! is consolidated here. Options serialize to/from TOML so presets can be
//! swapped without recompiling.

mod camera;
mod gesture;
mod keybindings;
mod simulation;

use std::path::Path;

pub use camera::CameraOptions;
pub use gesture::GestureOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use simulation::SimulationOptions;

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gesture]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera motion parameters.
    pub camera: CameraOptions,
    /// Gesture classifier thresholds and gains.
    pub gesture: GestureOptions,
    /// Simulation clock parameters.
    pub simulation: SimulationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The UI schema as a JSON string, for handing to a settings panel.
    #[must_use]
    pub fn schema_json() -> String {
        serde_json::to_string(&Self::json_schema()).unwrap_or_default()
    }

    /// Current values as a JSON string, paired with [`schema_json`](Self::schema_json).
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] on malformed TOML.
    pub fn from_toml(text: &str) -> Result<Self, OrreryError> {
        toml::from_str(text).map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] if the file cannot be read, or
    /// [`OrreryError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] if serialization fails, or
    /// [`OrreryError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[gesture]
rotate_dead_zone = 0.004
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.gesture.rotate_dead_zone, 0.004);
        // Everything else should be default
        assert_eq!(opts.gesture.two_hand_zoom_gain, 20.0);
        assert_eq!(opts.camera.keyboard_step, 8.0);
        assert_eq!(opts.camera.reset_easing, EasingFunction::CubicInOut);
        assert_eq!(opts.simulation.speed, 1.0);
    }

    #[test]
    fn defaults_match_documented_constants() {
        let camera = CameraOptions::default();
        assert_eq!(camera.default_position, [0.0, 150.0, 300.0]);
        assert_eq!((camera.min_distance, camera.max_distance), (10.0, 650.0));
        assert_eq!((camera.hand_min_zoom, camera.hand_max_zoom), (50.0, 600.0));
        assert_eq!(camera.pointer_damping, 0.05);
        assert_eq!(camera.autopilot_radius, 350.0);
        assert_eq!(camera.autopilot_height, 100.0);
        assert_eq!(camera.reset_duration, 2.0);
        let gesture = GestureOptions::default();
        assert_eq!(gesture.zoom_dead_zone, 0.005);
        assert_eq!(gesture.exit_hold_ms, 1000.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(KeyAction::ResetFocus)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_keybindings_survive_loading() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
    }

    #[test]
    fn rebinding_replaces_previous_owner_of_key() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::ResetFocus, "KeyW");
        assert_eq!(bindings.lookup("KeyW"), Some(KeyAction::ResetFocus));
        assert_eq!(bindings.lookup("KeyR"), None);
        assert_eq!(bindings.key_for(KeyAction::MoveForward), None);
        assert_eq!(bindings.key_for(KeyAction::ResetFocus), Some("KeyW"));
    }

    #[test]
    fn preset_bindings_merge_over_defaults() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "KeyS"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        let keys = &opts.keybindings;
        assert_eq!(keys.lookup("KeyS"), Some(KeyAction::MoveForward));
        assert_eq!(keys.lookup("KeyW"), None);
        // The default owner of the taken key is left unbound.
        assert_eq!(keys.key_for(KeyAction::MoveBack), None);
        assert_eq!(keys.lookup("KeyE"), Some(KeyAction::MoveUp));
    }

    #[test]
    fn preset_binding_one_key_twice_is_rejected() {
        let toml_str = r#"
[keybindings.bindings]
move_up = "Space"
reset_focus = "Space"
"#;
        let err = Options::from_toml(toml_str).unwrap_err();
        match err {
            OrreryError::OptionsParse(msg) => assert!(msg.contains("Space")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("orrery-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.simulation.speed = 3.5;
        opts.save(&dir.join("fast.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["fast".to_owned()]);
        let loaded = Options::load(&dir.join("fast.toml")).unwrap();
        assert_eq!(loaded.simulation.speed, 3.5);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera\nfoo").unwrap_err();
        assert!(matches!(err, OrreryError::OptionsParse(_)));
    }

    #[test]
    fn json_exports_are_parseable() {
        let schema: serde_json::Value =
            serde_json::from_str(&Options::schema_json()).unwrap();
        assert_eq!(schema["type"], "object");

        let values: serde_json::Value =
            serde_json::from_str(&Options::default().to_json()).unwrap();
        assert_eq!(values["camera"]["keyboard_step"], 8.0);
        assert_eq!(values["keybindings"]["bindings"]["reset_focus"], "KeyR");
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("gesture"));
        assert!(props.contains_key("simulation"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("pointer_damping").is_some());
        assert!(camera.get("reset_duration").is_some());
        assert!(camera.get("focus_offset").is_none());
        assert!(camera.get("reset_easing").is_none());
    }
}
