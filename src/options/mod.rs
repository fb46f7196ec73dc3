//! Centralized camera/input/demo options with TOML preset support.
//!
//! All tweakable settings (camera pose and gains, projection, keybindings,
//! demo frame loop) are consolidated here. Options serialize to/from TOML
//! so presets can live next to the binary.

mod camera;
mod demo;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use demo::DemoOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FreelookError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera pose, control and projection parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Headless demo frame loop.
    pub demo: DemoOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`FreelookError::Io`] if the file cannot be read,
    /// [`FreelookError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, FreelookError> {
        let content = std::fs::read_to_string(path).map_err(FreelookError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        options.keybindings.fill_missing_defaults();
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`FreelookError::OptionsParse`] if serialization fails,
    /// [`FreelookError::Io`] if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), FreelookError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FreelookError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FreelookError::Io)?;
        }
        std::fs::write(path, content).map_err(FreelookError::Io)
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
