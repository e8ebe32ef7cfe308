//! Centralized generation options with TOML preset support.
//!
//! All tweakable settings serialize to/from TOML for presets; sub-structs
//! use `#[serde(default)]` so partial files work correctly. Validation
//! (range clamping) happens here, never inside the generator.

mod wedge;

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use wedge::{WedgeOptions, SIZE_FACTOR_RANGE};

use crate::error::PolywedgeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[wedge]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Direction-indicator wedge options.
    pub wedge: WedgeOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults; loaded
    /// values are clamped into their valid ranges.
    ///
    /// # Errors
    ///
    /// [`PolywedgeError::Io`] on read failure, [`PolywedgeError::OptionsParse`]
    /// on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, PolywedgeError> {
        let content = std::fs::read_to_string(path).map_err(PolywedgeError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| PolywedgeError::OptionsParse(e.to_string()))?;
        Ok(options.clamped())
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`PolywedgeError::Io`] on write failure,
    /// [`PolywedgeError::OptionsParse`] on serialization failure.
    pub fn save(&self, path: &Path) -> Result<(), PolywedgeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PolywedgeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PolywedgeError::Io)?;
        }
        std::fs::write(path, content).map_err(PolywedgeError::Io)
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

    /// All values clamped into their valid ranges.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.wedge = self.wedge.clamped();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[wedge]
size_factor = 0.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.wedge.size_factor, 0.5);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let opts: Options = toml::from_str("").unwrap();
        assert_eq!(opts, Options::default());
        assert_eq!(opts.wedge.size_factor, 0.2);
    }

    #[test]
    fn clamp_bounds_size_factor() {
        let opts: Options = toml::from_str(
            r"
[wedge]
size_factor = 99.0
",
        )
        .unwrap();
        assert_eq!(opts.clamped().wedge.size_factor, 10.0);

        let negative = Options {
            wedge: WedgeOptions { size_factor: -1.0 },
        };
        assert_eq!(negative.clamped().wedge.size_factor, 0.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("wedge"));

        let wedge_schema =
            serde_json::to_value(schemars::schema_for!(WedgeOptions))
                .unwrap();
        assert!(wedge_schema["properties"].get("size_factor").is_some());
    }
}
