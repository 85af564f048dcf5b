//! Presentation tunables with TOML preset support.
//!
//! Every timing constant, threshold and preset the engines use is collected
//! here. Options serialize to/from TOML so a site can ship presets such as
//! `calm.toml` alongside its assets.

mod interaction;
mod layout;
mod reveal;
mod showcase;
mod tilt;
mod typewriter;

use std::path::Path;

pub use interaction::InteractionOptions;
pub use layout::LayoutOptions;
pub use reveal::RevealOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use showcase::ShowcaseOptions;
pub use tilt::TiltOptions;
pub use typewriter::TypewriterOptions;

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[typewriter]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Card tilt.
    pub tilt: TiltOptions,
    /// Headline typewriter timing.
    pub typewriter: TypewriterOptions,
    /// Responsive bins.
    pub layout: LayoutOptions,
    /// Section reveals.
    pub reveal: RevealOptions,
    /// Panel swaps and touch hover.
    pub interaction: InteractionOptions,
    /// 3D model presets.
    pub showcase: ShowcaseOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
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
    use std::time::Duration;

    use super::*;
    use crate::layout::LayoutBin;
    use crate::reveal::RevealPolicy;

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
[typewriter]
dwell_ms = 2000

[reveal]
trigger_once = false
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        let timing = opts.typewriter.timing();
        assert_eq!(timing.dwell, Duration::from_millis(2000));
        assert_eq!(timing.type_interval, Duration::from_millis(100));
        assert_eq!(opts.reveal.policy(), RevealPolicy::Continuous);
        assert_eq!(opts.reveal.threshold, 0.2);
        assert_eq!(opts.tilt.max_angle, 12.0);
    }

    #[test]
    fn zero_typewriter_preset_is_raised_to_min_tick() {
        let toml_str = r"
[typewriter]
type_interval_ms = 0
delete_interval_ms = 0
dwell_ms = 0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        let timing = opts.typewriter.timing();
        assert_eq!(timing.type_interval, crate::typewriter::MIN_TICK);
        assert_eq!(timing.delete_interval, crate::typewriter::MIN_TICK);
        assert_eq!(timing.dwell, Duration::ZERO);
    }

    #[test]
    fn layout_bins_are_overridable() {
        let toml_str = r"
[layout.extra_large]
base_size = 120.0
radius = 200.0
drag_constraint = 160.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        let table = opts.layout.table();
        assert_eq!(table.params(LayoutBin::ExtraLarge).radius, 200.0);
        assert_eq!(table.params(LayoutBin::Small).radius, 110.0);
    }

    #[test]
    fn showcase_presets_match_defaults() {
        let presets = ShowcaseOptions::default().presets();
        assert_eq!(presets, crate::showcase::ShowcasePresets::default());
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir().join("vitrine_options_presets");
        let mut opts = Options::default();
        opts.tilt.max_angle = 8.0;
        opts.save(&dir.join("calm.toml")).unwrap();
        Options::default().save(&dir.join("lively.toml")).unwrap();

        let loaded = Options::load(&dir.join("calm.toml")).unwrap();
        assert_eq!(loaded.tilt.max_angle, 8.0);
        let names = Options::list_presets(&dir);
        assert!(names.contains(&"calm".to_owned()));
        assert!(names.contains(&"lively".to_owned()));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let path = std::env::temp_dir().join("vitrine_options_bad.toml");
        std::fs::write(&path, "[tilt]\nmax_angle = \"steep\"\n").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, VitrineError::OptionsParse(_)));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        for section in
            ["tilt", "typewriter", "layout", "reveal", "interaction", "showcase"]
        {
            assert!(props.contains_key(section), "missing {section}");
        }

        let tilt = &props["tilt"]["properties"];
        assert!(tilt.get("max_angle").is_some());
        assert!(tilt.get("perspective").is_none());

        let layout = &props["layout"]["properties"];
        assert!(layout.get("mobile_below").is_some());
        assert!(layout.get("extra_small").is_none());
    }
}
