use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const SETTINGS_PATH: &str = "assets/config/settings.json";

/// Runtime knobs for the toy. The window itself (title, fullscreen) is fixed
/// at bootstrap; everything the frame loop consumes lives here.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Fixed RNG seed for reproducible sessions. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Letter store directory, relative to `assets/`.
    pub store_root: String,
    /// Font file candidates under `assets/fonts/`, highest priority first.
    /// More than one family is needed for multi-script glyph coverage.
    pub font_families: Vec<String>,
    /// Glyph font size as a fraction of the window height.
    pub glyph_height_ratio: f32,
    pub volume: f32,
    /// Log every raw keyboard event at debug level.
    pub log_events: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            seed: None,
            store_root: String::from("letters"),
            font_families: vec![
                String::from("NotoSansCJK-Regular.ttc"),
                String::from("NotoSansMonoCJK-Regular.ttc"),
                String::from("NotoSans-Regular.ttf"),
                String::from("Arial.ttf"),
            ],
            glyph_height_ratio: 0.75,
            volume: 1.0,
            log_events: true,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        match Self::from_file(Path::new(SETTINGS_PATH)) {
            Ok(settings) => settings,
            Err(error) => {
                warn!("failed to load settings: {error}; using safe defaults");
                Self::default()
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path).map_err(|error| error.to_string())?;
        serde_json::from_str(&raw).map_err(|error| error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_settings_with_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "seed": 7, "volume": 0.5 }"#).expect("settings should parse");

        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.volume, 0.5);
        assert_eq!(settings.store_root, "letters");
        assert!(!settings.font_families.is_empty());
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        assert!(AppSettings::from_file(Path::new("/nonexistent/settings.json")).is_err());
    }

    #[test]
    fn malformed_settings_are_an_error() {
        assert!(serde_json::from_str::<AppSettings>("{ \"volume\": \"loud\" }").is_err());
    }
}
