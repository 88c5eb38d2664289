use crate::errors::{Result, ViewerError};
use crate::tower::{DEFAULT_CROSSBAR_COUNT, DEFAULT_TOWER_SPAN_M, MAX_CROSSBAR_COUNT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Appearance
    pub theme: Theme,
    pub background_color: BackgroundColor,

    // Tower
    pub show_marker_tooltips: bool,
    pub show_height_labels: bool,
    /// Fill missing heights with positional estimates before layout.
    pub estimate_missing_heights: bool,
    pub tower_span_m: f32,
    pub marker_size: f32,
    pub crossbar_count: usize,

    // Session
    pub last_source: Option<PathBuf>,
    pub window_size: (f32, f32),

    // Telemetry
    pub telemetry_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            background_color: BackgroundColor::Dark,

            show_marker_tooltips: true,
            show_height_labels: true,
            estimate_missing_heights: false,
            tower_span_m: DEFAULT_TOWER_SPAN_M,
            marker_size: 32.0,
            crossbar_count: DEFAULT_CROSSBAR_COUNT,

            last_source: None,
            window_size: (1200.0, 900.0),

            // Telemetry (disabled by default)
            telemetry_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundColor {
    Dark,
    Light,
    Gray,
    Black,
}

impl BackgroundColor {
    pub fn to_color(self) -> egui::Color32 {
        match self {
            BackgroundColor::Dark => egui::Color32::from_rgb(18, 18, 20),
            BackgroundColor::Light => egui::Color32::from_rgb(245, 245, 247),
            BackgroundColor::Gray => egui::Color32::from_rgb(80, 80, 85),
            BackgroundColor::Black => egui::Color32::BLACK,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "towerviewer", "TowerViewer")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validated()
    }

    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Err(e) = self.save_to(&path) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        if !self.tower_span_m.is_finite() || self.tower_span_m <= 0.0 {
            return Err(ViewerError::SettingsError {
                message: format!("tower_span_m must be positive, got {}", self.tower_span_m),
            });
        }
        if !self.marker_size.is_finite() || self.marker_size <= 0.0 {
            return Err(ViewerError::SettingsError {
                message: format!("marker_size must be positive, got {}", self.marker_size),
            });
        }
        if self.crossbar_count > MAX_CROSSBAR_COUNT {
            return Err(ViewerError::SettingsError {
                message: format!(
                    "crossbar_count must be at most {MAX_CROSSBAR_COUNT}, got {}",
                    self.crossbar_count
                ),
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.estimate_missing_heights = true;
        settings.last_source = Some(PathBuf::from("/data/antenna_parts"));
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "theme": "Light", "tower_span_m": 45.0 }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.tower_span_m, 45.0);
        assert_eq!(settings.crossbar_count, DEFAULT_CROSSBAR_COUNT);
    }

    #[test]
    fn test_invalid_span_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "tower_span_m": -3.0 }"#).unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
    }

    #[test]
    fn test_oversized_crossbar_count_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "crossbar_count": 18446744073709551615 }"#).unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");

        std::fs::write(&path, r#"{ "crossbar_count": 100 }"#).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().crossbar_count, MAX_CROSSBAR_COUNT);
    }
}
