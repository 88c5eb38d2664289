use crate::viewer::ViewerNotice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryData {
    pub session_start: DateTime<Utc>,
    pub viewer_opened: u64,
    pub viewer_closed: u64,
    pub navigations: u64,
    pub last_viewed_id: Option<String>,
    pub app_version: String,
}

impl Default for TelemetryData {
    fn default() -> Self {
        Self {
            session_start: Utc::now(),
            viewer_opened: 0,
            viewer_closed: 0,
            navigations: 0,
            last_viewed_id: None,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Opt-in usage counters fed by viewer notices. Nothing leaves the machine.
#[derive(Debug)]
pub struct Telemetry {
    data: TelemetryData,
    data_path: PathBuf,
    enabled: bool,
    dirty: bool,
}

impl Telemetry {
    pub fn new(enabled: bool) -> Self {
        let data_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tower-viewer")
            .join("telemetry.json");
        Self::with_path(enabled, data_path)
    }

    pub fn with_path(enabled: bool, data_path: PathBuf) -> Self {
        let data = Self::load_data(&data_path);
        Self {
            data,
            data_path,
            enabled,
            dirty: false,
        }
    }

    fn load_data(path: &Path) -> TelemetryData {
        if let Ok(content) = fs::read_to_string(path) {
            if let Ok(data) = serde_json::from_str(&content) {
                return data;
            }
        }
        TelemetryData::default()
    }

    /// Count a notice; `item_id` is the id at the notice's index, if any.
    pub fn record(&mut self, notice: &ViewerNotice, item_id: Option<&str>) {
        if !self.enabled {
            return;
        }
        match notice {
            ViewerNotice::Opened(_) => self.data.viewer_opened += 1,
            ViewerNotice::Closed => self.data.viewer_closed += 1,
            ViewerNotice::Navigated(_) => self.data.navigations += 1,
        }
        if let Some(id) = item_id {
            self.data.last_viewed_id = Some(id.to_string());
        }
        self.dirty = true;
    }

    pub fn flush(&mut self) {
        if !self.enabled || !self.dirty {
            return;
        }
        if let Some(parent) = self.data_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("Failed to create telemetry directory {}: {}", parent.display(), e);
                return;
            }
        }
        match serde_json::to_string_pretty(&self.data) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.data_path, json) {
                    log::warn!("Failed to write telemetry: {}", e);
                    return;
                }
                self.dirty = false;
            }
            Err(e) => log::warn!("Failed to serialize telemetry: {}", e),
        }
    }

    pub fn stats(&self) -> &TelemetryData {
        &self.data
    }
}
