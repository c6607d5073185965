use std::path::Path;

use chrono::{FixedOffset, Offset, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Viewer preferences that change how the calendar is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Column the week rows start on.
    pub first_weekday: Weekday,
    /// Local offset from UTC in minutes, east positive.
    pub utc_offset_minutes: i32,
    /// Only list workouts of this activity type, when set.
    pub default_activity_filter: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Mon,
            utc_offset_minutes: 0,
            default_activity_filter: None,
        }
    }
}

impl ViewerConfig {
    /// Fixed-offset zone for the configured offset; UTC if out of range.
    pub fn time_zone(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                log::warn!(
                    "utc_offset_minutes={} out of range, using UTC",
                    self.utc_offset_minutes
                );
                Utc.fix()
            })
    }

    pub fn accepts_activity(&self, activity_type: &str) -> bool {
        self.default_activity_filter
            .as_deref()
            .map_or(true, |wanted| wanted == activity_type)
    }
}

/// Read config from disk (JSON). A missing file yields the defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<ViewerConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("no config at {}, using defaults", path.display());
        return Ok(ViewerConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ViewerConfig = serde_json::from_str(&contents)?;
    log::info!(
        "config loaded from {} (first_weekday={:?})",
        path.display(),
        config.first_weekday
    );
    Ok(config)
}

/// Write config to disk as pretty JSON.
pub fn save_config(config: &ViewerConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("config saved to {}", path.display());
    Ok(())
}
