//! Persist grid parameters to a JSON settings file.
//!
//! Only values are stored. Bounds come from [`GridParams::default`] and every
//! loaded value is clamped into them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::params::GridParams;

/// Settings path used when none is given on the command line
pub const DEFAULT_SETTINGS_PATH: &str = "settings/noise_grid.json";

/// Errors that can occur while reading or writing settings.
#[derive(Debug)]
pub enum SettingsError {
    /// Failed to read or write the file.
    Io(std::io::Error),
    /// File contents were not valid settings JSON.
    Json(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Settings I/O error: {}", e),
            SettingsError::Json(e) => write!(f, "Invalid settings file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// On-disk layout. Missing fields keep their defaults.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct StoredParams {
    #[serde(default)]
    frequency: Option<f32>,
    #[serde(default)]
    time_frequency: Option<f32>,
    #[serde(default)]
    magnitude: Option<f32>,
    #[serde(default)]
    grid_size: Option<f32>,
    #[serde(default)]
    grid_resolution: Option<u32>,
}

impl From<&GridParams> for StoredParams {
    fn from(params: &GridParams) -> Self {
        Self {
            frequency: Some(params.frequency.get()),
            time_frequency: Some(params.time_frequency.get()),
            magnitude: Some(params.magnitude.get()),
            grid_size: Some(params.grid_size.get()),
            grid_resolution: Some(params.resolution.get()),
        }
    }
}

impl StoredParams {
    fn into_params(self) -> GridParams {
        let mut params = GridParams::default();
        if let Some(v) = self.frequency {
            params.frequency.set(v);
        }
        if let Some(v) = self.time_frequency {
            params.time_frequency.set(v);
        }
        if let Some(v) = self.magnitude {
            params.magnitude.set(v);
        }
        if let Some(v) = self.grid_size {
            params.grid_size.set(v);
        }
        if let Some(v) = self.grid_resolution {
            params.resolution.set(v);
        }
        params
    }
}

/// Parse settings JSON, clamping values into bounds.
pub fn from_json(json: &str) -> Result<GridParams, SettingsError> {
    let stored: StoredParams = serde_json::from_str(json)?;
    Ok(stored.into_params())
}

pub fn to_json(params: &GridParams) -> Result<String, SettingsError> {
    Ok(serde_json::to_string_pretty(&StoredParams::from(params))?)
}

/// Load parameters from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<GridParams, SettingsError> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

/// Save parameters to a JSON file, creating parent directories.
pub fn save(path: impl AsRef<Path>, params: &GridParams) -> Result<(), SettingsError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, to_json(params)?)?;
    Ok(())
}

/// Load parameters for startup.
///
/// A missing file is the first-run case and yields defaults. A corrupt file
/// is reported and also yields defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> GridParams {
    let path = path.as_ref();
    match load(path) {
        Ok(params) => {
            log::info!("Loaded settings from {}", path.display());
            params
        }
        Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No settings at {}, using defaults", path.display());
            GridParams::default()
        }
        Err(e) => {
            log::warn!("{} ({}), using defaults", e, path.display());
            GridParams::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("noise-grid-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip/settings.json");
        let mut params = GridParams::default();
        params.frequency.set(0.25);
        params.magnitude.set(1.5);
        params.resolution.set(42);

        save(&path, &params).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, params);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let json = r#"{
            "frequency": 50.0,
            "time_frequency": -1.0,
            "magnitude": 2.0,
            "grid_size": 100.0,
            "grid_resolution": 1
        }"#;
        let params = from_json(json).unwrap();

        assert_eq!(params.frequency.get(), 2.0);
        assert_eq!(params.time_frequency.get(), 0.001);
        assert_eq!(params.magnitude.get(), 2.0);
        assert_eq!(params.grid_size.get(), 20.0);
        assert_eq!(params.resolution.get(), 3);
    }

    #[test]
    fn test_missing_fields_keep_defaults() {
        let params = from_json(r#"{ "magnitude": 4.0 }"#).unwrap();
        let defaults = GridParams::default();

        assert_eq!(params.magnitude.get(), 4.0);
        assert_eq!(params.frequency, defaults.frequency);
        assert_eq!(params.resolution, defaults.resolution);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(from_json("not json"), Err(SettingsError::Json(_))));
        assert!(matches!(
            from_json(r#"{ "grid_resolution": "many" }"#),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_load_or_default_fallbacks() {
        let missing = temp_path("does/not/exist.json");
        assert_eq!(load_or_default(&missing), GridParams::default());

        let corrupt = temp_path("corrupt/settings.json");
        fs::create_dir_all(corrupt.parent().unwrap()).unwrap();
        fs::write(&corrupt, "{ broken").unwrap();
        assert_eq!(load_or_default(&corrupt), GridParams::default());

        let _ = fs::remove_file(&corrupt);
    }
}
