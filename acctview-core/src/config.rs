//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "demoMode": false,
//!   "dataFile": "data.json",
//!   "pagination": { "defaultLimit": 20, "maxLimit": 100 }
//! }
//! ```
//! Keys this crate doesn't know about are kept when saving.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::domain::PaginationPolicy;

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_file: Option<PathBuf>,
    #[serde(default)]
    pagination: PaginationPolicy,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Acctview configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    /// Data file as written in settings; see [`Config::data_file_path`]
    pub data_file: Option<PathBuf>,
    pub pagination: PaginationPolicy,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            data_file: None,
            pagination: PaginationPolicy::default(),
            _raw_settings: SettingsFile::default(),
        }
    }
}

fn read_settings(settings_path: &Path) -> Result<SettingsFile> {
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %settings_path.display(), error = %e, "ignoring malformed settings");
        SettingsFile::default()
    }))
}

/// Parse an `ACCTVIEW_DEMO_MODE` value; unrecognized values give no override
fn demo_mode_override(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Demo mode can also be forced with ACCTVIEW_DEMO_MODE (for CI/testing).
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = read_settings(&data_dir.join(SETTINGS_FILE))?;

        let demo_mode = demo_mode_override(std::env::var("ACCTVIEW_DEMO_MODE").ok().as_deref())
            .unwrap_or(raw.demo_mode);

        Ok(Self {
            demo_mode,
            data_file: raw.data_file.clone(),
            pagination: raw.pagination,
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    /// Preserves other settings that acctview doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let mut settings = read_settings(&settings_path)?;
        settings.demo_mode = self.demo_mode;
        settings.data_file = self.data_file.clone();
        settings.pagination = self.pagination;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Data file location, relative paths resolved against `data_dir`
    pub fn data_file_path(&self, data_dir: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_DATA_FILE),
        }
    }

    /// Checked pagination bounds
    pub fn pagination_policy(&self) -> Result<PaginationPolicy> {
        let policy = self.pagination;
        if policy.default_limit == 0 {
            return Err(Error::config("pagination.defaultLimit must be positive"));
        }
        if policy.default_limit > policy.max_limit {
            return Err(Error::config(format!(
                "pagination.defaultLimit ({}) exceeds pagination.maxLimit ({})",
                policy.default_limit, policy.max_limit
            )));
        }
        Ok(policy)
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.pagination, PaginationPolicy::default());
        assert_eq!(config.data_file_path(dir.path()), dir.path().join("data.json"));
        assert!(config.pagination_policy().is_ok());
    }

    #[test]
    fn test_malformed_settings_gives_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.pagination, PaginationPolicy::default());
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"theme": "dark", "pagination": {"defaultLimit": 10, "maxLimit": 50}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        assert_eq!(config.pagination.default_limit, 10);
        assert_eq!(config.pagination.max_limit, 50);

        config.data_file = Some(PathBuf::from("export.json"));
        config.save(dir.path()).unwrap();

        let saved: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(saved["theme"], "dark");
        assert_eq!(saved["dataFile"], "export.json");
        assert_eq!(saved["pagination"]["maxLimit"], 50);
    }

    #[test]
    fn test_data_file_path_resolution() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();

        config.data_file = Some(PathBuf::from("nested/export.json"));
        assert_eq!(
            config.data_file_path(dir.path()),
            dir.path().join("nested/export.json")
        );

        let absolute = dir.path().join("elsewhere.json");
        config.data_file = Some(absolute.clone());
        assert_eq!(config.data_file_path(Path::new("/unused")), absolute);
    }

    #[test]
    fn test_demo_mode_override_values() {
        for value in ["true", "1", "yes", "TRUE", "YES"] {
            assert_eq!(demo_mode_override(Some(value)), Some(true), "{}", value);
        }
        for value in ["false", "0", "no", "FALSE", "NO"] {
            assert_eq!(demo_mode_override(Some(value)), Some(false), "{}", value);
        }
        assert_eq!(demo_mode_override(Some("maybe")), None);
        assert_eq!(demo_mode_override(Some("")), None);
        assert_eq!(demo_mode_override(None), None);
    }

    #[test]
    fn test_pagination_policy_checks() {
        let mut config = Config::default();

        config.pagination = PaginationPolicy { default_limit: 0, max_limit: 100 };
        assert!(matches!(config.pagination_policy(), Err(Error::Config(_))));

        config.pagination = PaginationPolicy { default_limit: 50, max_limit: 10 };
        assert!(matches!(config.pagination_policy(), Err(Error::Config(_))));
    }
}
