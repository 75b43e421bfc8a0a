//! Demo service - manage demo mode
//!
//! Demo mode serves a built-in data set instead of the data file, so the
//! CLI can be tried without an upstream export.

use std::path::{Path, PathBuf};

use crate::adapters::demo::{generate_demo_accounts, generate_demo_balances};
use crate::adapters::json_file::DataSet;
use crate::config::Config;
use crate::domain::result::Result;

/// Demo service for managing demo mode
pub struct DemoService {
    data_dir: PathBuf,
}

impl DemoService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.data_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.data_dir)
    }

    /// Disable demo mode
    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.data_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.data_dir)
    }

    /// Write the demo data set to the configured data file
    ///
    /// Gives a starting point for a real export. Returns the path written.
    pub fn export(&self) -> Result<PathBuf> {
        let config = Config::load(&self.data_dir).unwrap_or_default();
        let path = config.data_file_path(&self.data_dir);

        let data = DataSet {
            accounts: generate_demo_accounts(),
            balances: generate_demo_balances()?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(&data)?)?;

        tracing::info!(path = %path.display(), "wrote demo data file");
        Ok(path)
    }
}
