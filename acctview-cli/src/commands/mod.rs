//! CLI command implementations

pub mod account;
pub mod accounts;
pub mod balance;
pub mod demo;

use std::path::PathBuf;

use anyhow::{Context, Result};
use acctview_core::AcctviewContext;

/// Get the data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ACCTVIEW_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".acctview"))
        .context("Could not find home directory; set ACCTVIEW_DIR")
}

/// Get or create acctview context
pub fn get_context() -> Result<AcctviewContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    AcctviewContext::new(&data_dir).context("Failed to initialize acctview context")
}
