//! Acctview Core - request-side helpers for account and balance APIs
//!
//! Two leaf utilities do the real work:
//!
//! - [`Pagination`] parses `limit`/`offset` query parameters with defaults
//!   and a silent upper clamp
//! - [`responses`] projects domain entities into public response shapes,
//!   always taking a balance's currency from its owning account
//!
//! Around them the crate follows hexagonal architecture:
//!
//! - **domain**: Core entities (Account, Balance, Pagination)
//! - **ports**: Trait definitions for external dependencies (AccountRepository)
//! - **services**: Request handling built on the two helpers
//! - **adapters**: Concrete sources (JSON data file, demo data)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod responses;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use adapters::demo::DemoRepository;
use adapters::json_file::JsonFileRepository;
use config::Config;
use ports::AccountRepository;
use services::AccountService;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult, Result};
pub use domain::{Account, AccountStatus, Balance, Pagination, PaginationPolicy};
pub use responses::{AccountResponse, BalanceResponse, Page};

/// Main context for acctview operations
///
/// Holds the configuration, the selected repository, and the services
/// built on top of it.
pub struct AcctviewContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub repository: Arc<dyn AccountRepository>,
    pub account_service: AccountService,
}

impl AcctviewContext {
    /// Create a new context from a data directory
    ///
    /// Demo mode serves built-in data; otherwise the configured data file
    /// must exist.
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let policy = config.pagination_policy()?;

        let repository: Arc<dyn AccountRepository> = if config.demo_mode {
            Arc::new(DemoRepository::new()?)
        } else {
            Arc::new(JsonFileRepository::open(&config.data_file_path(data_dir))?)
        };

        tracing::debug!(source = repository.name(), "repository ready");

        let account_service = AccountService::new(Arc::clone(&repository), policy);

        Ok(Self {
            config,
            data_dir: data_dir.to_path_buf(),
            repository,
            account_service,
        })
    }
}
