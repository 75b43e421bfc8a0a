//! Repository port - source of pre-fetched accounts and balances

use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Account, Balance};

/// Read-only access to account and balance records
///
/// Implementations (adapters) own the actual storage. Records are handed out
/// by value and never modified by the core.
pub trait AccountRepository: Send + Sync {
    /// Short name of the backing source (e.g., "json", "demo")
    fn name(&self) -> &str;

    /// Get all accounts, ordered by creation time and then id
    fn get_accounts(&self) -> Result<Vec<Account>>;

    /// Get account by ID
    fn get_account(&self, id: Uuid) -> Result<Option<Account>>;

    /// Get the most recent balance for an account
    fn get_balance(&self, account_id: Uuid) -> Result<Option<Balance>>;
}
