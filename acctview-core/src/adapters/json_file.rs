//! JSON data file adapter
//!
//! Reads a snapshot of accounts and balances exported by the upstream
//! services:
//! ```json
//! {
//!   "accounts": [ { "id": "...", "owner_id": "...", "currency": "USD", ... } ],
//!   "balances": [ { "account_id": "...", "posted": "10.00", ... } ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, Balance};
use crate::ports::AccountRepository;

/// Accounts and balances held in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

impl DataSet {
    /// Normalize and validate every account, then sort accounts by
    /// (created_at, id)
    pub fn prepare(mut self) -> Result<Self> {
        for account in &mut self.accounts {
            account.currency = Account::normalize_currency(&account.currency);
            account.validate()?;
        }
        self.accounts
            .sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(self)
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Latest balance for an account by `as_of`
    pub fn latest_balance(&self, account_id: Uuid) -> Option<&Balance> {
        self.balances
            .iter()
            .filter(|b| b.account_id == account_id)
            .max_by_key(|b| b.as_of)
    }
}

/// Repository backed by a JSON data file, loaded once at construction
pub struct JsonFileRepository {
    data: DataSet,
}

impl JsonFileRepository {
    /// Load and validate the data file
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::not_found(format!(
                "data file {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let data: DataSet = serde_json::from_str(&content)?;
        let data = data.prepare()?;

        tracing::info!(
            path = %path.display(),
            accounts = data.accounts.len(),
            balances = data.balances.len(),
            "loaded data file"
        );

        Ok(Self { data })
    }
}

impl AccountRepository for JsonFileRepository {
    fn name(&self) -> &str {
        "json"
    }

    fn get_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.data.accounts.clone())
    }

    fn get_account(&self, id: Uuid) -> Result<Option<Account>> {
        Ok(self.data.account(id).cloned())
    }

    fn get_balance(&self, account_id: Uuid) -> Result<Option<Balance>> {
        Ok(self.data.latest_balance(account_id).cloned())
    }
}
