//! Account service - request handling for account and balance lookups

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{AccountStatus, Pagination, PaginationPolicy};
use crate::ports::AccountRepository;
use crate::responses::{AccountResponse, BalanceResponse, Page};

pub const STATUS_PARAM: &str = "status";
pub const ERR_INVALID_STATUS: &str = "status must be one of: pending, active, frozen, closed";
pub const ERR_INVALID_ACCOUNT_ID: &str = "account id must be a valid UUID";

/// Turns raw request input into projected responses
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    policy: PaginationPolicy,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>, policy: PaginationPolicy) -> Self {
        Self { repository, policy }
    }

    /// List accounts, one page at a time
    ///
    /// Query parameters: `limit`, `offset`, and an optional `status` filter.
    /// `total` counts accounts after filtering.
    pub fn list_accounts(&self, query: &HashMap<String, String>) -> Result<Page<AccountResponse>> {
        let pagination = Pagination::from_query_with(query, &self.policy)?;

        let status = match query.get(STATUS_PARAM) {
            None => None,
            Some(raw) => Some(
                raw.parse::<AccountStatus>()
                    .map_err(|_| Error::invalid_parameter(STATUS_PARAM, ERR_INVALID_STATUS))?,
            ),
        };

        let accounts: Vec<_> = self
            .repository
            .get_accounts()?
            .into_iter()
            .filter(|a| status.map_or(true, |s| a.status == s))
            .collect();

        tracing::debug!(
            source = self.repository.name(),
            matched = accounts.len(),
            limit = pagination.limit,
            offset = pagination.offset,
            "listing accounts"
        );

        let items = pagination
            .window(&accounts)
            .iter()
            .map(AccountResponse::from)
            .collect();

        Ok(Page::new(items, &pagination, accounts.len() as u64))
    }

    /// Get a single account
    pub fn get_account(&self, id: &str) -> Result<AccountResponse> {
        let id = parse_account_id(id)?;
        let account = self
            .repository
            .get_account(id)?
            .ok_or_else(|| Error::not_found(format!("account {}", id)))?;

        Ok(AccountResponse::from(account))
    }

    /// Get the latest balance of an account, in the account's currency
    pub fn get_balance(&self, account_id: &str) -> Result<BalanceResponse> {
        let id = parse_account_id(account_id)?;
        let account = self
            .repository
            .get_account(id)?
            .ok_or_else(|| Error::not_found(format!("account {}", id)))?;
        let balance = self
            .repository
            .get_balance(id)?
            .ok_or_else(|| Error::not_found(format!("balance for account {}", id)))?;

        tracing::debug!(account_id = %id, as_of = %balance.as_of, "projecting balance");

        Ok(BalanceResponse::project(&balance, &account))
    }
}

fn parse_account_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| Error::invalid_parameter("id", ERR_INVALID_ACCOUNT_ID))
}
