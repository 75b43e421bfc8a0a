//! Account domain model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

use super::result::{Error, Result};

/// Lifecycle state of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Active,
    Frozen,
    Closed,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 4] = [
        AccountStatus::Pending,
        AccountStatus::Active,
        AccountStatus::Frozen,
        AccountStatus::Closed,
    ];

    /// Canonical textual name, as exposed in API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "pending",
            AccountStatus::Active => "active",
            AccountStatus::Frozen => "frozen",
            AccountStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(AccountStatus::Pending),
            "active" => Ok(AccountStatus::Active),
            "frozen" => Ok(AccountStatus::Frozen),
            "closed" => Ok(AccountStatus::Closed),
            other => Err(Error::validation(format!("unknown account status: {}", other))),
        }
    }
}

/// A financial account as supplied by the upstream account service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// ISO 4217 currency code, normalized to uppercase
    pub currency: String,
    pub status: AccountStatus,
    /// Free-form key/value data attached by the owner
    #[serde(default)]
    pub metadata: Map<String, JsonValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new pending account
    pub fn new(id: Uuid, owner_id: Uuid, currency: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            currency: Self::normalize_currency(currency),
            status: AccountStatus::Pending,
            metadata: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Normalize currency code to uppercase
    pub fn normalize_currency(currency: &str) -> String {
        currency.trim().to_uppercase()
    }

    /// Validate account data
    ///
    /// The currency code is checked in its normalized form.
    pub fn validate(&self) -> Result<()> {
        let currency_re = Regex::new(r"^[A-Z]{3}$").map_err(|e| Error::Other(e.to_string()))?;
        if !currency_re.is_match(&Self::normalize_currency(&self.currency)) {
            return Err(Error::validation(format!(
                "account {} has invalid currency code '{}'",
                self.id, self.currency
            )));
        }
        if self.updated_at < self.created_at {
            return Err(Error::validation(format!(
                "account {} was updated before it was created",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_currency_normalization() {
        assert_eq!(Account::normalize_currency("usd"), "USD");
        assert_eq!(Account::normalize_currency(" eur "), "EUR");
    }

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new(Uuid::new_v4(), Uuid::new_v4(), "gbp");
        assert_eq!(account.currency, "GBP");
        assert_eq!(account.status, AccountStatus::Pending);
        assert!(account.metadata.is_empty());
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_account_validation() {
        let mut account = Account::new(Uuid::new_v4(), Uuid::new_v4(), "USD");
        assert!(account.validate().is_ok());

        account.currency = "US".to_string();
        assert!(matches!(account.validate(), Err(Error::Validation(_))));

        account.currency = "usd".to_string();
        assert!(account.validate().is_ok());

        account.currency = "U5D".to_string();
        assert!(account.validate().is_err());

        account.currency = "USD".to_string();
        account.updated_at = account.created_at - Duration::seconds(1);
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_status_canonical_names() {
        let names: Vec<&str> = AccountStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["pending", "active", "frozen", "closed"]);

        for status in AccountStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                JsonValue::String(status.as_str().to_string())
            );
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("active".parse::<AccountStatus>().unwrap(), AccountStatus::Active);
        assert_eq!(" Frozen ".parse::<AccountStatus>().unwrap(), AccountStatus::Frozen);
        assert!("suspended".parse::<AccountStatus>().is_err());
        assert!("".parse::<AccountStatus>().is_err());
    }
}
