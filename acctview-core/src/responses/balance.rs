//! Balance response projection

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Account, Balance};

/// Balance as returned to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub account_id: Uuid,
    /// Always the owning account's currency
    pub currency: String,
    pub posted: Decimal,
    pub pending: Decimal,
    pub available: Decimal,
    pub as_of: DateTime<Utc>,
}

impl BalanceResponse {
    /// Project a balance, taking the currency from its owning account
    pub fn project(balance: &Balance, account: &Account) -> Self {
        Self {
            account_id: balance.account_id,
            currency: account.currency.clone(),
            posted: balance.posted,
            pending: balance.pending,
            available: balance.available,
            as_of: balance.as_of,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_currency_comes_from_account() {
        let account = Account::new(Uuid::new_v4(), Uuid::new_v4(), "USD");

        for stray in ["EUR", "JPY", "usd", ""] {
            let raw = serde_json::json!({
                "account_id": account.id,
                "posted": "10.00",
                "pending": "0.00",
                "available": "10.00",
                "as_of": "2025-01-15T10:30:00Z",
                "currency": stray
            });
            let balance: Balance = serde_json::from_value(raw).unwrap();

            let response = BalanceResponse::project(&balance, &account);
            assert_eq!(response.currency, "USD");
        }
    }

    #[test]
    fn test_amounts_and_timestamp_copied() {
        let account = Account::new(Uuid::new_v4(), Uuid::new_v4(), "CHF");
        let mut balance = Balance::new(
            account.id,
            Decimal::new(250075, 2),
            Decimal::new(-1999, 2),
            Decimal::new(248076, 2),
        );
        balance.as_of = Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 59).unwrap();

        let response = BalanceResponse::project(&balance, &account);
        assert_eq!(response.account_id, balance.account_id);
        assert_eq!(response.posted, balance.posted);
        assert_eq!(response.pending, balance.pending);
        assert_eq!(response.available, balance.available);
        assert_eq!(response.as_of, balance.as_of);
        assert_eq!(response.currency, "CHF");
    }

    #[test]
    fn test_json_shape() {
        let account = Account::new(Uuid::new_v4(), Uuid::new_v4(), "USD");
        let balance = Balance::new(
            account.id,
            Decimal::new(1050, 2),
            Decimal::ZERO,
            Decimal::new(1050, 2),
        );

        let json = serde_json::to_value(BalanceResponse::project(&balance, &account)).unwrap();
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["posted"], "10.50");
        assert_eq!(json["account_id"], account.id.to_string());
    }
}
