//! Demo data provider
//!
//! A small fixed data set for trying the CLI without an upstream export:
//! - 5 accounts across 3 currencies, one in every status
//! - latest and historical balances; the pending account has none yet
//!
//! Balances are built from upstream-shaped records, which still carry the
//! ledger's own currency column. That column is dropped on the way in.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Map, Value as JsonValue};
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Account, AccountStatus, Balance};
use crate::ports::AccountRepository;

use super::json_file::DataSet;

const OWNER_ALICE: Uuid = Uuid::from_u128(0xa11ce000_0000_0000_0000_000000000001);
const OWNER_BOB: Uuid = Uuid::from_u128(0xb0b00000_0000_0000_0000_000000000002);

pub const DEMO_CHECKING: Uuid = Uuid::from_u128(0x11111111_1111_1111_1111_111111111111);
pub const DEMO_SAVINGS: Uuid = Uuid::from_u128(0x22222222_2222_2222_2222_222222222222);
pub const DEMO_EURO: Uuid = Uuid::from_u128(0x33333333_3333_3333_3333_333333333333);
pub const DEMO_STERLING: Uuid = Uuid::from_u128(0x44444444_4444_4444_4444_444444444444);
pub const DEMO_PENDING: Uuid = Uuid::from_u128(0x55555555_5555_5555_5555_555555555555);

/// 2025-01-01T00:00:00Z
const DEMO_EPOCH_SECS: i64 = 1_735_689_600;

fn demo_time(days: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(DEMO_EPOCH_SECS, 0).unwrap_or_default() + Duration::days(days)
}

fn demo_account(
    id: Uuid,
    owner_id: Uuid,
    currency: &str,
    status: AccountStatus,
    label: &str,
    created_day: i64,
) -> Account {
    let mut metadata = Map::new();
    metadata.insert("label".to_string(), JsonValue::from(label));
    metadata.insert("source".to_string(), JsonValue::from("demo"));

    Account {
        id,
        owner_id,
        currency: currency.to_string(),
        status,
        metadata,
        created_at: demo_time(created_day),
        updated_at: demo_time(created_day + 30),
    }
}

/// Generate demo accounts
pub fn generate_demo_accounts() -> Vec<Account> {
    vec![
        demo_account(DEMO_CHECKING, OWNER_ALICE, "USD", AccountStatus::Active, "Everyday Checking", 0),
        demo_account(DEMO_SAVINGS, OWNER_ALICE, "USD", AccountStatus::Frozen, "Emergency Fund", 3),
        demo_account(DEMO_EURO, OWNER_ALICE, "EUR", AccountStatus::Active, "Travel Wallet", 7),
        demo_account(DEMO_STERLING, OWNER_BOB, "GBP", AccountStatus::Closed, "Old Current Account", 10),
        demo_account(DEMO_PENDING, OWNER_BOB, "USD", AccountStatus::Pending, "New Brokerage", 14),
    ]
}

/// Generate demo balances
pub fn generate_demo_balances() -> Result<Vec<Balance>> {
    // (account, ledger currency, posted, pending, available, day)
    let rows: [(Uuid, &str, &str, &str, &str, i64); 5] = [
        (DEMO_CHECKING, "USD", "4823.47", "-125.00", "4698.47", 40),
        (DEMO_CHECKING, "USD", "5011.20", "-64.18", "4947.02", 45),
        (DEMO_SAVINGS, "usd", "18750.00", "0.00", "0.00", 45),
        (DEMO_EURO, "USD", "912.35", "-40.00", "872.35", 44),
        (DEMO_STERLING, "EUR", "0.00", "0.00", "0.00", 41),
    ];

    rows.iter()
        .map(|(account_id, ledger_currency, posted, pending, available, day)| -> Result<Balance> {
            let record = json!({
                "account_id": account_id,
                "currency": ledger_currency,
                "posted": posted,
                "pending": pending,
                "available": available,
                "as_of": demo_time(*day),
            });
            Ok(serde_json::from_value::<Balance>(record)?)
        })
        .collect()
}

/// Repository serving the demo data set
pub struct DemoRepository {
    data: DataSet,
}

impl DemoRepository {
    pub fn new() -> Result<Self> {
        let data = DataSet {
            accounts: generate_demo_accounts(),
            balances: generate_demo_balances()?,
        }
        .prepare()?;

        Ok(Self { data })
    }
}

impl AccountRepository for DemoRepository {
    fn name(&self) -> &str {
        "demo"
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_demo_accounts_cover_every_status() {
        let accounts = generate_demo_accounts();
        for status in AccountStatus::ALL {
            assert!(accounts.iter().any(|a| a.status == status), "missing {}", status);
        }
        assert!(accounts.iter().all(|a| a.validate().is_ok()));
    }

    #[test]
    fn test_demo_repository_lookups() {
        let repo = DemoRepository::new().unwrap();
        assert_eq!(repo.name(), "demo");
        assert_eq!(repo.get_accounts().unwrap().len(), 5);

        let checking = repo.get_balance(DEMO_CHECKING).unwrap().unwrap();
        assert_eq!(checking.posted, Decimal::new(501120, 2));

        assert!(repo.get_balance(DEMO_PENDING).unwrap().is_none());
        assert!(repo.get_account(Uuid::nil()).unwrap().is_none());
    }

    #[test]
    fn test_demo_accounts_sorted_by_creation() {
        let repo = DemoRepository::new().unwrap();
        let ids: Vec<Uuid> = repo.get_accounts().unwrap().iter().map(|a| a.id).collect();
        assert_eq!(
            ids,
            vec![DEMO_CHECKING, DEMO_SAVINGS, DEMO_EURO, DEMO_STERLING, DEMO_PENDING]
        );
    }
}
