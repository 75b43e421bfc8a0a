//! Balance domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Balance of an account at a point in time
///
/// There is no currency field: the currency of a balance is always the
/// currency of its owning account. Upstream records that still carry a
/// `currency` key deserialize fine and the key is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub account_id: Uuid,
    /// Settled amount
    pub posted: Decimal,
    /// Authorized but not yet settled
    pub pending: Decimal,
    /// Amount the owner can spend right now
    pub available: Decimal,
    pub as_of: DateTime<Utc>,
}

impl Balance {
    /// Create a balance captured now
    pub fn new(account_id: Uuid, posted: Decimal, pending: Decimal, available: Decimal) -> Self {
        Self {
            account_id,
            posted,
            pending,
            available,
            as_of: Utc::now(),
        }
    }
}
