//! Pagination parameters parsed from request query strings

use std::collections::HashMap;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Number of items returned when the request has no `limit`
pub const DEFAULT_LIMIT: u32 = 20;

/// Largest `limit` a request can get; larger values are clamped
pub const MAX_LIMIT: u32 = 100;

pub const LIMIT_PARAM: &str = "limit";
pub const OFFSET_PARAM: &str = "offset";

pub const ERR_INVALID_LIMIT: &str = "limit must be a positive integer";
pub const ERR_INVALID_OFFSET: &str = "offset must be a non-negative integer";

/// Bounds applied while parsing pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationPolicy {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

/// Validated `limit`/`offset` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Parse `limit` and `offset` with the default policy
    pub fn from_query(query: &HashMap<String, String>) -> Result<Self> {
        Self::from_query_with(query, &PaginationPolicy::default())
    }

    /// Parse `limit` and `offset` from query parameters
    ///
    /// A `limit` above `policy.max_limit` is clamped without error. The limit
    /// is checked first, so a request with two bad values reports the limit.
    pub fn from_query_with(
        query: &HashMap<String, String>,
        policy: &PaginationPolicy,
    ) -> Result<Self> {
        let limit = match query.get(LIMIT_PARAM) {
            None => policy.default_limit,
            Some(raw) => parse_limit(raw, policy.max_limit)?,
        };

        let offset = match query.get(OFFSET_PARAM) {
            None => 0,
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| Error::invalid_parameter(OFFSET_PARAM, ERR_INVALID_OFFSET))?,
        };

        Ok(Self { limit, offset })
    }

    /// Sub-slice of `items` selected by this page
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset)
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start.saturating_add(self.limit as usize).min(items.len());
        &items[start..end]
    }
}

fn parse_limit(raw: &str, max_limit: u32) -> Result<u32> {
    let requested = match raw.parse::<u64>() {
        Ok(0) => return Err(Error::invalid_parameter(LIMIT_PARAM, ERR_INVALID_LIMIT)),
        Ok(n) => n,
        // Still a positive integer, just a very large one
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => return Err(Error::invalid_parameter(LIMIT_PARAM, ERR_INVALID_LIMIT)),
    };

    if requested > u64::from(max_limit) {
        tracing::warn!(
            requested = raw,
            applied = max_limit,
            "pagination limit clamped"
        );
        return Ok(max_limit);
    }

    // requested <= max_limit, so it fits
    Ok(requested as u32)
}
