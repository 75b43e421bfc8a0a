//! Paginated list envelope

use serde::{Deserialize, Serialize};

use crate::domain::Pagination;

/// One page of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: u32,
    pub offset: u64,
    /// Number of records before windowing
    pub total: u64,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: &Pagination, total: u64) -> Self {
        let has_more = pagination.offset.saturating_add(items.len() as u64) < total;
        Self {
            items,
            limit: pagination.limit,
            offset: pagination.offset,
            total,
            has_more,
        }
    }

    /// Apply `f` to every item, keeping the paging fields
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            limit: self.limit,
            offset: self.offset,
            total: self.total,
            has_more: self.has_more,
        }
    }
}
