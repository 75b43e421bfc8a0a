//! Core domain entities
//!
//! Pure data structures with validation logic - no I/O or external dependencies.

mod account;
mod balance;
pub mod pagination;
pub mod result;

pub use account::{Account, AccountStatus};
pub use balance::Balance;
pub use pagination::{Pagination, PaginationPolicy};
