//! Public response shapes
//!
//! Projections of domain entities into flat structures ready for JSON
//! serialization. Projections are total: inputs are trusted to be valid.

mod account;
mod balance;
mod page;

pub use account::AccountResponse;
pub use balance::BalanceResponse;
pub use page::Page;
