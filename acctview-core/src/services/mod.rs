//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod account;
mod demo;

pub use account::{AccountService, ERR_INVALID_ACCOUNT_ID, ERR_INVALID_STATUS, STATUS_PARAM};
pub use demo::DemoService;
