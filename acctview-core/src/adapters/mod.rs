//! Adapter implementations
//!
//! Adapters implement the port traits with concrete sources:
//! - JSON data file exported by the upstream services
//! - Demo data provider for trying things out

pub mod demo;
pub mod json_file;
