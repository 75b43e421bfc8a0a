//! Global subscriber installation
//!
//! Kept in its own test binary: installing the global subscriber would clash
//! with the capturing subscriber used by the unit tests.

use acctview_core::logging::{init_logging, LogConfig, LogFormat};

#[test]
fn test_second_init_fails() {
    let config = LogConfig {
        format: LogFormat::Compact,
        ..LogConfig::default().with_default_level("off")
    };
    assert!(init_logging(config).is_ok());
    assert!(init_logging(LogConfig::default()).is_err());
}
