//! Tests for logging initialization

use linefit::core::logging::{init_logging, resolve_format, LogFormat};
use linefit::prelude::*;
use std::str::FromStr;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert!(variants.contains(&"compact"));
    assert!(variants.contains(&"pretty"));
    assert!(variants.contains(&"json"));
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
    assert!(resolve_format(Some("invalid_format")).is_err());
}

#[test]
fn test_wrapping_with_subscriber_installed() {
    // Only the first init in this process succeeds; later ones fail gracefully
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("json"));

    let lines = TextWrapper::new(WrapConfig::new(4))
        .wrap_to_strings("trace **every** step")
        .unwrap();
    assert_eq!(lines, vec!["trac", "e", "ever", "y", "step"]);
}
