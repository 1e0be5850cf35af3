//! Tests covering vector configuration behavior.

use super::*;
use crate::Vec3;
use angie_config::constants::{DEFAULT_SEPARATOR, NORMALIZED_TOLERANCE};
use std::error::Error;

#[test]
fn default_matches_constants() {
    let cfg = VectorConfig::default();
    assert_eq!(cfg.tolerance, NORMALIZED_TOLERANCE);
    assert_eq!(cfg.separator, DEFAULT_SEPARATOR);
    assert_eq!(cfg, VectorConfig::from(GlobalConfig::default()));
}

#[test]
fn builder_validates_input() {
    let err = VectorConfig::new(0.0, ",").unwrap_err();
    assert_eq!(err, VectorConfigError(ConfigError::InvalidTolerance(0.0)));
    assert!(err.to_string().starts_with("invalid vector config"));
    assert!(err.source().is_some());

    let err = VectorConfig::new(1.0e-9, "").unwrap_err();
    assert_eq!(err, VectorConfigError(ConfigError::EmptySeparator));
}

#[test]
fn config_drives_reading_and_tolerance() {
    let loose = VectorConfig::new(1.0e-3, "|").unwrap();

    let mut v = Vec3::default();
    v.read_str_config("(1 | 0 | 0.0005)", &loose);
    assert_eq!(v, Vec3::new(1.0, 0.0, 0.0005));

    assert!(v.is_normalized_config(&loose));
    assert!(!v.is_normalized_config(&VectorConfig::default()));
    assert!(!v.is_normalized());
}
