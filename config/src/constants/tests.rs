//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.default_sides >= MIN_SIDES);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, 12).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 12).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 2).unwrap_err(),
        ConfigError::InvalidSides(2)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, MAX_SIDES + 1).unwrap_err(),
        ConfigError::InvalidSides(MAX_SIDES + 1)
    );
}

#[test]
fn new_rejects_non_finite_tolerance() {
    assert!(GlobalConfig::new(f64::NAN, 12).is_err());
    assert!(GlobalConfig::new(f64::INFINITY, 12).is_err());
}

#[test]
fn error_display_names_the_value() {
    let message = ConfigError::InvalidSides(2).to_string();
    assert!(message.contains("default_sides"));
    assert!(message.contains('2'));
}
