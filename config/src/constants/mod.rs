//! Centralized configuration values shared by the frustum mesh crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry checks.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Default number of sides for the regular polygon approximating each
/// frustum ring.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_SIDES, MIN_SIDES};
/// assert!(DEFAULT_SIDES >= MIN_SIDES);
/// ```
pub const DEFAULT_SIDES: u32 = 12;

/// Minimum side count. Fewer than three sides cannot enclose an area.
///
/// # Examples
/// ```
/// use config::constants::MIN_SIDES;
/// let requested = 2;
/// assert!(requested < MIN_SIDES);
/// ```
pub const MIN_SIDES: u32 = 3;

/// Maximum side count accepted by the builder.
///
/// A frustum with `n` sides allocates `2n + 2` vertices, all addressed by
/// `u32` indices, so the limit keeps every index comfortably in range.
///
/// # Examples
/// ```
/// use config::constants::MAX_SIDES;
/// assert!((2 * MAX_SIDES as u64 + 2) < u32::MAX as u64);
/// ```
pub const MAX_SIDES: u32 = 1_000_000;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance used for geometric comparisons.
    pub tolerance: f64,
    /// Side count used when a caller does not choose one.
    pub default_sides: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and default side count.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 32).expect("valid config");
    /// assert_eq!(cfg.default_sides, 32);
    /// ```
    pub fn new(tolerance: f64, default_sides: u32) -> Result<Self, ConfigError> {
        if tolerance <= 0.0 || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_SIDES..=MAX_SIDES).contains(&default_sides) {
            return Err(ConfigError::InvalidSides(default_sides));
        }
        Ok(Self {
            tolerance,
            default_sides,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_sides: DEFAULT_SIDES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the side count is outside `MIN_SIDES..=MAX_SIDES`.
    InvalidSides(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidSides(value) => {
                write!(f, "default_sides must be in {MIN_SIDES}..={MAX_SIDES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within `EPSILON_TOLERANCE`.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON_TOLERANCE
}

/// Checks if a f64 value is approximately zero within `EPSILON_TOLERANCE`.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON_TOLERANCE
}

#[cfg(test)]
mod tests;
