//! # Config Crate
//!
//! Centralized configuration constants for frustum mesh generation.
//! Tessellation defaults and numeric tolerances are defined here so the
//! mesh crate never carries literal magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, DEFAULT_SIDES, MIN_SIDES};
//!
//! let requested: Option<u32> = None;
//! let sides = requested.unwrap_or(DEFAULT_SIDES);
//! assert!(sides >= MIN_SIDES);
//!
//! assert!(approx_equal(1.0, 1.0 + 1e-12));
//! ```

pub mod constants;
