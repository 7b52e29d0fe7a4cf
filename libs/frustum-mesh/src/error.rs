//! # Error Types
//!
//! Error types for frustum mesh operations. Every failure is detected
//! synchronously when a call is made and surfaced immediately.
//!
//! ## Error Policy
//!
//! - No silent coercion of out-of-range parameters
//! - All failures return explicit errors
//! - Errors carry a message naming the offending value

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or transforming a mesh.
///
/// ## Example
///
/// ```rust
/// use frustum_mesh::{frustum, FrustumSpec, MeshError};
/// use glam::DVec3;
///
/// let spec = FrustumSpec::new(DVec3::ZERO, 3.0, 1.0, 2.0).with_sides(2);
/// match frustum::build(&spec) {
///     Ok(mesh) => println!("{} vertices", mesh.vertex_count()),
///     Err(MeshError::InvalidParameter { message }) => eprintln!("rejected: {message}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A caller-supplied parameter is out of range, non-finite or unrecognized.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the rejected value.
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

impl From<ConfigError> for MeshError {
    fn from(err: ConfigError) -> Self {
        Self::invalid_parameter(err.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
