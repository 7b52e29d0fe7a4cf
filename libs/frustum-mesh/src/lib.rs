//! # Frustum Mesh
//!
//! Parametric frustum (truncated cone) mesh generation with outward-facing
//! triangle winding.
//!
//! ## Architecture
//!
//! ```text
//! FrustumSpec → frustum::build → Mesh → transform::rotate → Renderer
//! ```
//!
//! Everything is a pure function of its inputs: no global state, no I/O.
//!
//! ## Usage
//!
//! ```rust
//! use frustum_mesh::{transform, Axis, FrustumSpec, Renderer, SummaryRenderer};
//! use glam::DVec3;
//!
//! let mesh = FrustumSpec::new(DVec3::ZERO, 5.0, 4.0, 2.0).build()?;
//! let mesh = transform::rotate(&mesh, Axis::X, 60.0)?;
//!
//! let mut renderer = SummaryRenderer::new();
//! renderer.render(&mesh)?;
//! # Ok::<(), frustum_mesh::MeshError>(())
//! ```

pub mod error;
pub mod frustum;
pub mod mesh;
pub mod render;
pub mod transform;

pub use error::{MeshError, MeshResult};
pub use frustum::FrustumSpec;
pub use mesh::{Face, Mesh, Vertex};
pub use render::{MeshBuffers, Renderer, SummaryRenderer};
pub use transform::Axis;
