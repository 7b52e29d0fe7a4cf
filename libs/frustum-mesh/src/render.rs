//! # Renderer Handoff
//!
//! Meshes leave the crate through the [`Renderer`] trait. Display backends
//! live outside this crate; they receive a validated [`Mesh`] and usually
//! upload it as the flat buffers in [`MeshBuffers`].

use crate::error::MeshResult;
use crate::mesh::Mesh;

/// Flattened mesh data ready for GPU upload.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::{FrustumSpec, MeshBuffers};
/// use glam::DVec3;
///
/// let mesh = FrustumSpec::new(DVec3::ZERO, 3.0, 1.0, 2.0).with_sides(4).build().unwrap();
/// let buffers = MeshBuffers::from_mesh(&mesh);
/// assert_eq!(buffers.vertices.len(), 30);
/// assert_eq!(buffers.indices.len(), 48);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    pub vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    pub indices: Vec<u32>,
    /// Optional vertex normals as [nx, ny, nz, ...]
    pub normals: Option<Vec<f32>>,
}

impl MeshBuffers {
    /// Creates buffers from a mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
        }
    }

    /// Number of vertices described by the position buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Number of triangles described by the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A display backend that accepts a vertex/face mesh.
pub trait Renderer {
    /// Displays or otherwise consumes the mesh.
    fn render(&mut self, mesh: &Mesh) -> MeshResult<()>;
}

/// Renderer that logs a summary of each mesh and keeps its buffers.
///
/// Useful headless or in tests, where no display is available.
#[derive(Debug, Default)]
pub struct SummaryRenderer {
    last: Option<MeshBuffers>,
    rendered: usize,
}

impl SummaryRenderer {
    /// Creates a renderer with nothing rendered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers of the most recently rendered mesh.
    pub fn last(&self) -> Option<&MeshBuffers> {
        self.last.as_ref()
    }

    /// Number of meshes rendered so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl Renderer for SummaryRenderer {
    fn render(&mut self, mesh: &Mesh) -> MeshResult<()> {
        mesh.validate()?;

        let (min, max) = mesh.bounding_box();
        log::info!(
            "rendering mesh: {} vertices, {} faces, bounds {} .. {}, closed={}",
            mesh.vertex_count(),
            mesh.face_count(),
            min,
            max,
            mesh.is_closed()
        );

        self.last = Some(MeshBuffers::from_mesh(mesh));
        self.rendered += 1;
        Ok(())
    }
}
