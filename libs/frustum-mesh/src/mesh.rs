//! # Mesh Data Structure
//!
//! Indexed triangle mesh: an ordered vertex list plus an ordered list of
//! faces referencing vertices by index.

use std::collections::{HashMap, HashSet};

use config::constants::{approx_zero, GlobalConfig, EPSILON_TOLERANCE};
use glam::{DMat3, DVec3};

use crate::error::{MeshError, MeshResult};

/// A vertex position. The index in [`Mesh::vertices`] is its identity.
pub type Vertex = DVec3;

/// A triangle as three vertex indices. Winding follows the right-hand rule:
/// the normal is `(v1 - v0) × (v2 - v0)`.
pub type Face = [u32; 3];

/// A triangle mesh with vertices and face indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens when handing buffers to a renderer.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<Vertex>,
    /// Triangle indices
    faces: Vec<Face>,
    /// Optional per-vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face by vertex indices.
    pub fn add_face(&mut self, v0: u32, v1: u32, v2: u32) {
        self.faces.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns a reference to the faces.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the vertex at the given index, if any.
    #[inline]
    pub fn vertex(&self, index: u32) -> Option<Vertex> {
        self.vertices.get(index as usize).copied()
    }

    /// Returns the face at the given index, if any.
    #[inline]
    pub fn face(&self, index: usize) -> Option<Face> {
        self.faces.get(index).copied()
    }

    /// Returns the per-vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Checks that every face index refers to an existing vertex.
    ///
    /// Degenerate (zero-area) faces are accepted; a cone built from a
    /// zero radius ring legitimately contains them.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(bad) = face.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::invalid_parameter(format!(
                    "face {face_index} references vertex {bad}, mesh has {vertex_count} vertices"
                )));
            }
        }
        Ok(())
    }

    /// Positions of a face's three corners, or `None` if any index is out
    /// of range.
    fn corners(&self, face: &Face) -> Option<(DVec3, DVec3, DVec3)> {
        Some((
            *self.vertices.get(face[0] as usize)?,
            *self.vertices.get(face[1] as usize)?,
            *self.vertices.get(face[2] as usize)?,
        ))
    }

    /// Returns the unnormalized right-hand-rule normal of a face.
    ///
    /// Its length is twice the face area. `None` if the face does not exist
    /// or references a missing vertex.
    pub fn face_normal(&self, index: usize) -> Option<DVec3> {
        let (v0, v1, v2) = self.corners(self.faces.get(index)?)?;
        Some((v1 - v0).cross(v2 - v0))
    }

    /// Returns unit face normals, one per face. Degenerate faces (area below
    /// `EPSILON_TOLERANCE`) and faces with out-of-range indices get
    /// `DVec3::ZERO`.
    pub fn face_normals(&self) -> Vec<DVec3> {
        (0..self.faces.len())
            .map(|index| match self.face_normal(index) {
                Some(normal) if 0.5 * normal.length() >= EPSILON_TOLERANCE => {
                    normal.normalize()
                }
                _ => DVec3::ZERO,
            })
            .collect()
    }

    /// Indices of faces whose area is below `config.tolerance`.
    ///
    /// Faces with out-of-range indices are skipped; run [`Mesh::validate`]
    /// to detect them.
    pub fn degenerate_faces(&self, config: &GlobalConfig) -> Vec<usize> {
        (0..self.faces.len())
            .filter(|&index| {
                self.face_normal(index)
                    .is_some_and(|normal| 0.5 * normal.length() < config.tolerance)
            })
            .collect()
    }

    /// Computes area-weighted per-vertex normals and stores them.
    ///
    /// Faces with out-of-range indices contribute nothing.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for face in &self.faces {
            let Some((v0, v1, v2)) = self.corners(face) else {
                continue;
            };
            let normal = (v1 - v0).cross(v2 - v0);

            for &index in face {
                normals[index as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Applies an orthonormal rotation matrix to every vertex and normal.
    ///
    /// Faces are untouched; a proper rotation preserves winding.
    pub fn apply_rotation(&mut self, rotation: &DMat3) {
        for v in &mut self.vertices {
            *v = *rotation * *v;
        }

        if let Some(normals) = &mut self.normals {
            for n in normals {
                *n = (*rotation * *n).normalize_or_zero();
            }
        }
    }

    /// Counts how many faces use each undirected edge.
    fn edge_usage(&self) -> HashMap<(u32, u32), usize> {
        let mut usage = HashMap::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            for k in 0..3 {
                let a = face[k];
                let b = face[(k + 1) % 3];
                *usage.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        usage
    }

    /// Returns undirected edges (low index first) used by exactly one face,
    /// sorted.
    pub fn boundary_edges(&self) -> Vec<[u32; 2]> {
        let mut edges: Vec<[u32; 2]> = self
            .edge_usage()
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .map(|((a, b), _)| [a, b])
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Returns true if every edge is shared by exactly two faces.
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty() && self.edge_usage().values().all(|&count| count == 2)
    }

    /// Returns true if no directed edge occurs twice, i.e. neighbouring
    /// faces traverse their shared edge in opposite directions.
    pub fn has_consistent_winding(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            for k in 0..3 {
                if !seen.insert((face[k], face[(k + 1) % 3])) {
                    return false;
                }
            }
        }
        true
    }

    /// Signed volume enclosed by the faces. Positive when a closed mesh is
    /// wound with outward normals; meaningless for an open mesh, where it
    /// depends on the origin.
    ///
    /// Faces with out-of-range indices are skipped.
    pub fn signed_volume(&self) -> f64 {
        self.faces
            .iter()
            .filter_map(|face| self.corners(face))
            .map(|(v0, v1, v2)| v0.dot(v1.cross(v2)))
            .sum::<f64>()
            / 6.0
    }

    /// Reverses every face if a closed mesh is wound inward.
    ///
    /// Open meshes and meshes with no enclosed volume are left untouched.
    /// Returns true if the winding was flipped.
    pub fn fix_winding(&mut self) -> bool {
        if !self.is_closed() {
            return false;
        }
        let volume = self.signed_volume();
        if volume >= 0.0 || approx_zero(volume) {
            return false;
        }

        for face in &mut self.faces {
            face.swap(1, 2);
        }
        if let Some(normals) = &mut self.normals {
            for n in normals {
                *n = -*n;
            }
        }
        true
    }

    /// Exports vertices as a flattened f32 array for GPU upload.
    ///
    /// Returns [x, y, z, x, y, z, ...].
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports face indices as a flattened u32 array.
    ///
    /// Returns [i0, i1, i2, i0, i1, i2, ...].
    pub fn indices_u32(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Exports normals as a flattened f32 array, if computed.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::approx_equal;

    /// Unit tetrahedron wound outward.
    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::Z);
        mesh.add_face(0, 2, 1);
        mesh.add_face(0, 1, 3);
        mesh.add_face(0, 3, 2);
        mesh.add_face(1, 2, 3);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), Some(DVec3::new(1.0, 2.0, 3.0)));
        assert_eq!(mesh.vertex(1), None);
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(0, 1, 2);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_mesh_validate_accepts_degenerate_face() {
        let mut mesh = Mesh::new();
        for _ in 0..3 {
            mesh.add_vertex(DVec3::ONE);
        }
        mesh.add_face(0, 1, 2);
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.face_normals(), vec![DVec3::ZERO]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_tetrahedron_is_closed_and_outward() {
        let mesh = tetrahedron();
        assert!(mesh.is_closed());
        assert!(mesh.boundary_edges().is_empty());
        assert!(mesh.has_consistent_winding());
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_triangle_has_three_boundary_edges() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_face(0, 1, 2);
        assert!(!mesh.is_closed());
        assert_eq!(mesh.boundary_edges(), vec![[0, 1], [0, 2], [1, 2]]);
    }

    #[test]
    fn test_fix_winding_flips_inward_mesh() {
        let mut mesh = tetrahedron();
        for face in &mut mesh.faces {
            face.swap(0, 1);
        }
        assert!(mesh.signed_volume() < 0.0);

        assert!(mesh.fix_winding());
        assert!(mesh.signed_volume() > 0.0);
        assert!(!mesh.fix_winding());
    }

    #[test]
    fn test_compute_normals_are_unit() {
        let mut mesh = tetrahedron();
        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        assert_eq!(normals.len(), 4);
        for n in normals {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_apply_rotation_keeps_faces() {
        let mut mesh = tetrahedron();
        let faces = mesh.faces().to_vec();
        mesh.apply_rotation(&DMat3::from_rotation_z(std::f64::consts::FRAC_PI_2));
        assert_eq!(mesh.faces(), faces.as_slice());
        let rotated = mesh.vertex(1).unwrap();
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_face_does_not_panic() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_face(0, 1, 2);

        assert_eq!(mesh.face_normal(0), None);
        assert_eq!(mesh.face_normal(1), None);
        assert_eq!(mesh.face_normals(), vec![DVec3::ZERO]);
        assert_eq!(mesh.signed_volume(), 0.0);
        assert!(mesh.degenerate_faces(&GlobalConfig::default()).is_empty());

        mesh.compute_normals();
        assert_eq!(mesh.normals(), Some(&[DVec3::ZERO][..]));
        assert!(!mesh.fix_winding());
    }

    #[test]
    fn test_bad_face_is_skipped_among_good_ones() {
        let mut mesh = tetrahedron();
        mesh.add_face(0, 1, 9);
        assert!(mesh.validate().is_err());
        assert_eq!(mesh.face_normal(4), None);
        assert!(approx_equal(mesh.signed_volume(), 1.0 / 6.0));
    }

    #[test]
    fn test_degenerate_faces_use_configured_tolerance() {
        let mut mesh = tetrahedron();
        mesh.add_vertex(DVec3::new(2.0, 0.0, 0.0));
        // Collinear corners
        mesh.add_face(0, 1, 4);

        assert_eq!(mesh.degenerate_faces(&GlobalConfig::default()), vec![4]);

        // A loose tolerance also flags the tetrahedron's faces (area >= 0.5)
        let loose = GlobalConfig::new(1.0, 12).unwrap();
        assert_eq!(mesh.degenerate_faces(&loose), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_translate_moves_vertices_only() {
        let mut mesh = tetrahedron();
        let faces = mesh.faces().to_vec();
        let volume = mesh.signed_volume();

        mesh.translate(DVec3::new(1.0, -2.0, 3.0));
        assert_eq!(mesh.vertex(0), Some(DVec3::new(1.0, -2.0, 3.0)));
        assert_eq!(mesh.vertex(3), Some(DVec3::new(1.0, -2.0, 4.0)));
        assert_eq!(mesh.faces(), faces.as_slice());
        // Closed mesh volume does not depend on position
        assert_relative_eq!(mesh.signed_volume(), volume, epsilon = EPSILON_TOLERANCE);
    }

    #[test]
    fn test_fix_winding_ignores_open_mesh() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 5.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 5.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 5.0));
        mesh.add_face(0, 1, 2);
        assert!(mesh.signed_volume() < 0.0);

        let before = mesh.clone();
        assert!(!mesh.fix_winding());
        assert_eq!(mesh, before);
    }

    /// Meshes are plain values; independent callers may build them on
    /// separate threads.
    #[test]
    fn test_mesh_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mesh>();
    }

    #[test]
    fn test_mesh_buffers_flatten() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertices_f32().len(), 12);
        assert_eq!(mesh.indices_u32()[..3], [0, 2, 1]);
        assert!(mesh.normals_f32().is_none());
    }
}
