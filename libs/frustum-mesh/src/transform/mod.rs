//! Rigid rotation helpers for meshes.
//!
//! Rotation matrices come from `glam`; this module only selects the matrix,
//! checks inputs and applies it to every vertex. Face indices never change.

use std::fmt;
use std::str::FromStr;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Principal rotation axis.
///
/// Parses case-insensitively from `"x"`, `"y"` or `"z"`.
///
/// # Examples
/// ```
/// use frustum_mesh::Axis;
/// let axis: Axis = "X".parse().unwrap();
/// assert_eq!(axis, Axis::X);
/// assert!("w".parse::<Axis>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    pub fn unit_vector(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }

    /// Counter-clockwise rotation matrix, viewed from the positive axis
    /// looking toward the origin.
    pub fn rotation_matrix(self, radians: f64) -> DMat3 {
        match self {
            Axis::X => DMat3::from_rotation_x(radians),
            Axis::Y => DMat3::from_rotation_y(radians),
            Axis::Z => DMat3::from_rotation_z(radians),
        }
    }
}

impl FromStr for Axis {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(MeshError::invalid_parameter(format!(
                "axis must be one of 'x', 'y' or 'z': {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

fn checked_radians(angle_degrees: f64) -> MeshResult<f64> {
    if !angle_degrees.is_finite() {
        return Err(MeshError::invalid_parameter(format!(
            "rotation angle must be finite: {angle_degrees}"
        )));
    }
    Ok(angle_degrees.to_radians())
}

/// Returns a copy of `mesh` rotated by `angle_degrees` about a principal axis.
///
/// # Examples
/// ```
/// use frustum_mesh::{transform, Axis, FrustumSpec};
/// use glam::DVec3;
///
/// let mesh = FrustumSpec::new(DVec3::ZERO, 5.0, 4.0, 2.0).build().unwrap();
/// let rotated = transform::rotate(&mesh, Axis::X, 60.0).unwrap();
/// assert_eq!(rotated.faces(), mesh.faces());
/// ```
pub fn rotate(mesh: &Mesh, axis: Axis, angle_degrees: f64) -> MeshResult<Mesh> {
    let mut rotated = mesh.clone();
    rotate_in_place(&mut rotated, axis, angle_degrees)?;
    Ok(rotated)
}

/// Rotates `mesh` in place by `angle_degrees` about a principal axis.
pub fn rotate_in_place(mesh: &mut Mesh, axis: Axis, angle_degrees: f64) -> MeshResult<()> {
    let radians = checked_radians(angle_degrees)?;
    apply(mesh, &axis.rotation_matrix(radians), axis.unit_vector(), angle_degrees);
    Ok(())
}

/// Returns a copy of `mesh` rotated about an arbitrary axis through the origin.
///
/// The axis need not be normalized but must be finite and non-zero.
pub fn rotate_about(mesh: &Mesh, axis: DVec3, angle_degrees: f64) -> MeshResult<Mesh> {
    let mut rotated = mesh.clone();
    rotate_about_in_place(&mut rotated, axis, angle_degrees)?;
    Ok(rotated)
}

/// Rotates `mesh` in place about an arbitrary axis through the origin.
pub fn rotate_about_in_place(
    mesh: &mut Mesh,
    axis: DVec3,
    angle_degrees: f64,
) -> MeshResult<()> {
    let radians = checked_radians(angle_degrees)?;
    let unit = axis.try_normalize().ok_or_else(|| {
        MeshError::invalid_parameter(format!("rotation axis must be finite and non-zero: {axis}"))
    })?;

    apply(mesh, &DMat3::from_axis_angle(unit, radians), unit, angle_degrees);
    Ok(())
}

fn apply(mesh: &mut Mesh, rotation: &DMat3, axis: DVec3, angle_degrees: f64) {
    mesh.apply_rotation(rotation);
    log::debug!(
        "rotated {} vertices by {} deg about {}",
        mesh.vertex_count(),
        angle_degrees,
        axis
    );
}
