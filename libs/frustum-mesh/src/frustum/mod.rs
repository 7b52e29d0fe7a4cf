//! # Frustum Primitive
//!
//! Generates a closed frustum (truncated cone) mesh with outward-facing
//! winding. A zero radius on one end yields a cone; disabling caps yields
//! an open tube.
//!
//! ## Vertex Layout
//!
//! ```text
//! 0 .. sides            top ring     (z = cz + h, radius r1)
//! sides .. 2*sides      bottom ring  (z = cz,     radius r2)
//! 2*sides               top center   (caps only)
//! 2*sides + 1           bottom center (caps only)
//! ```

use config::constants::{GlobalConfig, DEFAULT_SIDES, MAX_SIDES, MIN_SIDES};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

fn default_sides() -> u32 {
    DEFAULT_SIDES
}

fn default_caps() -> bool {
    true
}

/// Input parameters for a frustum.
///
/// # Example
///
/// ```rust
/// use frustum_mesh::FrustumSpec;
/// use glam::DVec3;
///
/// let spec = FrustumSpec::new(DVec3::ZERO, 5.0, 4.0, 2.0).with_sides(32);
/// let mesh = spec.build().unwrap();
/// assert_eq!(mesh.vertex_count(), 66);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrustumSpec {
    /// Center of the bottom ring. The top ring sits `height` above it.
    pub center: DVec3,
    /// Distance between the two rings along +Z.
    pub height: f64,
    /// Radius of the top ring.
    pub top_radius: f64,
    /// Radius of the bottom ring.
    pub bottom_radius: f64,
    /// Number of sides of the regular polygon approximating each ring.
    #[serde(default = "default_sides")]
    pub sides: u32,
    /// Whether to close the ends with fan-triangulated caps.
    #[serde(default = "default_caps")]
    pub caps: bool,
}

impl FrustumSpec {
    /// Creates a capped spec with the default side count.
    pub fn new(center: DVec3, height: f64, top_radius: f64, bottom_radius: f64) -> Self {
        Self {
            center,
            height,
            top_radius,
            bottom_radius,
            sides: DEFAULT_SIDES,
            caps: true,
        }
    }

    /// Creates a capped spec taking its side count from a [`GlobalConfig`].
    pub fn from_config(
        config: &GlobalConfig,
        center: DVec3,
        height: f64,
        top_radius: f64,
        bottom_radius: f64,
    ) -> Self {
        Self::new(center, height, top_radius, bottom_radius).with_sides(config.default_sides)
    }

    /// Sets the side count.
    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides;
        self
    }

    /// Enables or disables the end caps.
    pub fn with_caps(mut self, caps: bool) -> Self {
        self.caps = caps;
        self
    }

    /// Builds the mesh described by this spec. See [`build`].
    pub fn build(&self) -> MeshResult<Mesh> {
        build(self)
    }

    /// Checks the spec, returning the first violation found.
    pub fn validate(&self) -> MeshResult<()> {
        if !(MIN_SIDES..=MAX_SIDES).contains(&self.sides) {
            return Err(MeshError::invalid_parameter(format!(
                "sides must be in {MIN_SIDES}..={MAX_SIDES}: {}",
                self.sides
            )));
        }

        if !self.center.is_finite() {
            return Err(MeshError::invalid_parameter(format!(
                "center must be finite: {}",
                self.center
            )));
        }

        for (name, value) in [
            ("height", self.height),
            ("top_radius", self.top_radius),
            ("bottom_radius", self.bottom_radius),
        ] {
            if !value.is_finite() {
                return Err(MeshError::invalid_parameter(format!(
                    "{name} must be finite: {value}"
                )));
            }
        }

        if self.height <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "height must be positive: {}",
                self.height
            )));
        }

        if self.top_radius < 0.0 || self.bottom_radius < 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "radii must be non-negative: top={}, bottom={}",
                self.top_radius, self.bottom_radius
            )));
        }

        if self.top_radius == 0.0 && self.bottom_radius == 0.0 {
            return Err(MeshError::invalid_parameter(
                "at least one radius must be positive",
            ));
        }

        Ok(())
    }
}

/// Creates a frustum mesh.
///
/// Both rings keep `sides` vertices even when their radius is zero, so the
/// index layout never depends on the radii.
///
/// Side quads are split into `(top[i], bottom[i], bottom[next])` and
/// `(top[i], bottom[next], top[next])`; with rings laid out counter-clockwise
/// seen from +Z this puts every side normal away from the axis. The top fan
/// `(top_center, top[i], top[next])` faces +Z and the bottom fan reverses
/// its ring order to face -Z.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] if the spec fails [`FrustumSpec::validate`].
///
/// # Example
///
/// ```rust
/// use frustum_mesh::{frustum, FrustumSpec};
/// use glam::DVec3;
///
/// let spec = FrustumSpec::new(DVec3::ZERO, 3.0, 1.0, 2.0).with_sides(4);
/// let mesh = frustum::build(&spec).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.face_count(), 16);
/// assert!(mesh.is_closed());
/// ```
pub fn build(spec: &FrustumSpec) -> MeshResult<Mesh> {
    spec.validate()?;

    let sides = spec.sides;
    let n = sides as usize;
    let (vertex_count, face_count) = if spec.caps {
        (2 * n + 2, 4 * n)
    } else {
        (2 * n, 2 * n)
    };
    let mut mesh = Mesh::with_capacity(vertex_count, face_count);

    let center = spec.center;
    let top_z = center.z + spec.height;
    let step_angle = TAU / sides as f64;

    let ring = |mesh: &mut Mesh, radius: f64, z: f64| -> u32 {
        let start = mesh.vertex_count() as u32;
        for i in 0..sides {
            let (sin, cos) = (i as f64 * step_angle).sin_cos();
            mesh.add_vertex(DVec3::new(
                radius * cos + center.x,
                radius * sin + center.y,
                z,
            ));
        }
        start
    };

    let top = ring(&mut mesh, spec.top_radius, top_z);
    let bottom = ring(&mut mesh, spec.bottom_radius, center.z);

    // Side walls
    for i in 0..sides {
        let next = (i + 1) % sides;
        mesh.add_face(top + i, bottom + i, bottom + next);
        mesh.add_face(top + i, bottom + next, top + next);
    }

    if spec.caps {
        let top_center = mesh.add_vertex(DVec3::new(center.x, center.y, top_z));
        for i in 0..sides {
            let next = (i + 1) % sides;
            mesh.add_face(top_center, top + i, top + next);
        }

        let bottom_center = mesh.add_vertex(center);
        for i in 0..sides {
            let next = (i + 1) % sides;
            mesh.add_face(bottom_center, bottom + next, bottom + i);
        }
    }

    log::debug!(
        "built frustum: sides={} caps={} vertices={} faces={}",
        sides,
        spec.caps,
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(mesh)
}
