use std::sync::Arc;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{PartialsFn, Surface};

/// A plane in 3D space.
///
/// Defined by an origin point and two direction vectors (`u_dir`, `v_dir`).
/// The normal is `u_dir × v_dir`.
///
/// Parametric form: `P(u, v) = origin + u * u_dir + v * v_dir`.
#[derive(Debug, Clone)]
pub struct Plane {
    origin: Point3,
    u_dir: Vector3,
    v_dir: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a new plane from an origin and two direction vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vectors are zero-length
    /// or parallel (degenerate plane).
    pub fn new(origin: Point3, u_dir: Vector3, v_dir: Vector3) -> Result<Self> {
        let u_len = u_dir.norm();
        let v_len = v_dir.norm();
        if u_len < TOLERANCE || v_len < TOLERANCE {
            return Err(GeometryError::Degenerate("zero-length plane direction".into()).into());
        }

        let u_dir = u_dir / u_len;
        let v_dir = v_dir / v_len;

        let normal = u_dir.cross(&v_dir);
        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(
                GeometryError::Degenerate("plane directions are parallel".into()).into(),
            );
        }

        Ok(Self {
            origin,
            u_dir,
            v_dir,
            normal: normal / normal_len,
        })
    }

    /// The `z = 0` plane with `(u, v) = (x, y)`.
    #[must_use]
    pub fn xy() -> Self {
        Self {
            origin: Point3::origin(),
            u_dir: Vector3::x(),
            v_dir: Vector3::y(),
            normal: Vector3::z(),
        }
    }

    /// Returns the origin point of the plane.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the normal vector of the plane.
    #[must_use]
    pub fn plane_normal(&self) -> &Vector3 {
        &self.normal
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::xy()
    }
}

impl Surface for Plane {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        self.origin + self.u_dir * u + self.v_dir * v
    }

    fn analytic_partials(&self) -> Option<PartialsFn> {
        let (u_dir, v_dir) = (self.u_dir, self.v_dir);
        Some(Arc::new(move |_, _| (u_dir, v_dir)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn xy_plane_maps_parameters_to_coordinates() {
        let p = Plane::xy().evaluate(2.0, -3.0);
        assert_eq!(p, Point3::new(2.0, -3.0, 0.0));
    }

    #[test]
    fn tilted_plane_normal() {
        let plane = Plane::new(
            Point3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 1.0),
        )
        .unwrap();
        let n = plane.plane_normal();
        let s = 0.5_f64.sqrt();
        assert!((n - Vector3::new(0.0, -s, s)).norm() < 1e-12);
    }

    #[test]
    fn partials_are_the_directions() {
        let plane = Plane::xy();
        let partials = plane.analytic_partials().unwrap();
        let (du, dv) = partials(5.0, 7.0);
        assert_eq!(du, Vector3::x());
        assert_eq!(dv, Vector3::y());
    }

    #[test]
    fn parallel_directions_rejected() {
        let r = Plane::new(Point3::origin(), Vector3::x(), Vector3::x() * 2.0);
        assert!(r.is_err());
    }

    #[test]
    fn zero_direction_rejected() {
        let r = Plane::new(Point3::origin(), Vector3::zeros(), Vector3::y());
        assert!(r.is_err());
    }
}
