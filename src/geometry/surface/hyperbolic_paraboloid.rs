use std::sync::Arc;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{PartialsFn, Surface};

/// The saddle `z = (u / a)² − (v / b)²` over the `(x, y) = (u, v)` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperbolicParaboloid {
    a: f64,
    b: f64,
}

impl HyperbolicParaboloid {
    /// Creates a hyperbolic paraboloid with curvature scales `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if either scale is (near) zero.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if a.abs() < TOLERANCE || b.abs() < TOLERANCE {
            return Err(GeometryError::Degenerate(
                "hyperbolic paraboloid scales must be non-zero".into(),
            )
            .into());
        }
        Ok(Self { a, b })
    }
}

impl Default for HyperbolicParaboloid {
    /// The preset saddle with `a = 11`, `b = 8`.
    fn default() -> Self {
        Self { a: 11.0, b: 8.0 }
    }
}

impl Surface for HyperbolicParaboloid {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        Point3::new(u, v, (u / self.a).powi(2) - (v / self.b).powi(2))
    }

    fn analytic_partials(&self) -> Option<PartialsFn> {
        let (a, b) = (self.a, self.b);
        Some(Arc::new(move |u, v| {
            (
                Vector3::new(1.0, 0.0, 2.0 * u / (a * a)),
                Vector3::new(0.0, 1.0, -2.0 * v / (b * b)),
            )
        }))
    }
}
