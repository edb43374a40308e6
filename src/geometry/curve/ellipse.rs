use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::ClosedCurve;

/// An axis-aligned ellipse in the parameter plane.
///
/// `P(t) = center + (a · cos t, b · sin t)`, traced counter-clockwise for
/// increasing `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point2,
    semi_axis_u: f64,
    semi_axis_v: f64,
}

impl Ellipse {
    /// Creates an ellipse centered at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is non-positive.
    pub fn new(semi_axis_u: f64, semi_axis_v: f64) -> Result<Self> {
        Self::centered(Point2::origin(), semi_axis_u, semi_axis_v)
    }

    /// Creates an ellipse with the given center.
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is non-positive.
    pub fn centered(center: Point2, semi_axis_u: f64, semi_axis_v: f64) -> Result<Self> {
        if semi_axis_u < TOLERANCE {
            return Err(GeometryError::Degenerate("u semi-axis must be positive".into()).into());
        }
        if semi_axis_v < TOLERANCE {
            return Err(GeometryError::Degenerate("v semi-axis must be positive".into()).into());
        }
        Ok(Self {
            center,
            semi_axis_u,
            semi_axis_v,
        })
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the semi-axis along `u`.
    #[must_use]
    pub fn semi_axis_u(&self) -> f64 {
        self.semi_axis_u
    }

    /// Returns the semi-axis along `v`.
    #[must_use]
    pub fn semi_axis_v(&self) -> f64 {
        self.semi_axis_v
    }
}

impl ClosedCurve for Ellipse {
    fn evaluate(&self, t: f64) -> Point2 {
        self.center + Vector2::new(self.semi_axis_u * t.cos(), self.semi_axis_v * t.sin())
    }
}
