use crate::error::Result;
use crate::geometry::polygon::Polygon;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean subtraction of one region from another.
#[derive(Debug)]
pub struct Subtract<'a> {
    region_a: &'a Polygon,
    region_b: &'a Polygon,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation (A - B).
    #[must_use]
    pub fn new(region_a: &'a Polygon, region_b: &'a Polygon) -> Self {
        Self { region_a, region_b }
    }

    /// Executes the subtraction. The result may be empty or split into several polygons.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the result boundary cannot be
    /// stitched into closed rings.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        boolean_execute(self.region_a, self.region_b, BooleanOp::Subtract)
    }
}
