use crate::error::Result;
use crate::geometry::polygon::Polygon;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean intersection of two regions.
#[derive(Debug)]
pub struct Intersect<'a> {
    region_a: &'a Polygon,
    region_b: &'a Polygon,
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` operation (A ∩ B).
    #[must_use]
    pub fn new(region_a: &'a Polygon, region_b: &'a Polygon) -> Self {
        Self { region_a, region_b }
    }

    /// Executes the intersection. Disjoint regions yield an empty result.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the result boundary cannot be
    /// stitched into closed rings.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        boolean_execute(self.region_a, self.region_b, BooleanOp::Intersect)
    }
}
