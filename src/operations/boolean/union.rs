use crate::error::Result;
use crate::geometry::polygon::Polygon;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the boolean union of two regions.
#[derive(Debug)]
pub struct Union<'a> {
    region_a: &'a Polygon,
    region_b: &'a Polygon,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation (A ∪ B).
    #[must_use]
    pub fn new(region_a: &'a Polygon, region_b: &'a Polygon) -> Self {
        Self { region_a, region_b }
    }

    /// Executes the union.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the result boundary cannot be
    /// stitched into closed rings.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        boolean_execute(self.region_a, self.region_b, BooleanOp::Union)
    }
}
