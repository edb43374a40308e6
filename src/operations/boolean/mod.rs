//! Planar boolean kernel for polylines and regions.
//!
//! Every operation runs the same pipeline: split the operand boundaries at
//! all mutual contacts, classify each piece against the other operand, select
//! pieces with a keep table, then merge (curves) or stitch (regions) them.

mod classify;
mod clip;
mod engine;
mod intersect_op;
mod merge;
mod select;
mod split;
mod stitch;
mod subtract;
mod union;

pub use classify::{classify_point_in_region, Facing, FragmentClass, PointClassification};
pub use clip::ClipCurve;
pub use intersect_op::Intersect;
pub use select::{BooleanOp, ClipOp};
pub use split::RegionSource;
pub use subtract::Subtract;
pub use union::Union;

use crate::error::Result;
use crate::geometry::pline::Pline;
use crate::geometry::polygon::Polygon;

/// Set operations of a curve or a region against a region.
pub trait RegionClip {
    /// Result type: curve pieces for curves, polygons for regions.
    type Output;

    /// The part of `self` not in `region`.
    fn difference(&self, region: &Polygon) -> Self::Output;

    /// The part of `self` in `region`.
    fn intersection(&self, region: &Polygon) -> Self::Output;
}

impl RegionClip for Pline {
    type Output = Vec<Pline>;

    fn difference(&self, region: &Polygon) -> Vec<Pline> {
        ClipCurve::difference(self, region).execute()
    }

    fn intersection(&self, region: &Polygon) -> Vec<Pline> {
        ClipCurve::intersection(self, region).execute()
    }
}

impl RegionClip for Polygon {
    type Output = Result<Vec<Polygon>>;

    fn difference(&self, region: &Polygon) -> Result<Vec<Polygon>> {
        Subtract::new(self, region).execute()
    }

    fn intersection(&self, region: &Polygon) -> Result<Vec<Polygon>> {
        Intersect::new(self, region).execute()
    }
}
