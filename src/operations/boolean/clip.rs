use crate::geometry::pline::Pline;
use crate::geometry::polygon::Polygon;

use super::engine::clip_execute;
use super::select::ClipOp;

/// Clips an open or closed polyline against a region.
///
/// Results are the surviving pieces in the curve's own traversal order. A
/// closed curve that is not cut at all comes back as a single closed
/// polyline; otherwise every piece is open.
#[derive(Debug)]
pub struct ClipCurve<'a> {
    curve: &'a Pline,
    region: &'a Polygon,
    op: ClipOp,
}

impl<'a> ClipCurve<'a> {
    /// Creates a clip keeping the parts of `curve` outside `region`.
    #[must_use]
    pub fn difference(curve: &'a Pline, region: &'a Polygon) -> Self {
        Self {
            curve,
            region,
            op: ClipOp::Difference,
        }
    }

    /// Creates a clip keeping the parts of `curve` inside `region` or on its
    /// boundary.
    #[must_use]
    pub fn intersection(curve: &'a Pline, region: &'a Polygon) -> Self {
        Self {
            curve,
            region,
            op: ClipOp::Intersection,
        }
    }

    /// Executes the clip. An empty curve yields no pieces.
    #[must_use]
    pub fn execute(&self) -> Vec<Pline> {
        clip_execute(self.curve, self.region, self.op)
    }
}
