use crate::geometry::pline::Pline;
use crate::math::{Point2, TOLERANCE};

/// A parameter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    U,
    V,
}

impl Axis {
    /// The coordinate of `p` along this axis.
    #[must_use]
    pub fn coord(self, p: &Point2) -> f64 {
        match self {
            Axis::U => p.x,
            Axis::V => p.y,
        }
    }
}

/// Keeps the pieces of a cut line that start at or below `bound` along
/// `axis`, each truncated where it first rises above `bound`.
///
/// Pieces starting above the bound lie in the removed sector.
#[must_use]
pub fn sector_filter(pieces: Vec<Pline>, axis: Axis, bound: f64) -> Vec<Pline> {
    pieces
        .into_iter()
        .filter(|piece| piece.first().is_some_and(|p| axis.coord(p) <= bound))
        .filter_map(|piece| truncate_above(&piece, axis, bound))
        .collect()
}

/// The leading part of an open polyline whose `axis` coordinate stays at or
/// below `bound`.
fn truncate_above(pline: &Pline, axis: Axis, bound: f64) -> Option<Pline> {
    let mut points: Vec<Point2> = Vec::with_capacity(pline.len());
    for p in &pline.points {
        let c = axis.coord(p);
        if c <= bound {
            points.push(*p);
            continue;
        }
        if let Some(prev) = points.last().copied() {
            let c0 = axis.coord(&prev);
            let t = (bound - c0) / (c - c0);
            let mut cross = prev + (p - prev) * t;
            match axis {
                Axis::U => cross.x = bound,
                Axis::V => cross.y = bound,
            }
            points.push(cross);
        }
        break;
    }
    let out = Pline::open(points).deduplicated();
    (!out.is_empty() && out.length() >= TOLERANCE).then_some(out)
}
