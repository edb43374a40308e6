use crate::geometry::pline::Pline;
use crate::geometry::polygon::Polygon;
use crate::math::polygon_2d::{point_on_ring, ring_contains};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Distance of the side probe used to resolve fragments lying on a boundary.
const PROBE_OFFSET: f64 = 1e-6;

/// Classification of a point relative to a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

/// Relative orientation of two boundaries that share a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Both regions lie on the same side of the shared fragment.
    Same,
    /// The regions lie on opposite sides.
    Opposite,
}

/// Classification of a boundary fragment relative to the other region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentClass {
    Inside,
    Outside,
    OnBoundary(Facing),
}

/// Classifies a point as inside, outside, or on the boundary of a region.
///
/// The region is closed: points on any ring are `OnBoundary`. Otherwise the
/// point is inside if the exterior contains it and no hole does.
#[must_use]
pub fn classify_point_in_region(point: &Point2, region: &Polygon) -> PointClassification {
    if region.rings().any(|ring| point_on_ring(point, &ring.points)) {
        return PointClassification::OnBoundary;
    }
    if !ring_contains(point, &region.exterior().points) {
        return PointClassification::Outside;
    }
    if region.holes().iter().any(|h| ring_contains(point, &h.points)) {
        PointClassification::Outside
    } else {
        PointClassification::Inside
    }
}

/// Classifies a curve piece by its arc-length midpoint.
///
/// Pieces come from slicing at every boundary contact, so their interior never
/// crosses the region boundary and one sample decides the whole piece.
#[must_use]
pub fn classify_piece(piece: &Pline, region: &Polygon) -> PointClassification {
    match piece.interpolate(0.5) {
        Some(mid) => classify_point_in_region(&mid, region),
        None => PointClassification::Outside,
    }
}

/// Classifies a boundary fragment of one region against another region.
///
/// The fragment's left side is the interior of its own region (exteriors are
/// counter-clockwise, holes clockwise). Fragments on the other boundary are
/// resolved by probing that side.
#[must_use]
pub fn classify_fragment(fragment: &Pline, other: &Polygon) -> FragmentClass {
    let Some((mid, dir)) = midpoint_and_direction(fragment) else {
        return FragmentClass::Outside;
    };
    match classify_point_in_region(&mid, other) {
        PointClassification::Inside => FragmentClass::Inside,
        PointClassification::Outside => FragmentClass::Outside,
        PointClassification::OnBoundary => {
            let left = Vector2::new(-dir.y, dir.x);
            let probe = mid + left * PROBE_OFFSET;
            match classify_point_in_region(&probe, other) {
                PointClassification::Inside => FragmentClass::OnBoundary(Facing::Same),
                _ => FragmentClass::OnBoundary(Facing::Opposite),
            }
        }
    }
}

/// Arc-length midpoint and unit direction of travel there.
fn midpoint_and_direction(pline: &Pline) -> Option<(Point2, Vector2)> {
    let total = pline.length();
    if total < TOLERANCE {
        return None;
    }
    let mut remaining = 0.5 * total;
    for i in 0..pline.segment_count() {
        let (a, b) = pline.segment(i);
        let d = b - a;
        let len = d.norm();
        if len < TOLERANCE {
            continue;
        }
        if remaining <= len {
            return Some((a + d * (remaining / len), d / len));
        }
        remaining -= len;
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(lo: f64, hi: f64) -> Polygon {
        Polygon::new(Pline::closed(vec![p(lo, lo), p(hi, lo), p(hi, hi), p(lo, hi)])).unwrap()
    }

    #[test]
    fn points_inside_outside_and_on_boundary() {
        let sq = square(0.0, 2.0);
        assert_eq!(
            classify_point_in_region(&p(1.0, 1.0), &sq),
            PointClassification::Inside
        );
        assert_eq!(
            classify_point_in_region(&p(3.0, 1.0), &sq),
            PointClassification::Outside
        );
        assert_eq!(
            classify_point_in_region(&p(2.0, 1.0), &sq),
            PointClassification::OnBoundary
        );
        assert_eq!(
            classify_point_in_region(&p(0.0, 0.0), &sq),
            PointClassification::OnBoundary
        );
    }

    #[test]
    fn hole_interior_is_outside() {
        let outer = Pline::closed(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]);
        let hole = Pline::closed(vec![p(1.0, 1.0), p(2.0, 1.0), p(2.0, 2.0), p(1.0, 2.0)]);
        let region = Polygon::with_holes(outer, vec![hole]).unwrap();
        assert_eq!(
            classify_point_in_region(&p(1.5, 1.5), &region),
            PointClassification::Outside
        );
        assert_eq!(
            classify_point_in_region(&p(3.0, 3.0), &region),
            PointClassification::Inside
        );
    }

    #[test]
    fn shared_edge_facing() {
        let other = square(0.0, 2.0);
        // Along the bottom edge left to right: interior of `other` is on the left.
        let same = Pline::open(vec![p(0.5, 0.0), p(1.5, 0.0)]);
        assert_eq!(
            classify_fragment(&same, &other),
            FragmentClass::OnBoundary(Facing::Same)
        );
        let opposite = same.reversed();
        assert_eq!(
            classify_fragment(&opposite, &other),
            FragmentClass::OnBoundary(Facing::Opposite)
        );
    }

    #[test]
    fn piece_classified_by_midpoint() {
        let sq = square(0.0, 2.0);
        let piece = Pline::open(vec![p(0.0, 1.0), p(1.0, 1.0), p(2.0, 1.0)]);
        assert_eq!(classify_piece(&piece, &sq), PointClassification::Inside);
    }
}
