use super::distance_2d::point_to_chain_dist;
use super::intersect_2d::{segment_intersection_2d, SegmentIntersection};
use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if `p` lies strictly inside the closed ring by the
/// crossing-number rule. Points on the ring give an unspecified answer; test
/// them with [`point_on_ring`] first.
#[must_use]
pub fn ring_contains(p: &Point2, ring: &[Point2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&ring[i], &ring[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pj.x + (p.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Returns `true` if `p` lies on the closed ring within [`TOLERANCE`].
#[must_use]
pub fn point_on_ring(p: &Point2, ring: &[Point2]) -> bool {
    point_to_chain_dist(p, ring, true) < TOLERANCE
}

/// Checks whether a closed ring is simple: no two non-adjacent edges touch and
/// no adjacent edges fold back onto each other.
#[must_use]
pub fn is_simple_ring(ring: &[Point2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        let (a0, a1) = (&ring[i], &ring[(i + 1) % n]);
        for j in (i + 1)..n {
            let (b0, b1) = (&ring[j], &ring[(j + 1) % n]);
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match segment_intersection_2d(a0, a1, b0, b1) {
                None => {}
                // Adjacent edges share exactly their common vertex.
                Some(SegmentIntersection::Point { .. }) if adjacent => {}
                Some(_) => return false,
            }
        }
    }
    true
}

/// Returns the axis-aligned bounds `(min, max)` of a point set.
#[must_use]
pub fn bounds(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut lo = *first;
    let mut hi = *first;
    for p in &points[1..] {
        lo.x = lo.x.min(p.x);
        lo.y = lo.y.min(p.y);
        hi.x = hi.x.max(p.x);
        hi.y = hi.y.max(p.y);
    }
    Some((lo, hi))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area(&unit_square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        assert!((signed_area(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn contains_interior_point() {
        assert!(ring_contains(&p(0.5, 0.5), &unit_square()));
        assert!(!ring_contains(&p(1.5, 0.5), &unit_square()));
    }

    #[test]
    fn contains_in_concave_ring() {
        // L-shape with the upper-right quadrant removed.
        let l = vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ];
        assert!(ring_contains(&p(0.5, 1.5), &l));
        assert!(!ring_contains(&p(1.5, 1.5), &l));
    }

    #[test]
    fn on_ring_detects_edges_and_vertices() {
        let sq = unit_square();
        assert!(point_on_ring(&p(0.5, 0.0), &sq));
        assert!(point_on_ring(&p(1.0, 1.0), &sq));
        assert!(point_on_ring(&p(0.0, 0.5), &sq));
        assert!(!point_on_ring(&p(0.5, 0.5), &sq));
    }

    #[test]
    fn square_is_simple() {
        assert!(is_simple_ring(&unit_square()));
    }

    #[test]
    fn bow_tie_is_not_simple() {
        let bow = vec![p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert!(!is_simple_ring(&bow));
    }

    #[test]
    fn spike_is_not_simple() {
        // (2,0) → (1,0) folds back along the previous edge.
        let spike = vec![p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert!(!is_simple_ring(&spike));
    }

    #[test]
    fn bounds_of_points() {
        let (lo, hi) = bounds(&[p(1.0, -2.0), p(-3.0, 4.0), p(0.0, 0.0)]).unwrap();
        assert_eq!((lo.x, lo.y, hi.x, hi.y), (-3.0, -2.0, 1.0, 4.0));
        assert!(bounds(&[]).is_none());
    }
}
