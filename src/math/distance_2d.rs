use super::Point2;

/// Returns the minimum distance from point `p` to the segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let (closest, _) = closest_on_segment(p, a, b);
    (p - closest).norm()
}

/// Returns the closest point to `p` on the segment `a`→`b` and its
/// parameter `t` in `[0, 1]`.
#[must_use]
pub fn closest_on_segment(p: &Point2, a: &Point2, b: &Point2) -> (Point2, f64) {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (*a, 0.0);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (a + d * t, t)
}

/// Returns the minimum distance from `p` to any segment of the point chain.
///
/// When `closed` is set, the segment from the last point back to the first is
/// included. Returns `f64::MAX` for an empty chain.
#[must_use]
pub fn point_to_chain_dist(p: &Point2, points: &[Point2], closed: bool) -> f64 {
    match points.len() {
        0 => f64::MAX,
        1 => (p - points[0]).norm(),
        n => {
            let seg_count = if closed { n } else { n - 1 };
            (0..seg_count)
                .map(|i| point_to_segment_dist(p, &points[i], &points[(i + 1) % n]))
                .fold(f64::MAX, f64::min)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = point_to_segment_dist(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = point_to_segment_dist(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_on_segment() {
        let d = point_to_segment_dist(&p(1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let d = point_to_segment_dist(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn closest_parameter_is_clamped() {
        let (c, t) = closest_on_segment(&p(5.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((t - 1.0).abs() < TOL);
        assert!((c.x - 2.0).abs() < TOL);
    }

    #[test]
    fn chain_dist_closed_includes_wrap_segment() {
        let square = [p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        // (-0.5, 1) is nearest to the closing edge (0,2)→(0,0).
        let open = point_to_chain_dist(&p(-0.5, 1.0), &square, false);
        let closed = point_to_chain_dist(&p(-0.5, 1.0), &square, true);
        assert!((closed - 0.5).abs() < TOL, "closed={closed}");
        assert!(open > closed);
    }

    #[test]
    fn chain_dist_empty() {
        assert_eq!(point_to_chain_dist(&p(0.0, 0.0), &[], true), f64::MAX);
    }
}
