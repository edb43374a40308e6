use super::{cross_2d, Point2, TOLERANCE};

/// Result of intersecting two bounded 2D segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments meet in a single point.
    ///
    /// `t` is the parameter on the first segment and `u` the parameter on the
    /// second, both in `[0, 1]`.
    Point { point: Point2, t: f64, u: f64 },
    /// The segments are collinear and share the sub-range `[t0, t1]` of the
    /// first segment (`t0 < t1`).
    Overlap { t0: f64, t1: f64 },
}

/// Bounded segment-segment intersection in 2D.
///
/// Endpoint touches are reported. Collinear segments sharing more than a
/// point are reported as [`SegmentIntersection::Overlap`].
#[must_use]
pub fn segment_intersection_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<SegmentIntersection> {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.norm();
    let len_b = db.norm();
    if len_a < TOLERANCE || len_b < TOLERANCE {
        return None;
    }

    let cross = cross_2d(&da, &db);
    let offset = b0 - a0;

    if cross.abs() < TOLERANCE * len_a * len_b {
        // Parallel: only collinear segments can meet.
        if cross_2d(&da, &offset).abs() > TOLERANCE * len_a {
            return None;
        }
        return collinear_overlap(a0, a1, b0, b1);
    }

    let t = cross_2d(&offset, &db) / cross;
    let u = cross_2d(&offset, &da) / cross;

    // Use a length-scaled epsilon to include endpoints.
    let eps_t = TOLERANCE / len_a;
    let eps_u = TOLERANCE / len_b;
    if t >= -eps_t && t <= 1.0 + eps_t && u >= -eps_u && u <= 1.0 + eps_u {
        let t = t.clamp(0.0, 1.0);
        Some(SegmentIntersection::Point {
            point: a0 + da * t,
            t,
            u: u.clamp(0.0, 1.0),
        })
    } else {
        None
    }
}

/// Overlap of two collinear segments, expressed on the first segment.
fn collinear_overlap(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<SegmentIntersection> {
    let da = a1 - a0;
    let len_sq = da.norm_squared();
    let tb0 = (b0 - a0).dot(&da) / len_sq;
    let tb1 = (b1 - a0).dot(&da) / len_sq;

    let lo = tb0.min(tb1).max(0.0);
    let hi = tb0.max(tb1).min(1.0);
    let eps = TOLERANCE / len_sq.sqrt();

    if hi < lo - eps {
        return None;
    }
    if hi - lo <= eps {
        // Collinear touch at a single point.
        let t = lo.clamp(0.0, 1.0);
        let point = a0 + da * t;
        let db = b1 - b0;
        let u = ((point - b0).dot(&db) / db.norm_squared()).clamp(0.0, 1.0);
        return Some(SegmentIntersection::Point { point, t, u });
    }
    Some(SegmentIntersection::Overlap { t0: lo, t1: hi })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_segment_crossing() {
        let hit = segment_intersection_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0));
        let Some(SegmentIntersection::Point { point, t, u }) = hit else {
            panic!("expected a point, got {hit:?}");
        };
        assert!((point.x - 1.0).abs() < TOLERANCE);
        assert!((point.y - 1.0).abs() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn segment_segment_no_crossing() {
        let hit = segment_intersection_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn endpoint_touch_is_reported() {
        // Second segment starts on the interior of the first.
        let hit = segment_intersection_2d(&p(0.0, 0.0), &p(4.0, 0.0), &p(1.0, 0.0), &p(1.0, 3.0));
        let Some(SegmentIntersection::Point { t, u, .. }) = hit else {
            panic!("expected a point, got {hit:?}");
        };
        assert!((t - 0.25).abs() < TOLERANCE);
        assert!(u.abs() < TOLERANCE);
    }

    #[test]
    fn collinear_overlap_range() {
        let hit = segment_intersection_2d(&p(0.0, 0.0), &p(4.0, 0.0), &p(3.0, 0.0), &p(1.0, 0.0));
        let Some(SegmentIntersection::Overlap { t0, t1 }) = hit else {
            panic!("expected an overlap, got {hit:?}");
        };
        assert!((t0 - 0.25).abs() < TOLERANCE);
        assert!((t1 - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_disjoint() {
        let hit = segment_intersection_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), &p(3.0, 0.0));
        assert!(hit.is_none());
    }

    #[test]
    fn collinear_end_to_end_touch() {
        let hit = segment_intersection_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 0.0), &p(3.0, 0.0));
        let Some(SegmentIntersection::Point { t, u, .. }) = hit else {
            panic!("expected a point, got {hit:?}");
        };
        assert!((t - 1.0).abs() < TOLERANCE);
        assert!(u.abs() < TOLERANCE);
    }

    #[test]
    fn parallel_offset_lines_do_not_meet() {
        let hit = segment_intersection_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 0.5), &p(1.0, 0.5));
        assert!(hit.is_none());
    }
}
