use crate::math::{cross_2d, points_coincide, Point2, TOLERANCE};

/// An ordered polyline in 2D, open or closed.
///
/// Used for every parameter-space curve the engine produces. The order of
/// `points` is the traversal order of the generating edge, so a caller can
/// evaluate the points through a surface and get a continuous path. For closed
/// polylines, the last point connects back to the first; the closing point is
/// not repeated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pline {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl Pline {
    /// Creates an open polyline.
    #[must_use]
    pub fn open(points: Vec<Point2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Creates a closed polyline (ring).
    ///
    /// A trailing point equal to the first one is dropped.
    #[must_use]
    pub fn closed(mut points: Vec<Point2>) -> Self {
        if points.len() > 1 && points_coincide(&points[0], &points[points.len() - 1]) {
            points.pop();
        }
        Self {
            points,
            closed: true,
        }
    }

    /// Creates an empty open polyline ("nothing to draw").
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the polyline has no drawable segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.len() < 2
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.points.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Returns the `i`-th segment as `(start, end)`.
    #[must_use]
    pub fn segment(&self, i: usize) -> (Point2, Point2) {
        let n = self.points.len();
        (self.points[i], self.points[(i + 1) % n])
    }

    /// First point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Last point along the traversal. For a closed polyline this is the
    /// first point again.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        if self.closed {
            self.points.first()
        } else {
            self.points.last()
        }
    }

    /// Returns the points along the traversal, repeating the first point at
    /// the end for closed polylines.
    #[must_use]
    pub fn traversal(&self) -> Vec<Point2> {
        let mut pts = self.points.clone();
        if self.closed {
            if let Some(&first) = self.points.first() {
                pts.push(first);
            }
        }
        pts
    }

    /// Total length of the polyline.
    #[must_use]
    pub fn length(&self) -> f64 {
        (0..self.segment_count())
            .map(|i| {
                let (a, b) = self.segment(i);
                (b - a).norm()
            })
            .sum()
    }

    /// Returns the point at the given fraction of the arc length, clamped to
    /// `[0, 1]`. Returns `None` for a polyline without points.
    #[must_use]
    pub fn interpolate(&self, fraction: f64) -> Option<Point2> {
        let first = *self.points.first()?;
        let total = self.length();
        if total < TOLERANCE {
            return Some(first);
        }

        let mut remaining = fraction.clamp(0.0, 1.0) * total;
        for i in 0..self.segment_count() {
            let (a, b) = self.segment(i);
            let seg_len = (b - a).norm();
            if remaining <= seg_len {
                if seg_len < TOLERANCE {
                    return Some(a);
                }
                return Some(a + (b - a) * (remaining / seg_len));
            }
            remaining -= seg_len;
        }
        self.last().copied()
    }

    /// Returns a new polyline with points in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self {
            points,
            closed: self.closed,
        }
    }

    /// Removes consecutive duplicate points (and the wrap-around duplicate for
    /// closed polylines).
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        let mut points: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if points.last().is_some_and(|q| points_coincide(p, q)) {
                continue;
            }
            points.push(*p);
        }
        if self.closed {
            while points.len() > 1 && points_coincide(&points[0], &points[points.len() - 1]) {
                points.pop();
            }
        }
        Self {
            points,
            closed: self.closed,
        }
    }

    /// Removes duplicates and zero-width spikes (a vertex where the path turns
    /// straight back on itself).
    ///
    /// Spikes appear when a ring is assembled from edges of which one has
    /// collapsed onto another.
    #[must_use]
    pub fn without_spikes(&self) -> Self {
        let mut points = self.deduplicated().points;
        loop {
            let before = points.len();
            remove_vertices(&mut points, self.closed, is_spike);
            dedup_in_place(&mut points, self.closed);
            if points.len() == before {
                break;
            }
        }
        Self {
            points,
            closed: self.closed,
        }
    }

    /// Removes duplicates, spikes and interior collinear vertices, leaving only
    /// the corners of the shape.
    #[must_use]
    pub fn simplified(&self) -> Self {
        let mut points = self.without_spikes().points;
        remove_vertices(&mut points, self.closed, |prev, cur, next| {
            let d0 = cur - prev;
            let d1 = next - cur;
            cross_2d(&d0, &d1).abs() < TOLERANCE * d0.norm().max(d1.norm())
        });
        Self {
            points,
            closed: self.closed,
        }
    }
}

/// A vertex where the incoming and outgoing directions are collinear and
/// opposed.
fn is_spike(prev: &Point2, cur: &Point2, next: &Point2) -> bool {
    let d0 = cur - prev;
    let d1 = next - cur;
    let scale = d0.norm().max(d1.norm());
    cross_2d(&d0, &d1).abs() < TOLERANCE * scale && d0.dot(&d1) < 0.0
}

/// Removes every interior (or, for rings, every) vertex matching `remove`,
/// re-checking neighbours after each removal.
fn remove_vertices<F>(points: &mut Vec<Point2>, closed: bool, remove: F)
where
    F: Fn(&Point2, &Point2, &Point2) -> bool,
{
    let mut i = if closed { 0 } else { 1 };
    while points.len() > 2 {
        let n = points.len();
        let last = if closed { n } else { n - 1 };
        if i >= last {
            break;
        }
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        if remove(&prev, &points[i], &next) {
            points.remove(i);
            // Step back: the previous vertex may have become removable.
            i = i.saturating_sub(1).max(usize::from(!closed));
        } else {
            i += 1;
        }
    }
}

fn dedup_in_place(points: &mut Vec<Point2>, closed: bool) {
    points.dedup_by(|a, b| points_coincide(a, b));
    if closed {
        while points.len() > 1 && points_coincide(&points[0], &points[points.len() - 1]) {
            points.pop();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn closed_drops_repeated_end_point() {
        let ring = Pline::closed(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)]);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.segment_count(), 3);
    }

    #[test]
    fn segment_count_small() {
        assert_eq!(Pline::empty().segment_count(), 0);
        assert_eq!(Pline::open(vec![p(0.0, 0.0)]).segment_count(), 0);
        assert!(Pline::open(vec![p(0.0, 0.0)]).is_empty());
    }

    #[test]
    fn traversal_repeats_first_point_for_rings() {
        let ring = Pline::closed(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        let t = ring.traversal();
        assert_eq!(t.len(), 4);
        assert_eq!(t[0], t[3]);
        assert_eq!(ring.last(), ring.first());
    }

    #[test]
    fn length_of_open_and_closed() {
        let pts = vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)];
        assert_relative_eq!(Pline::open(pts.clone()).length(), 7.0);
        assert_relative_eq!(Pline::closed(pts).length(), 12.0);
    }

    #[test]
    fn interpolate_along_length() {
        let line = Pline::open(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)]);
        let mid = line.interpolate(0.5).unwrap();
        assert_relative_eq!(mid.x, 2.0);
        assert_relative_eq!(mid.y, 0.0);
        let q = line.interpolate(0.75).unwrap();
        assert_relative_eq!(q.x, 2.0);
        assert_relative_eq!(q.y, 1.0);
        assert_eq!(line.interpolate(2.0).unwrap(), p(2.0, 2.0));
        assert!(Pline::empty().interpolate(0.5).is_none());
    }

    #[test]
    fn reversed_keeps_closedness() {
        let line = Pline::open(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        let rev = line.reversed();
        assert_eq!(rev.points[0], p(1.0, 1.0));
        assert_eq!(rev.points[2], p(0.0, 0.0));
        assert!(!rev.closed);
    }

    #[test]
    fn deduplicated_removes_repeats() {
        let line = Pline::open(vec![p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0)]);
        assert_eq!(line.deduplicated().len(), 2);
    }

    #[test]
    fn spikes_are_removed() {
        // Ring with a zero-width spike up to (0, 3) along the left edge.
        let ring = Pline::closed(vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(0.0, 1.0),
            p(0.0, 2.0),
            p(0.0, 3.0),
            p(0.0, 2.0),
            p(0.0, 1.0),
        ]);
        let clean = ring.without_spikes().simplified();
        assert_eq!(
            clean.points,
            vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(0.0, 1.0)]
        );
    }

    #[test]
    fn simplified_keeps_corners_only() {
        let ring = Pline::closed(vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 1.0),
        ]);
        let s = ring.simplified();
        assert_eq!(
            s.points,
            vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]
        );
    }

    #[test]
    fn simplified_open_keeps_endpoints() {
        let line = Pline::open(vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]);
        assert_eq!(line.simplified().points, vec![p(0.0, 0.0), p(2.0, 0.0)]);
    }
}
