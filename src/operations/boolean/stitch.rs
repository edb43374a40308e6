use tracing::warn;

use crate::error::{OperationError, Result};
use crate::geometry::pline::Pline;
use crate::geometry::polygon::Polygon;
use crate::math::polygon_2d::{point_on_ring, ring_contains, signed_area};
use crate::math::TOLERANCE;

/// Stitches kept fragments back into closed rings by matching endpoints.
///
/// Closed fragments pass through unchanged. Open fragments are chained
/// greedily: each chain end picks the closest unused fragment whose start
/// coincides with it.
///
/// # Errors
///
/// Returns `OperationError::Failed` if a chain cannot be closed.
pub fn connect(fragments: &[Pline]) -> Result<Vec<Pline>> {
    let mut rings = Vec::new();
    let mut open: Vec<&Pline> = Vec::new();
    for fragment in fragments {
        if fragment.closed {
            rings.push(fragment.clone());
        } else if !fragment.is_empty() {
            open.push(fragment);
        }
    }

    let n = open.len();
    let mut used = vec![false; n];
    let tol_sq = TOLERANCE * TOLERANCE;

    for start in 0..n {
        if used[start] {
            continue;
        }
        used[start] = true;
        let mut chain = open[start].points.clone();

        loop {
            let (Some(first), Some(end)) = (chain.first().copied(), chain.last().copied()) else {
                break;
            };
            if chain.len() > 2 && (end - first).norm_squared() < tol_sq {
                break;
            }

            let mut best: Option<usize> = None;
            let mut best_dist_sq = tol_sq;
            for (candidate, fragment) in open.iter().enumerate() {
                if used[candidate] {
                    continue;
                }
                let dist_sq = (fragment.points[0] - end).norm_squared();
                if dist_sq < best_dist_sq {
                    best_dist_sq = dist_sq;
                    best = Some(candidate);
                }
            }

            let Some(next) = best else {
                return Err(OperationError::Failed(format!(
                    "boolean fragment chain ending at ({}, {}) does not close",
                    end.x, end.y
                ))
                .into());
            };
            used[next] = true;
            chain.extend_from_slice(&open[next].points[1..]);
        }

        rings.push(Pline::closed(chain));
    }

    Ok(rings)
}

/// Sorts stitched rings into polygons: counter-clockwise rings become
/// exteriors, clockwise rings become holes of the smallest exterior that
/// contains them.
#[must_use]
pub fn assemble(rings: Vec<Pline>) -> Vec<Polygon> {
    let mut exteriors: Vec<(Pline, f64)> = Vec::new();
    let mut holes: Vec<Pline> = Vec::new();

    for ring in rings {
        let ring = ring.without_spikes();
        let area = signed_area(&ring.points);
        if ring.len() < 3 || area.abs() < TOLERANCE {
            warn!(points = ring.len(), area, "dropping boolean ring collapsed below tolerance");
            continue;
        }
        if area > 0.0 {
            exteriors.push((ring, area));
        } else {
            holes.push(ring);
        }
    }

    let mut assigned: Vec<Vec<Pline>> = vec![Vec::new(); exteriors.len()];
    for hole in holes {
        let owner = exteriors
            .iter()
            .enumerate()
            .filter(|(_, (ext, _))| hole_inside(&hole, ext))
            .min_by(|a, b| a.1 .1.total_cmp(&b.1 .1))
            .map(|(i, _)| i);
        match owner {
            Some(i) => assigned[i].push(hole),
            None => warn!(points = hole.len(), "dropping boolean hole outside every exterior"),
        }
    }

    exteriors
        .into_iter()
        .zip(assigned)
        .map(|((ext, _), holes)| Polygon::from_oriented(ext, holes))
        .collect()
}

/// A hole belongs to an exterior if any of its vertices off the exterior's
/// boundary is contained in it.
fn hole_inside(hole: &Pline, exterior: &Pline) -> bool {
    hole.points
        .iter()
        .find(|p| !point_on_ring(p, &exterior.points))
        .is_some_and(|p| ring_contains(p, &exterior.points))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn fragments_chain_into_ring() {
        let fragments = vec![
            Pline::open(vec![p(0.0, 0.0), p(2.0, 0.0)]),
            Pline::open(vec![p(2.0, 2.0), p(0.0, 2.0), p(0.0, 0.0)]),
            Pline::open(vec![p(2.0, 0.0), p(2.0, 2.0)]),
        ];
        let rings = connect(&fragments).unwrap();
        assert_eq!(rings.len(), 1);
        assert!(rings[0].closed);
        assert_eq!(rings[0].len(), 4);
    }

    #[test]
    fn dangling_chain_fails() {
        let fragments = vec![Pline::open(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)])];
        assert!(connect(&fragments).is_err());
    }

    #[test]
    fn clockwise_ring_becomes_hole() {
        let outer = Pline::closed(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]);
        let hole = Pline::closed(vec![p(1.0, 1.0), p(1.0, 2.0), p(2.0, 2.0), p(2.0, 1.0)]);
        let polys = assemble(vec![hole, outer]);
        assert_eq!(polys.len(), 1);
        assert_eq!(polys[0].holes().len(), 1);
        assert_relative_eq!(polys[0].area(), 15.0);
    }

    #[test]
    fn flat_ring_is_dropped() {
        let flat = Pline::closed(vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]);
        assert!(assemble(vec![flat]).is_empty());
    }
}
