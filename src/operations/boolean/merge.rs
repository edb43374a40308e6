use tracing::warn;

use crate::geometry::pline::Pline;
use crate::math::{points_coincide, Point2, TOLERANCE};

use super::split::{point_at, ChainPiece};

/// Joins consecutive kept pieces of one chain into maximal runs.
///
/// `pieces` must come from slicing `chain`, in order. Two kept pieces join
/// only when the first one ends where the second one starts. Runs keep the
/// chain's traversal order; on a closed chain a run may continue across the
/// seam, and the output then starts with the run that begins first after a
/// break. A closed chain whose pieces are all kept and joined comes back
/// unchanged.
#[must_use]
pub fn merge_kept(chain: &Pline, pieces: &[ChainPiece], keep: &[bool]) -> Vec<Pline> {
    let m = pieces.len();
    if m == 0 {
        return Vec::new();
    }
    // A run breaks before piece `k` if it is the first piece of an open
    // chain, or its predecessor is dropped or does not end where it starts.
    let breaks_before = |k: usize| {
        if k == 0 && !chain.closed {
            return true;
        }
        let prev = (k + m - 1) % m;
        !keep[prev] || !joins(chain, &pieces[prev], &pieces[k])
    };

    let start = if chain.closed {
        match (0..m).find(|&k| keep[k] && breaks_before(k)) {
            Some(k) => k,
            None if keep.iter().all(|&k| k) => return vec![chain.clone()],
            None => 0,
        }
    } else {
        0
    };

    let mut runs = Vec::new();
    let mut current: Vec<Point2> = Vec::new();
    for offset in 0..m {
        let k = (start + offset) % m;
        if keep[k] {
            if !current.is_empty() && breaks_before(k) {
                push_run(&mut runs, std::mem::take(&mut current));
            }
            let pts = &pieces[k].pline.points;
            let skip = usize::from(!current.is_empty());
            current.extend(pts.iter().skip(skip).copied());
        } else if !current.is_empty() {
            push_run(&mut runs, std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        push_run(&mut runs, current);
    }
    runs
}

fn joins(chain: &Pline, prev: &ChainPiece, next: &ChainPiece) -> bool {
    points_coincide(&point_at(chain, prev.end), &point_at(chain, next.start))
}

fn push_run(runs: &mut Vec<Pline>, points: Vec<Point2>) {
    let run = Pline::open(points).deduplicated();
    if run.is_empty() || run.length() < TOLERANCE {
        warn!(points = run.len(), "dropping clip piece collapsed below tolerance");
        return;
    }
    runs.push(run);
}
