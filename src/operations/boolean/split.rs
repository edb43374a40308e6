use crate::geometry::pline::Pline;
use crate::math::intersect_2d::{segment_intersection_2d, SegmentIntersection};
use crate::math::{points_coincide, Point2};

/// Which operand a fragment comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSource {
    A,
    B,
}

/// A piece of a chain between two consecutive cut parameters.
///
/// Parameters are global: `k + t` addresses the point at fraction `t` of
/// segment `k`. For the wrap-around piece of a closed chain, `end` exceeds the
/// segment count.
#[derive(Debug, Clone)]
pub struct ChainPiece {
    pub pline: Pline,
    pub start: f64,
    pub end: f64,
}

/// Collects the parameters along `chain` where it meets any segment of
/// `cutters`, sorted and without duplicates.
///
/// Crossings, endpoint touches and both ends of collinear overlaps are all
/// reported. For closed chains, parameters are normalized to
/// `[0, segment_count)`.
#[must_use]
pub fn cut_parameters(chain: &Pline, cutters: &[&Pline]) -> Vec<f64> {
    let n_segs = chain.segment_count();
    if n_segs == 0 {
        return Vec::new();
    }

    let mut params = Vec::new();
    for i in 0..n_segs {
        let (a0, a1) = chain.segment(i);
        #[allow(clippy::cast_precision_loss)]
        let base = i as f64;
        for cutter in cutters {
            for j in 0..cutter.segment_count() {
                let (b0, b1) = cutter.segment(j);
                match segment_intersection_2d(&a0, &a1, &b0, &b1) {
                    Some(SegmentIntersection::Point { t, .. }) => params.push(base + t),
                    Some(SegmentIntersection::Overlap { t0, t1 }) => {
                        params.push(base + t0);
                        params.push(base + t1);
                    }
                    None => {}
                }
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let total = n_segs as f64;
    if chain.closed {
        for s in &mut params {
            if *s >= total {
                *s -= total;
            }
        }
    }
    params.sort_by(f64::total_cmp);

    // Merge parameters that address the same point.
    let mut unique: Vec<f64> = Vec::with_capacity(params.len());
    for s in params {
        let p = point_at(chain, s);
        if unique
            .last()
            .is_some_and(|&prev| points_coincide(&point_at(chain, prev), &p))
        {
            continue;
        }
        unique.push(s);
    }
    if chain.closed && unique.len() > 1 {
        let first = point_at(chain, unique[0]);
        if unique
            .last()
            .is_some_and(|&last| points_coincide(&point_at(chain, last), &first))
        {
            unique.pop();
        }
    }
    unique
}

/// Slices `chain` at the given sorted cut parameters.
///
/// Open chains always yield pieces covering `[0, segment_count]`. A closed
/// chain without cuts yields itself as a single closed piece.
#[must_use]
pub fn slice(chain: &Pline, cuts: &[f64]) -> Vec<ChainPiece> {
    let n_segs = chain.segment_count();
    if n_segs == 0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let total = n_segs as f64;

    if chain.closed {
        if cuts.is_empty() {
            return vec![ChainPiece {
                pline: chain.clone(),
                start: 0.0,
                end: total,
            }];
        }
        let m = cuts.len();
        return (0..m)
            .map(|k| {
                let start = cuts[k];
                let end = if k + 1 < m { cuts[k + 1] } else { cuts[0] + total };
                ChainPiece {
                    pline: sub_chain(chain, start, end),
                    start,
                    end,
                }
            })
            .filter(|piece| !piece.pline.is_empty())
            .collect();
    }

    let mut bounds = Vec::with_capacity(cuts.len() + 2);
    bounds.push(0.0);
    bounds.extend(cuts.iter().copied().filter(|&s| s > 0.0 && s < total));
    bounds.push(total);
    bounds.dedup_by(|a, b| points_coincide(&point_at(chain, *a), &point_at(chain, *b)));
    if bounds.len() == 1 {
        // Chain of zero length.
        return Vec::new();
    }
    if let Some(last) = bounds.last_mut() {
        *last = total;
    }

    bounds
        .windows(2)
        .map(|w| ChainPiece {
            pline: sub_chain(chain, w[0], w[1]),
            start: w[0],
            end: w[1],
        })
        .filter(|piece| !piece.pline.is_empty())
        .collect()
}

/// Point at global parameter `s`. Closed chains wrap around.
#[must_use]
pub fn point_at(chain: &Pline, s: f64) -> Point2 {
    let n_segs = chain.segment_count();
    if n_segs == 0 {
        return chain.first().copied().unwrap_or_else(Point2::origin);
    }
    #[allow(clippy::cast_precision_loss)]
    let total = n_segs as f64;
    let s = if chain.closed { s.rem_euclid(total) } else { s.clamp(0.0, total) };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seg = (s.floor() as usize).min(n_segs - 1);
    #[allow(clippy::cast_precision_loss)]
    let t = s - seg as f64;
    let (a, b) = chain.segment(seg);
    a + (b - a) * t
}

/// Open sub-chain between parameters `start < end`, following the chain's
/// traversal (and wrapping once for closed chains).
fn sub_chain(chain: &Pline, start: f64, end: f64) -> Pline {
    let n = chain.len();
    let mut points = vec![point_at(chain, start)];

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let first_vertex = start.floor() as usize + 1;
    let mut k = first_vertex;
    loop {
        #[allow(clippy::cast_precision_loss)]
        let s = k as f64;
        if s >= end {
            break;
        }
        points.push(chain.points[k % n]);
        k += 1;
    }

    points.push(point_at(chain, end));
    Pline::open(points).deduplicated()
}
