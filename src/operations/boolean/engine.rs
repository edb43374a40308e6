use tracing::trace;

use crate::error::Result;
use crate::geometry::pline::Pline;
use crate::geometry::polygon::Polygon;

use super::classify::{classify_fragment, classify_piece};
use super::merge::merge_kept;
use super::select::{keeps_curve_piece, should_keep_fragment, BooleanOp, ClipOp, KeepDecision};
use super::split::{cut_parameters, slice, RegionSource};
use super::stitch::{assemble, connect};

/// Executes a boolean operation on two regions.
///
/// Orchestrates the full pipeline: boundary splitting, fragment
/// classification, selection and ring assembly.
pub fn boolean_execute(a: &Polygon, b: &Polygon, op: BooleanOp) -> Result<Vec<Polygon>> {
    let rings_a: Vec<&Pline> = a.rings().collect();
    let rings_b: Vec<&Pline> = b.rings().collect();

    let mut kept: Vec<Pline> = Vec::new();
    for (source, rings, cutters, other) in [
        (RegionSource::A, &rings_a, &rings_b, b),
        (RegionSource::B, &rings_b, &rings_a, a),
    ] {
        for ring in rings {
            let cuts = cut_parameters(ring, cutters);
            let pieces = slice(ring, &cuts);
            trace!(?source, cuts = cuts.len(), pieces = pieces.len(), "split boundary ring");

            for piece in pieces {
                let class = classify_fragment(&piece.pline, other);
                match should_keep_fragment(source, class, op) {
                    KeepDecision::Keep => kept.push(piece.pline),
                    KeepDecision::KeepFlipped => kept.push(piece.pline.reversed()),
                    KeepDecision::Discard => {}
                }
            }
        }
    }

    let rings = connect(&kept)?;
    let result = assemble(rings);
    trace!(?op, fragments = kept.len(), polygons = result.len(), "assembled boolean result");
    Ok(result)
}

/// Clips a curve against a region, preserving the curve's traversal order.
#[must_use]
pub fn clip_execute(curve: &Pline, region: &Polygon, op: ClipOp) -> Vec<Pline> {
    if curve.is_empty() {
        return Vec::new();
    }
    let cutters: Vec<&Pline> = region.rings().collect();
    let cuts = cut_parameters(curve, &cutters);
    let pieces = slice(curve, &cuts);
    let keep: Vec<bool> = pieces
        .iter()
        .map(|piece| keeps_curve_piece(classify_piece(&piece.pline, region), op))
        .collect();
    trace!(
        ?op,
        cuts = cuts.len(),
        pieces = pieces.len(),
        kept = keep.iter().filter(|&&k| k).count(),
        "clipped curve"
    );
    merge_kept(curve, &pieces, &keep)
}
