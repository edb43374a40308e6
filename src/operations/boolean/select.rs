use super::classify::{Facing, FragmentClass, PointClassification};
use super::split::RegionSource;

/// The type of region boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

/// The type of curve-against-region clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOp {
    /// Keep what lies strictly outside the region.
    Difference,
    /// Keep what lies inside the region or on its boundary.
    Intersection,
}

/// Decision about whether to keep a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepDecision {
    Keep,
    KeepFlipped,
    Discard,
}

/// Determines whether a boundary fragment should be kept based on its
/// classification relative to the other region and the boolean operation.
///
/// | Fragment | vs other region  | Union   | Subtract(A-B) | Intersect |
/// |----------|------------------|---------|---------------|-----------|
/// | from A   | OUTSIDE B        | keep    | keep          | discard   |
/// | from A   | INSIDE B         | discard | discard       | keep      |
/// | from A   | ON B, same side  | keep    | discard       | keep      |
/// | from A   | ON B, opposite   | discard | keep          | discard   |
/// | from B   | OUTSIDE A        | keep    | discard       | discard   |
/// | from B   | INSIDE A         | discard | keep (flip)   | keep      |
/// | from B   | ON A             | discard | discard       | discard   |
#[allow(clippy::match_same_arms)]
#[must_use]
pub fn should_keep_fragment(
    source: RegionSource,
    classification: FragmentClass,
    op: BooleanOp,
) -> KeepDecision {
    use FragmentClass::{Inside, OnBoundary, Outside};

    match (source, classification, op) {
        // Fragment from A, classified vs B
        (RegionSource::A, Outside, BooleanOp::Union) => KeepDecision::Keep,
        (RegionSource::A, Outside, BooleanOp::Subtract) => KeepDecision::Keep,
        (RegionSource::A, Outside, BooleanOp::Intersect) => KeepDecision::Discard,

        (RegionSource::A, Inside, BooleanOp::Union) => KeepDecision::Discard,
        (RegionSource::A, Inside, BooleanOp::Subtract) => KeepDecision::Discard,
        (RegionSource::A, Inside, BooleanOp::Intersect) => KeepDecision::Keep,

        // Shared boundary: A's copy stands for both operands.
        (RegionSource::A, OnBoundary(Facing::Same), BooleanOp::Union) => KeepDecision::Keep,
        (RegionSource::A, OnBoundary(Facing::Same), BooleanOp::Subtract) => {
            KeepDecision::Discard
        }
        (RegionSource::A, OnBoundary(Facing::Same), BooleanOp::Intersect) => KeepDecision::Keep,
        (RegionSource::A, OnBoundary(Facing::Opposite), BooleanOp::Union) => {
            KeepDecision::Discard
        }
        (RegionSource::A, OnBoundary(Facing::Opposite), BooleanOp::Subtract) => {
            KeepDecision::Keep
        }
        (RegionSource::A, OnBoundary(Facing::Opposite), BooleanOp::Intersect) => {
            KeepDecision::Discard
        }

        // Fragment from B, classified vs A
        (RegionSource::B, Outside, BooleanOp::Union) => KeepDecision::Keep,
        (RegionSource::B, Outside, BooleanOp::Subtract) => KeepDecision::Discard,
        (RegionSource::B, Outside, BooleanOp::Intersect) => KeepDecision::Discard,

        (RegionSource::B, Inside, BooleanOp::Union) => KeepDecision::Discard,
        (RegionSource::B, Inside, BooleanOp::Subtract) => KeepDecision::KeepFlipped,
        (RegionSource::B, Inside, BooleanOp::Intersect) => KeepDecision::Keep,

        (RegionSource::B, OnBoundary(_), _) => KeepDecision::Discard,
    }
}

/// Determines whether a curve piece survives a clip.
///
/// Regions are closed sets: a piece running along the boundary belongs to the
/// region, so a difference drops it and an intersection keeps it.
#[must_use]
pub fn keeps_curve_piece(classification: PointClassification, op: ClipOp) -> bool {
    match op {
        ClipOp::Difference => classification == PointClassification::Outside,
        ClipOp::Intersection => classification != PointClassification::Outside,
    }
}
