use crate::error::{OperationError, Result};
use crate::math::polygon_2d::{is_simple_ring, signed_area};

use super::pline::Pline;

/// A planar region: one counter-clockwise exterior ring and zero or more
/// clockwise holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Pline,
    holes: Vec<Pline>,
}

impl Polygon {
    /// Creates a polygon without holes from a simple closed ring.
    ///
    /// The ring is re-oriented counter-clockwise if needed.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the ring has fewer than three
    /// distinct points, zero area, or self-intersects.
    pub fn new(ring: Pline) -> Result<Self> {
        Self::with_holes(ring, Vec::new())
    }

    /// Creates a polygon with holes.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if any ring is not simple.
    pub fn with_holes(exterior: Pline, holes: Vec<Pline>) -> Result<Self> {
        let exterior = validated_ring(exterior, "exterior")?;
        let holes = holes
            .into_iter()
            .map(|h| validated_ring(h, "hole"))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_oriented(exterior, holes))
    }

    /// Builds a polygon from rings without validation, fixing orientation only.
    pub(crate) fn from_oriented(exterior: Pline, holes: Vec<Pline>) -> Self {
        let exterior = oriented(exterior, true);
        let holes = holes.into_iter().map(|h| oriented(h, false)).collect();
        Self { exterior, holes }
    }

    /// Returns the counter-clockwise exterior ring.
    #[must_use]
    pub fn exterior(&self) -> &Pline {
        &self.exterior
    }

    /// Returns the clockwise hole rings.
    #[must_use]
    pub fn holes(&self) -> &[Pline] {
        &self.holes
    }

    /// Iterates over all boundary rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &Pline> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    /// Returns the enclosed area (exterior minus holes).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.rings().map(|r| signed_area(&r.points)).sum()
    }
}

fn validated_ring(ring: Pline, what: &str) -> Result<Pline> {
    let ring = Pline::closed(ring.points).deduplicated();
    if ring.len() < 3 {
        return Err(OperationError::InvalidInput(format!(
            "{what} ring needs at least 3 distinct points, got {}",
            ring.len()
        ))
        .into());
    }
    if signed_area(&ring.points).abs() < crate::math::TOLERANCE {
        return Err(OperationError::InvalidInput(format!("{what} ring has zero area")).into());
    }
    if !is_simple_ring(&ring.points) {
        return Err(OperationError::InvalidInput(format!("{what} ring self-intersects")).into());
    }
    Ok(ring)
}

fn oriented(ring: Pline, ccw: bool) -> Pline {
    let is_ccw = signed_area(&ring.points) > 0.0;
    let ring = Pline::closed(ring.points);
    if is_ccw == ccw {
        ring
    } else {
        ring.reversed()
    }
}
