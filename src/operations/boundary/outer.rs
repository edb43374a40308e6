use tracing::debug;

use crate::error::Result;
use crate::geometry::pline::Pline;
use crate::geometry::polygon::Polygon;
use crate::math::polygon_2d::signed_area;
use crate::math::{Point2, TOLERANCE};

use super::axis::{CutValues, SampledDomain};

/// Boundary curves of the outer region Σ: the domain rectangle with the
/// visible sector `[u_cut, u_max] × [v_cut, v_max]` notched out.
///
/// The cut values are merged into the sampled axes, so the notch corner and
/// every edge endpoint lie exactly on the cut lines.
#[derive(Debug, Clone)]
pub struct OuterBoundary {
    domain: SampledDomain,
    cut: CutValues,
    u: Vec<f64>,
    v: Vec<f64>,
}

impl OuterBoundary {
    /// Builds the boundary for a domain and cut.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if a cut value lies outside
    /// the domain.
    pub fn new(domain: SampledDomain, cut: CutValues) -> Result<Self> {
        cut.validate(&domain)?;
        let u = domain.u.with_value(cut.u_cut);
        let v = domain.v.with_value(cut.v_cut);
        Ok(Self { domain, cut, u, v })
    }

    #[must_use]
    pub fn domain(&self) -> &SampledDomain {
        &self.domain
    }

    #[must_use]
    pub fn cut(&self) -> CutValues {
        self.cut
    }

    /// The closed boundary of Σ, counter-clockwise, starting at the notch
    /// corner `(u_cut, v_cut)`.
    ///
    /// Traces up the cut line to `v_max`, left along `v_max` to `u_min`, down
    /// the left edge, right along `v_min`, up the right edge to `v_cut`, and
    /// back left along `v_cut`. Pieces that collapse when a cut sits on a
    /// domain bound are removed.
    #[must_use]
    pub fn sigma_ring(&self) -> Pline {
        let CutValues { u_cut, v_cut } = self.cut;
        let (u_min, u_max) = (self.domain.u.min(), self.domain.u.max());
        let (v_min, v_max) = (self.domain.v.min(), self.domain.v.max());

        let mut points: Vec<Point2> = Vec::new();
        points.extend(self.v.iter().filter(|&&v| v >= v_cut).map(|&v| Point2::new(u_cut, v)));
        points.extend(
            self.u
                .iter()
                .rev()
                .filter(|&&u| u <= u_cut)
                .map(|&u| Point2::new(u, v_max)),
        );
        points.extend(self.v.iter().rev().map(|&v| Point2::new(u_min, v)));
        points.extend(self.u.iter().map(|&u| Point2::new(u, v_min)));
        points.extend(self.v.iter().filter(|&&v| v <= v_cut).map(|&v| Point2::new(u_max, v)));
        points.extend(
            self.u
                .iter()
                .rev()
                .filter(|&&u| u >= u_cut)
                .map(|&u| Point2::new(u, v_cut)),
        );

        Pline::closed(points).without_spikes()
    }

    /// The outer region Σ as a polygon, or `None` when the notch covers the
    /// whole domain (`u_cut = u_min` and `v_cut = v_min`).
    #[must_use]
    pub fn sigma(&self) -> Option<Polygon> {
        let ring = self.sigma_ring();
        if ring.len() < 3 || signed_area(&ring.points).abs() < TOLERANCE {
            debug!(u_cut = self.cut.u_cut, v_cut = self.cut.v_cut, "outer region is empty");
            return None;
        }
        Some(Polygon::from_oriented(ring, Vec::new()))
    }

    /// Edge AC: the cut line `u = u_cut` for `v ≥ v_cut`, increasing `v`.
    ///
    /// Empty when `u_cut = u_min` (no material beside the cut).
    #[must_use]
    pub fn ac(&self) -> Pline {
        if self.cut.u_cut - self.domain.u.min() < TOLERANCE {
            return Pline::empty();
        }
        let v_cut = self.cut.v_cut;
        edge(self.v.iter().filter(|&&v| v >= v_cut).map(|&v| Point2::new(self.cut.u_cut, v)))
    }

    /// Edge CD: the top side `v = v_max` for `u ≤ u_cut`, decreasing `u`.
    #[must_use]
    pub fn cd(&self) -> Pline {
        let (u_cut, v_max) = (self.cut.u_cut, self.domain.v.max());
        edge(self.u.iter().rev().filter(|&&u| u <= u_cut).map(|&u| Point2::new(u, v_max)))
    }

    /// Edge FG: the right side `u = u_max` for `v ≤ v_cut`, increasing `v`.
    #[must_use]
    pub fn fg(&self) -> Pline {
        let (v_cut, u_max) = (self.cut.v_cut, self.domain.u.max());
        edge(self.v.iter().filter(|&&v| v <= v_cut).map(|&v| Point2::new(u_max, v)))
    }

    /// Edge GA: the cut line `v = v_cut` for `u ≥ u_cut`, decreasing `u`.
    ///
    /// Empty when `v_cut = v_min` (no material beside the cut).
    #[must_use]
    pub fn ga(&self) -> Pline {
        if self.cut.v_cut - self.domain.v.min() < TOLERANCE {
            return Pline::empty();
        }
        let u_cut = self.cut.u_cut;
        edge(self.u.iter().rev().filter(|&&u| u >= u_cut).map(|&u| Point2::new(u, self.cut.v_cut)))
    }

    /// The full iso-u line `u = u_cut`, increasing `v`.
    #[must_use]
    pub fn iso_u(&self) -> Pline {
        edge(self.v.iter().map(|&v| Point2::new(self.cut.u_cut, v)))
    }

    /// The full iso-v line `v = v_cut`, increasing `u`.
    #[must_use]
    pub fn iso_v(&self) -> Pline {
        edge(self.u.iter().map(|&u| Point2::new(u, self.cut.v_cut)))
    }
}

/// An open edge; fewer than two points means nothing to draw.
fn edge(points: impl Iterator<Item = Point2>) -> Pline {
    let pline = Pline::open(points.collect());
    if pline.is_empty() {
        Pline::empty()
    } else {
        pline
    }
}
