use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::curve::ClosedCurve;
use crate::geometry::pline::Pline;
use crate::geometry::polygon::Polygon;
use crate::math::polygon_2d::signed_area;
use crate::math::{points_coincide, Point2};
use crate::operations::boolean::RegionClip;
use crate::operations::boundary::{CutValues, OuterBoundary};

use super::iso::{sector_filter, Axis};

/// Every curve and region the cut-away drawing needs, in parameter space.
///
/// Curve pieces keep the traversal order of the edge they were cut from.
#[derive(Debug, Clone)]
pub struct VisibilitySet {
    /// The outer region Σ; `None` when the notch covers the whole domain.
    pub sigma: Option<Polygon>,
    /// The sub-region bounded by Γ.
    pub gamma: Polygon,
    /// Γ as a closed ring in the order it was sampled.
    pub gamma_outline: Pline,
    /// Γ − Σ: the silhouette of the sub-region seen through the notch.
    pub gamma_visible: Vec<Pline>,
    /// Γ ∩ Σ, the rest of Γ.
    pub gamma_hidden: Vec<Pline>,
    pub ac: Pline,
    pub cd: Pline,
    pub fg: Pline,
    pub ga: Pline,
    /// AC − Γ.
    pub bc: Vec<Pline>,
    /// GA − Γ.
    pub gh: Vec<Pline>,
    /// Pieces of the iso-u line outside Γ with `v ≤ v_cut`.
    pub iso_u_outside: Vec<Pline>,
    /// Pieces of the iso-v line outside Γ with `u ≤ u_cut`.
    pub iso_v_outside: Vec<Pline>,
    /// Iso-u line ∩ Γ.
    pub iso_u_inside: Vec<Pline>,
    /// Iso-v line ∩ Γ.
    pub iso_v_inside: Vec<Pline>,
    /// Σ − Γ: the upper face of the outer system.
    pub sigma_minus_gamma: Vec<Polygon>,
    /// ∂Σ − Γ: the border of that face not hidden by the sub-region.
    pub sigma_border: Vec<Pline>,
    /// Base points of the through-thickness lines at the outer corners.
    pub outer_fibers: Vec<Point2>,
    /// Base points of the through-thickness lines at the ends of Γ_visible.
    pub gamma_fibers: Vec<Point2>,
}

/// Splits the notched outer region and the sub-region outline Γ into visible
/// and hidden curve pieces.
///
/// Stateless apart from its validated inputs: every query recomputes its
/// result from Σ, Γ and the cut.
#[derive(Debug, Clone)]
pub struct VisibilityResolver {
    boundary: OuterBoundary,
    sigma: Option<Polygon>,
    gamma: Polygon,
    outline: Pline,
}

impl VisibilityResolver {
    /// Creates a resolver from the outer boundary and the sampled ring Γ.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if Γ is not a simple ring or
    /// leaves the domain rectangle.
    pub fn new(boundary: OuterBoundary, gamma: Pline) -> Result<Self> {
        if let Some(p) = gamma.points.iter().find(|p| !boundary.domain().contains(p)) {
            return Err(OperationError::InvalidInput(format!(
                "sub-region point ({}, {}) lies outside the domain",
                p.x, p.y
            ))
            .into());
        }
        let clockwise = signed_area(&gamma.points) < 0.0;
        let gamma = Polygon::new(gamma).map_err(|e| {
            OperationError::InvalidInput(format!("sub-region outline is not a simple ring: {e}"))
        })?;
        // The polygon is always counter-clockwise; curve queries follow the
        // caller's order.
        let outline = if clockwise {
            gamma.exterior().reversed()
        } else {
            gamma.exterior().clone()
        };
        let sigma = boundary.sigma();
        Ok(Self {
            boundary,
            sigma,
            gamma,
            outline,
        })
    }

    /// Creates a resolver sampling Γ from a closed curve at parameters `t`.
    ///
    /// # Errors
    ///
    /// See [`VisibilityResolver::new`].
    pub fn from_curve(boundary: OuterBoundary, curve: &dyn ClosedCurve, t: &[f64]) -> Result<Self> {
        Self::new(boundary, curve.sample_ring(t))
    }

    #[must_use]
    pub fn boundary(&self) -> &OuterBoundary {
        &self.boundary
    }

    #[must_use]
    pub fn sigma(&self) -> Option<&Polygon> {
        self.sigma.as_ref()
    }

    #[must_use]
    pub fn gamma(&self) -> &Polygon {
        &self.gamma
    }

    /// The ring Γ in sampling order, which may be clockwise.
    #[must_use]
    pub fn outline(&self) -> &Pline {
        &self.outline
    }

    /// Γ − Σ.
    #[must_use]
    pub fn gamma_visible(&self) -> Vec<Pline> {
        match &self.sigma {
            Some(sigma) => self.outline.difference(sigma),
            None => vec![self.outline.clone()],
        }
    }

    /// Γ ∩ Σ, which is Γ minus [`VisibilityResolver::gamma_visible`].
    #[must_use]
    pub fn gamma_hidden(&self) -> Vec<Pline> {
        match &self.sigma {
            Some(sigma) => self.outline.intersection(sigma),
            None => Vec::new(),
        }
    }

    /// BC = AC − Γ.
    #[must_use]
    pub fn bc(&self) -> Vec<Pline> {
        self.boundary.ac().difference(&self.gamma)
    }

    /// GH = GA − Γ.
    #[must_use]
    pub fn gh(&self) -> Vec<Pline> {
        self.boundary.ga().difference(&self.gamma)
    }

    /// Pieces of the iso-u line (`u = u_cut`) outside Γ that belong to the
    /// material below the cut, `v ≤ v_cut`.
    #[must_use]
    pub fn iso_u_outside(&self) -> Vec<Pline> {
        let pieces = self.boundary.iso_u().difference(&self.gamma);
        sector_filter(pieces, Axis::V, self.boundary.cut().v_cut)
    }

    /// Pieces of the iso-v line (`v = v_cut`) outside Γ with `u ≤ u_cut`.
    #[must_use]
    pub fn iso_v_outside(&self) -> Vec<Pline> {
        let pieces = self.boundary.iso_v().difference(&self.gamma);
        sector_filter(pieces, Axis::U, self.boundary.cut().u_cut)
    }

    /// Iso-u line ∩ Γ.
    #[must_use]
    pub fn iso_u_inside(&self) -> Vec<Pline> {
        self.boundary.iso_u().intersection(&self.gamma)
    }

    /// Iso-v line ∩ Γ.
    #[must_use]
    pub fn iso_v_inside(&self) -> Vec<Pline> {
        self.boundary.iso_v().intersection(&self.gamma)
    }

    /// Σ − Γ as regions.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::Failed` if the boolean result cannot be
    /// assembled.
    pub fn sigma_minus_gamma(&self) -> Result<Vec<Polygon>> {
        match &self.sigma {
            Some(sigma) => sigma.difference(&self.gamma),
            None => Ok(Vec::new()),
        }
    }

    /// ∂Σ − Γ.
    #[must_use]
    pub fn sigma_border(&self) -> Vec<Pline> {
        match &self.sigma {
            Some(sigma) => sigma.exterior().difference(&self.gamma),
            None => Vec::new(),
        }
    }

    /// Fiber base points at `(u_max, v_min)`, `(u_max, v_cut)`,
    /// `(u_cut, v_max)` and `(u_min, v_max)`, without repeats.
    #[must_use]
    pub fn outer_fibers(&self) -> Vec<Point2> {
        let domain = self.boundary.domain();
        let CutValues { u_cut, v_cut } = self.boundary.cut();
        unique_points([
            Point2::new(domain.u.max(), domain.v.min()),
            Point2::new(domain.u.max(), v_cut),
            Point2::new(u_cut, domain.v.max()),
            Point2::new(domain.u.min(), domain.v.max()),
        ])
    }

    /// Fiber base points at both ends of every open Γ_visible piece.
    #[must_use]
    pub fn gamma_fibers(gamma_visible: &[Pline]) -> Vec<Point2> {
        unique_points(
            gamma_visible
                .iter()
                .filter(|piece| !piece.closed)
                .flat_map(|piece| piece.first().into_iter().chain(piece.last()).copied()),
        )
    }

    /// Computes every output at once.
    ///
    /// # Errors
    ///
    /// Returns an error if Σ − Γ cannot be assembled.
    pub fn resolve(&self) -> Result<VisibilitySet> {
        let gamma_visible = self.gamma_visible();
        let gamma_fibers = Self::gamma_fibers(&gamma_visible);
        let set = VisibilitySet {
            sigma: self.sigma.clone(),
            gamma: self.gamma.clone(),
            gamma_outline: self.outline.clone(),
            gamma_hidden: self.gamma_hidden(),
            ac: self.boundary.ac(),
            cd: self.boundary.cd(),
            fg: self.boundary.fg(),
            ga: self.boundary.ga(),
            bc: self.bc(),
            gh: self.gh(),
            iso_u_outside: self.iso_u_outside(),
            iso_v_outside: self.iso_v_outside(),
            iso_u_inside: self.iso_u_inside(),
            iso_v_inside: self.iso_v_inside(),
            sigma_minus_gamma: self.sigma_minus_gamma()?,
            sigma_border: self.sigma_border(),
            outer_fibers: self.outer_fibers(),
            gamma_fibers,
            gamma_visible,
        };
        let cut = self.boundary.cut();
        debug!(
            u_cut = cut.u_cut,
            v_cut = cut.v_cut,
            gamma_visible = set.gamma_visible.len(),
            gamma_hidden = set.gamma_hidden.len(),
            bc = set.bc.len(),
            gh = set.gh.len(),
            iso_u = set.iso_u_outside.len(),
            iso_v = set.iso_v_outside.len(),
            "resolved visibility"
        );
        Ok(set)
    }
}

fn unique_points(points: impl IntoIterator<Item = Point2>) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::new();
    for p in points {
        if !out.iter().any(|q| points_coincide(q, &p)) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Ellipse, FnCurve};
    use crate::math::linspace;
    use crate::operations::boundary::SampledDomain;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn resolver(u_cut: f64, v_cut: f64) -> VisibilityResolver {
        let domain = SampledDomain::uniform((-15.0, 15.0), (-20.0, 20.0), (51, 51)).unwrap();
        let boundary = OuterBoundary::new(domain, CutValues::new(u_cut, v_cut)).unwrap();
        let ellipse = Ellipse::new(7.0, 10.0).unwrap();
        VisibilityResolver::from_curve(boundary, &ellipse, &linspace(0.0, TAU, 51)).unwrap()
    }

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn cut_edges_lose_the_part_inside_gamma() {
        let r = resolver(0.0, 0.0);

        let bc = r.bc();
        assert_eq!(bc.len(), 1);
        assert!(points_coincide(bc[0].last().unwrap(), &p(0.0, 20.0)));
        assert!(bc[0].first().unwrap().y > 9.9);

        let gh = r.gh();
        assert_eq!(gh.len(), 1);
        assert_eq!(gh[0].first(), Some(&p(15.0, 0.0)));
        assert!(points_coincide(gh[0].last().unwrap(), &p(7.0, 0.0)));
    }

    #[test]
    fn iso_lines_split_at_gamma() {
        let r = resolver(0.0, 0.0);

        let iso_u = r.iso_u_outside();
        assert_eq!(iso_u.len(), 1);
        assert_eq!(iso_u[0].first(), Some(&p(0.0, -20.0)));
        assert!(iso_u[0].points.iter().all(|q| q.y <= 0.0));

        let iso_v = r.iso_v_outside();
        assert_eq!(iso_v.len(), 1);
        assert_eq!(iso_v[0].first(), Some(&p(-15.0, 0.0)));
        assert!(iso_v[0].points.iter().all(|q| q.x <= 0.0));

        let inside_v = r.iso_v_inside();
        assert_eq!(inside_v.len(), 1);
        assert_relative_eq!(inside_v[0].length(), 14.0, epsilon = 1e-9);
    }

    #[test]
    fn sigma_border_skips_gamma() {
        let r = resolver(0.0, 0.0);
        let border = r.sigma_border();
        assert_eq!(border.len(), 1);
        let sigma_len = r.sigma().unwrap().exterior().length();
        assert!(border[0].length() < sigma_len);
        assert!(border[0].length() > sigma_len - 17.0);
    }

    #[test]
    fn sigma_minus_gamma_removes_overlap() {
        let r = resolver(0.0, 0.0);
        let faces = r.sigma_minus_gamma().unwrap();
        assert_eq!(faces.len(), 1);
        let gamma_area = r.gamma().area();
        // Three quarters of Γ lie in Σ.
        assert_relative_eq!(faces[0].area(), 900.0 - 0.75 * gamma_area, epsilon = 1e-6);
    }

    #[test]
    fn fibers_at_corners_and_visible_ends() {
        let r = resolver(0.0, 0.0);
        assert_eq!(
            r.outer_fibers(),
            vec![p(15.0, -20.0), p(15.0, 0.0), p(0.0, 20.0), p(-15.0, 20.0)]
        );
        let visible = r.gamma_visible();
        let ends = VisibilityResolver::gamma_fibers(&visible);
        assert_eq!(ends.len(), 2);
        assert_eq!(ends[0], p(7.0, 0.0));
    }

    #[test]
    fn clockwise_gamma_keeps_its_order() {
        let domain = SampledDomain::uniform((-15.0, 15.0), (-20.0, 20.0), (51, 51)).unwrap();
        let boundary = OuterBoundary::new(domain, CutValues::new(0.0, 0.0)).unwrap();
        let curve = FnCurve::new(|t: f64| p(7.0 * t.cos(), -10.0 * t.sin()));
        let r = VisibilityResolver::from_curve(boundary, &curve, &linspace(0.0, TAU, 51)).unwrap();

        assert_eq!(r.outline().first(), Some(&p(7.0, 0.0)));
        assert!(r.outline().points[1].y < 0.0);
        assert!(signed_area(&r.gamma().exterior().points) > 0.0);

        let visible = r.gamma_visible();
        assert_eq!(visible.len(), 1);
        let first = visible[0].first().unwrap();
        assert!(first.x.abs() < 1e-9 && first.y > 9.9);
        assert!(points_coincide(visible[0].last().unwrap(), &p(7.0, 0.0)));

        let hidden = r.gamma_hidden();
        assert_eq!(hidden.len(), 1);
        assert!(points_coincide(hidden[0].first().unwrap(), &p(7.0, 0.0)));
        assert!(hidden[0].points[1].y < 0.0);

        let set = r.resolve().unwrap();
        assert_eq!(set.gamma_outline, *r.outline());
    }

    #[test]
    fn gamma_outside_domain_is_rejected() {
        let domain = SampledDomain::uniform((-15.0, 15.0), (-20.0, 20.0), (51, 51)).unwrap();
        let boundary = OuterBoundary::new(domain, CutValues::new(0.0, 0.0)).unwrap();
        let ellipse = Ellipse::new(20.0, 10.0).unwrap();
        assert!(VisibilityResolver::from_curve(boundary, &ellipse, &linspace(0.0, TAU, 51)).is_err());
    }

    #[test]
    fn self_intersecting_gamma_is_rejected() {
        let domain = SampledDomain::uniform((-15.0, 15.0), (-20.0, 20.0), (51, 51)).unwrap();
        let boundary = OuterBoundary::new(domain, CutValues::new(0.0, 0.0)).unwrap();
        let bow = Pline::closed(vec![p(0.0, 0.0), p(5.0, 5.0), p(5.0, 0.0), p(0.0, 5.0)]);
        assert!(VisibilityResolver::new(boundary, bow).is_err());
    }

    #[test]
    fn whole_domain_notch_shows_all_of_gamma() {
        let r = resolver(-15.0, -20.0);
        assert!(r.sigma().is_none());
        let visible = r.gamma_visible();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].closed);
        assert!(r.gamma_hidden().is_empty());
        assert!(r.bc().is_empty());
        assert!(r.gh().is_empty());
        let set = r.resolve().unwrap();
        assert!(set.gamma_fibers.is_empty());
    }
}
