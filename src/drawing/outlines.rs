use crate::error::Result;
use crate::geometry::pline::Pline;
use crate::geometry::shell::{Layer, Shell};
use crate::math::Point2;
use crate::operations::visibility::VisibilitySet;

use super::path::{emit_all, PathSink, ProjectedPath};
use super::{anchor, chain, fiber, lateral_face, project_pline, project_point};

/// Drawing-plane points where the leader lines of the figure labels start.
///
/// `None` when the curve an anchor sits on is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LabelAnchors {
    /// Half-way along Γ_visible, on the mid-surface.
    pub gamma: Option<Point2>,
    /// A quarter along Γ_visible, between the mid-surface and the inner face.
    pub lateral: Option<Point2>,
    /// A third along Γ, on the outer face.
    pub sub_region: Option<Point2>,
}

impl LabelAnchors {
    /// Places the anchors on the first Γ_visible piece and on Γ.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be evaluated at an anchor.
    pub fn build(shell: &Shell, set: &VisibilitySet) -> Result<Self> {
        let (gamma, lateral) = match set.gamma_visible.first() {
            Some(piece) => {
                let gamma = anchor(shell, Layer::Mid, piece, 0.5)?;
                let mid = anchor(shell, Layer::Mid, piece, 0.25)?;
                let inf = anchor(shell, Layer::Inf, piece, 0.25)?;
                let lateral = mid
                    .zip(inf)
                    .map(|(a, b)| Point2::from((a.coords + b.coords) * 0.5));
                (gamma, lateral)
            }
            None => (None, None),
        };
        let sub_region = anchor(shell, Layer::Sup, &set.gamma_outline, 0.33)?;
        Ok(Self {
            gamma,
            lateral,
            sub_region,
        })
    }
}

/// Every drawable path of a cut-away figure, grouped the way a renderer
/// fills and strokes them.
#[derive(Debug, Clone, Default)]
pub struct Outlines {
    /// Σ − Γ on the outer face (exterior and hole rings), for filling.
    pub outer_upper_faces: Vec<ProjectedPath>,
    /// Γ on the outer face, for filling.
    pub sub_upper_face: ProjectedPath,
    /// Lateral faces along FG and BC.
    pub outer_lateral_right: Vec<ProjectedPath>,
    /// Lateral faces along CD and GH.
    pub outer_lateral_left: Vec<ProjectedPath>,
    /// Lateral faces along Γ_visible.
    pub sub_lateral_faces: Vec<ProjectedPath>,
    /// Iso lines on the outer face, outside Γ.
    pub outer_iso_lines: Vec<ProjectedPath>,
    /// ∂Σ − Γ on the outer face, and the FG+GH and BC+CD chains on the inner
    /// face.
    pub outer_borders: Vec<ProjectedPath>,
    /// FG+GH+Γ_visible and BC+CD on the mid-surface.
    pub mid_lines: Vec<ProjectedPath>,
    /// Outer-system fibers at the domain corners.
    pub outer_fibers: Vec<ProjectedPath>,
    /// Γ on the outer face and Γ_visible on the inner face.
    pub sub_borders: Vec<ProjectedPath>,
    /// Iso lines inside Γ on the outer face, dropping to the inner face at
    /// their last point, and the fibers at the ends of Γ_visible.
    pub sub_iso_lines: Vec<ProjectedPath>,
    /// Label anchors; not part of the painted paths.
    pub label_anchors: LabelAnchors,
}

impl Outlines {
    /// Evaluates every visibility output through the shell and projects it.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be evaluated along a curve.
    pub fn build(shell: &Shell, set: &VisibilitySet) -> Result<Self> {
        let sup = |pline: &Pline| project_pline(shell, Layer::Sup, pline);
        let inf = |pline: &Pline| project_pline(shell, Layer::Inf, pline);
        let mid = |pline: &Pline| project_pline(shell, Layer::Mid, pline);

        let outer_upper_faces = set
            .sigma_minus_gamma
            .iter()
            .flat_map(|poly| poly.rings())
            .map(sup)
            .collect::<Result<Vec<_>>>()?;
        let sub_upper_face = sup(&set.gamma_outline)?;

        let lateral = |parts: Vec<&Pline>| {
            parts
                .into_iter()
                .filter(|p| !p.is_empty())
                .map(|p| lateral_face(shell, p))
                .collect::<Result<Vec<_>>>()
        };
        let outer_lateral_right = lateral(std::iter::once(&set.fg).chain(&set.bc).collect())?;
        let outer_lateral_left = lateral(std::iter::once(&set.cd).chain(&set.gh).collect())?;
        let sub_lateral_faces = lateral(set.gamma_visible.iter().collect())?;

        let outer_iso_lines = set
            .iso_u_outside
            .iter()
            .chain(&set.iso_v_outside)
            .map(sup)
            .collect::<Result<Vec<_>>>()?;

        let fg_gh = chain(std::iter::once(&set.fg).chain(&set.gh));
        let bc_cd = chain(set.bc.iter().chain(std::iter::once(&set.cd)));
        let mut outer_borders = set.sigma_border.iter().map(sup).collect::<Result<Vec<_>>>()?;
        outer_borders.push(inf(&fg_gh)?);
        outer_borders.push(inf(&bc_cd)?);

        let mid_lines = vec![
            mid(&chain(std::iter::once(&fg_gh).chain(&set.gamma_visible)))?,
            mid(&bc_cd)?,
        ];

        let outer_fibers = set
            .outer_fibers
            .iter()
            .map(|uv| fiber(shell, uv))
            .collect::<Result<Vec<_>>>()?;

        let mut sub_borders = vec![sup(&set.gamma_outline)?];
        for piece in &set.gamma_visible {
            sub_borders.push(inf(piece)?);
        }

        let mut sub_iso_lines = Vec::new();
        for piece in set.iso_u_inside.iter().chain(&set.iso_v_inside) {
            let mut path = sup(piece)?;
            if let Some(last) = piece.last() {
                path.points.push(project_point(shell, Layer::Inf, last)?);
            }
            sub_iso_lines.push(path);
        }
        for uv in &set.gamma_fibers {
            sub_iso_lines.push(fiber(shell, uv)?);
        }

        Ok(Self {
            outer_upper_faces,
            sub_upper_face,
            outer_lateral_right,
            outer_lateral_left,
            sub_lateral_faces,
            outer_iso_lines,
            outer_borders,
            mid_lines,
            outer_fibers,
            sub_borders,
            sub_iso_lines,
            label_anchors: LabelAnchors::build(shell, set)?,
        })
    }

    /// Emits every path in painting order: faces first, then strokes.
    pub fn emit(&self, sink: &mut dyn PathSink) {
        emit_all(&self.outer_upper_faces, sink);
        self.sub_upper_face.emit(sink);
        emit_all(&self.outer_lateral_right, sink);
        emit_all(&self.outer_lateral_left, sink);
        emit_all(&self.sub_lateral_faces, sink);
        emit_all(&self.outer_iso_lines, sink);
        emit_all(&self.outer_borders, sink);
        emit_all(&self.mid_lines, sink);
        emit_all(&self.outer_fibers, sink);
        emit_all(&self.sub_borders, sink);
        emit_all(&self.sub_iso_lines, sink);
    }
}
