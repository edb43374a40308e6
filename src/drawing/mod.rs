//! Projection of parameter-space outlines into drawing-plane paths.
//!
//! Paths are evaluated through one shell layer and the oblique projector.
//! Painting them is left to whatever implements [`PathSink`].

mod outlines;
mod path;

pub use outlines::{LabelAnchors, Outlines};
pub use path::{emit_all, PathCommand, PathRecorder, PathSink, ProjectedPath};

use crate::error::Result;
use crate::geometry::pline::Pline;
use crate::geometry::shell::{Layer, Shell};
use crate::math::projection::{project, project_all};
use crate::math::Point2;

/// Projects a parameter-space polyline through one shell layer.
///
/// # Errors
///
/// Returns an error if the shell cannot be evaluated at a point.
pub fn project_pline(shell: &Shell, layer: Layer, pline: &Pline) -> Result<ProjectedPath> {
    let points = project_all(&shell.evaluate_batch(layer, &pline.points)?);
    Ok(ProjectedPath {
        points,
        closed: pline.closed,
    })
}

/// Projects a single parameter point through one shell layer.
///
/// # Errors
///
/// Returns an error if the shell cannot be evaluated at the point.
pub fn project_point(shell: &Shell, layer: Layer, uv: &Point2) -> Result<Point2> {
    Ok(project(&shell.evaluate(layer, uv.x, uv.y)?))
}

/// The lateral face swept by a parameter-space curve through the thickness:
/// the curve on the inner face followed by the reversed curve on the outer
/// face, closed.
///
/// # Errors
///
/// Returns an error if the shell cannot be evaluated at a point.
pub fn lateral_face(shell: &Shell, pline: &Pline) -> Result<ProjectedPath> {
    let points = pline.traversal();
    let inf = project_all(&shell.evaluate_batch(Layer::Inf, &points)?);
    let mut sup = project_all(&shell.evaluate_batch(Layer::Sup, &points)?);
    sup.reverse();
    let mut outline = inf;
    outline.extend(sup);
    Ok(ProjectedPath::closed(outline))
}

/// The through-thickness segment at one parameter point, inner to outer face.
///
/// # Errors
///
/// Returns an error if the shell cannot be evaluated at the point.
pub fn fiber(shell: &Shell, uv: &Point2) -> Result<ProjectedPath> {
    Ok(ProjectedPath::open(vec![
        project_point(shell, Layer::Inf, uv)?,
        project_point(shell, Layer::Sup, uv)?,
    ]))
}

/// Projected point at a fraction of a curve's arc length, or `None` for an
/// empty curve.
///
/// # Errors
///
/// Returns an error if the shell cannot be evaluated at the point.
pub fn anchor(shell: &Shell, layer: Layer, pline: &Pline, fraction: f64) -> Result<Option<Point2>> {
    pline
        .interpolate(fraction)
        .map(|uv| project_point(shell, layer, &uv))
        .transpose()
}

/// Concatenates polylines into one open chain, dropping the repeated joint
/// points.
#[must_use]
pub fn chain<'a>(parts: impl IntoIterator<Item = &'a Pline>) -> Pline {
    let points = parts
        .into_iter()
        .flat_map(Pline::traversal)
        .collect::<Vec<_>>();
    Pline::open(points).deduplicated()
}
