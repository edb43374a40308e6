//! Finite-thickness shell around a parametric mid-surface.
//!
//! The inner ("inf") and outer ("sup") faces are the mid-surface shifted along
//! its unit normal by two signed distance fields:
//!
//! ```text
//! f_inf(u, v) = f_mid(u, v) + d_inf(u, v) · n(u, v)
//! f_sup(u, v) = f_mid(u, v) + d_sup(u, v) · n(u, v)
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

use super::surface::{HyperbolicParaboloid, PartialsFn, Plane, Surface};

/// Signed offset distance `(u, v) → d`, measured along the mid-surface normal.
pub trait DistanceField: Send + Sync {
    /// Evaluates the offset at `(u, v)`.
    fn distance(&self, u: f64, v: f64) -> f64;
}

impl<F> DistanceField for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn distance(&self, u: f64, v: f64) -> f64 {
        self(u, v)
    }
}

/// A constant offset distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl DistanceField for Constant {
    fn distance(&self, _u: f64, _v: f64) -> f64 {
        self.0
    }
}

/// Parameters of the numeric normal field.
#[derive(Debug, Clone, Copy)]
pub struct NormalParams {
    /// Central finite-difference step in parameter units.
    pub step: f64,
}

impl Default for NormalParams {
    fn default() -> Self {
        Self { step: 1e-4 }
    }
}

/// How tangent vectors are obtained, resolved once at construction.
#[derive(Clone)]
enum Differentiation {
    Analytic(PartialsFn),
    Numeric { step: f64 },
}

/// Selects one of the three shell evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Inner face, offset by `d_inf`.
    Inf,
    /// The mid-surface itself.
    Mid,
    /// Outer face, offset by `d_sup`.
    Sup,
}

/// A shell: mid-surface, its unit-normal field and the two offset faces.
pub struct Shell {
    mid: Box<dyn Surface>,
    d_inf: Box<dyn DistanceField>,
    d_sup: Box<dyn DistanceField>,
    differentiation: Differentiation,
}

impl Shell {
    /// Creates a shell with the default finite-difference step.
    #[must_use]
    pub fn new(
        mid: impl Surface + 'static,
        d_inf: impl DistanceField + 'static,
        d_sup: impl DistanceField + 'static,
    ) -> Self {
        Self::with_params(mid, d_inf, d_sup, NormalParams::default())
    }

    /// Creates a shell with explicit normal-field parameters.
    ///
    /// Analytic partial derivatives supplied by the surface take precedence
    /// over finite differences; `params` applies only to the numeric fallback.
    #[must_use]
    pub fn with_params(
        mid: impl Surface + 'static,
        d_inf: impl DistanceField + 'static,
        d_sup: impl DistanceField + 'static,
        params: NormalParams,
    ) -> Self {
        let differentiation = match mid.analytic_partials() {
            Some(partials) => Differentiation::Analytic(partials),
            None => Differentiation::Numeric { step: params.step },
        };
        Self {
            mid: Box::new(mid),
            d_inf: Box::new(d_inf),
            d_sup: Box::new(d_sup),
            differentiation,
        }
    }

    /// Returns `true` if tangents come from exact partial derivatives.
    #[must_use]
    pub fn has_analytic_partials(&self) -> bool {
        matches!(self.differentiation, Differentiation::Analytic(_))
    }

    /// Evaluates the mid-surface.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if the surface yields NaN or infinity.
    pub fn evaluate_mid(&self, u: f64, v: f64) -> Result<Point3> {
        let p = self.mid.evaluate(u, v);
        if p.iter().all(|c| c.is_finite()) {
            Ok(p)
        } else {
            Err(GeometryError::NonFinite {
                what: "mid-surface",
                u,
                v,
            }
            .into())
        }
    }

    /// Returns the tangent vectors `(∂f/∂u, ∂f/∂v)` of the mid-surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the mid-surface cannot be evaluated around `(u, v)`.
    pub fn partials(&self, u: f64, v: f64) -> Result<(Vector3, Vector3)> {
        match &self.differentiation {
            Differentiation::Analytic(partials) => Ok(partials(u, v)),
            Differentiation::Numeric { step } => {
                let h = *step;
                let du = (self.evaluate_mid(u + 0.5 * h, v)? - self.evaluate_mid(u - 0.5 * h, v)?)
                    / h;
                let dv = (self.evaluate_mid(u, v + 0.5 * h)? - self.evaluate_mid(u, v - 0.5 * h)?)
                    / h;
                Ok((du, dv))
            }
        }
    }

    /// Unit normal of the mid-surface, `∂f/∂u × ∂f/∂v` normalized.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateNormal` where the parametrization is
    /// singular (tangents parallel or vanishing).
    pub fn normal(&self, u: f64, v: f64) -> Result<Vector3> {
        let (du, dv) = self.partials(u, v)?;
        let cross = du.cross(&dv);
        let norm = cross.norm();
        if !norm.is_finite() || norm < TOLERANCE {
            return Err(GeometryError::DegenerateNormal { u, v }.into());
        }
        Ok(cross / norm)
    }

    /// Evaluates the inner face.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is degenerate or a value is not finite.
    pub fn evaluate_inf(&self, u: f64, v: f64) -> Result<Point3> {
        let d = offset(self.d_inf.as_ref(), "d_inf", u, v)?;
        self.at(u, v, d)
    }

    /// Evaluates the outer face.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is degenerate or a value is not finite.
    pub fn evaluate_sup(&self, u: f64, v: f64) -> Result<Point3> {
        let d = offset(self.d_sup.as_ref(), "d_sup", u, v)?;
        self.at(u, v, d)
    }

    /// Point at signed normal distance `z` from the mid-surface:
    /// `f_mid(u, v) + z · n(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is degenerate or a value is not finite.
    pub fn at(&self, u: f64, v: f64, z: f64) -> Result<Point3> {
        Ok(self.evaluate_mid(u, v)? + self.normal(u, v)? * z)
    }

    /// Evaluates the selected layer at `(u, v)`.
    ///
    /// # Errors
    ///
    /// See [`Shell::evaluate_inf`], [`Shell::evaluate_mid`], [`Shell::evaluate_sup`].
    pub fn evaluate(&self, layer: Layer, u: f64, v: f64) -> Result<Point3> {
        match layer {
            Layer::Inf => self.evaluate_inf(u, v),
            Layer::Mid => self.evaluate_mid(u, v),
            Layer::Sup => self.evaluate_sup(u, v),
        }
    }

    /// Evaluates the selected layer at every `(u, v)` pair, preserving order.
    ///
    /// # Errors
    ///
    /// Fails on the first point that fails to evaluate.
    pub fn evaluate_batch(&self, layer: Layer, uv: &[Point2]) -> Result<Vec<Point3>> {
        #[cfg(feature = "parallel")]
        {
            uv.par_iter()
                .map(|p| self.evaluate(layer, p.x, p.y))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            uv.iter().map(|p| self.evaluate(layer, p.x, p.y)).collect()
        }
    }

    /// Unit normals at every `(u, v)` pair, preserving order.
    ///
    /// # Errors
    ///
    /// Fails on the first degenerate normal.
    pub fn normal_batch(&self, uv: &[Point2]) -> Result<Vec<Vector3>> {
        uv.iter().map(|p| self.normal(p.x, p.y)).collect()
    }
}

fn offset(field: &dyn DistanceField, what: &'static str, u: f64, v: f64) -> Result<f64> {
    let d = field.distance(u, v);
    if d.is_finite() {
        Ok(d)
    } else {
        Err(GeometryError::NonFinite { what, u, v }.into())
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("analytic_partials", &self.has_analytic_partials())
            .finish_non_exhaustive()
    }
}

/// Mid-surface of the preset shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MidSurfaceKind {
    /// The `z = 0` plane.
    #[default]
    Plate,
    /// `z = (u / 11)² − (v / 8)²`.
    Saddle,
}

/// Thickness law of the preset shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thickness {
    /// `d_inf = −3`, `d_sup = 3`.
    Constant,
    /// `d_inf = −3 + sin(0.3 (u + v))`, `d_sup = 3 + cos(0.3 (u − v))`.
    #[default]
    Variable,
}

/// Builds one of the preset shells used by the standard figures.
#[must_use]
pub fn default_shell(mid: MidSurfaceKind, thickness: Thickness) -> Shell {
    match (mid, thickness) {
        (MidSurfaceKind::Plate, Thickness::Constant) => {
            Shell::new(Plane::xy(), Constant(-3.0), Constant(3.0))
        }
        (MidSurfaceKind::Plate, Thickness::Variable) => {
            Shell::new(Plane::xy(), variable_inf, variable_sup)
        }
        (MidSurfaceKind::Saddle, Thickness::Constant) => Shell::new(
            HyperbolicParaboloid::default(),
            Constant(-3.0),
            Constant(3.0),
        ),
        (MidSurfaceKind::Saddle, Thickness::Variable) => {
            Shell::new(HyperbolicParaboloid::default(), variable_inf, variable_sup)
        }
    }
}

fn variable_inf(u: f64, v: f64) -> f64 {
    -3.0 + (0.3 * (u + v)).sin()
}

fn variable_sup(u: f64, v: f64) -> f64 {
    3.0 + (0.3 * (u - v)).cos()
}
