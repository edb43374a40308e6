mod ellipse;

pub use ellipse::Ellipse;

use crate::geometry::pline::Pline;
use crate::math::Point2;

/// A closed parametric curve in the `(u, v)` parameter plane.
///
/// Generates the outline of the cut sub-region. The parameter is periodic;
/// sampling over `[0, period]` traces the curve once.
pub trait ClosedCurve: Send + Sync {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Length of one period of the parameter.
    fn period(&self) -> f64 {
        std::f64::consts::TAU
    }

    /// Evaluates the curve at every parameter value, preserving order.
    fn sample(&self, t: &[f64]) -> Vec<Point2> {
        t.iter().map(|&t| self.evaluate(t)).collect()
    }

    /// Samples the curve into a closed ring. A final sample that repeats the
    /// first one (e.g. `t = 2π`) is dropped.
    fn sample_ring(&self, t: &[f64]) -> Pline {
        Pline::closed(self.sample(t)).deduplicated()
    }
}

/// A user-defined closed curve backed by a closure.
pub struct FnCurve<F> {
    f: F,
    period: f64,
}

impl<F> FnCurve<F>
where
    F: Fn(f64) -> Point2 + Send + Sync,
{
    /// Wraps a closure with period `2π`.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self {
            f,
            period: std::f64::consts::TAU,
        }
    }

    /// Wraps a closure with a custom period.
    #[must_use]
    pub fn with_period(f: F, period: f64) -> Self {
        Self { f, period }
    }
}

impl<F> ClosedCurve for FnCurve<F>
where
    F: Fn(f64) -> Point2 + Send + Sync,
{
    fn evaluate(&self, t: f64) -> Point2 {
        (self.f)(t)
    }

    fn period(&self) -> f64 {
        self.period
    }
}

impl<F> std::fmt::Debug for FnCurve<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCurve").field("period", &self.period).finish_non_exhaustive()
    }
}
