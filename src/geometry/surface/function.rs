use std::sync::Arc;

use crate::math::{Point3, Vector3};

use super::{PartialsFn, Surface};

/// A user-defined surface backed by a closure, optionally with exact
/// partial derivatives.
pub struct FnSurface<F> {
    f: F,
    partials: Option<PartialsFn>,
}

impl<F> FnSurface<F>
where
    F: Fn(f64, f64) -> Point3 + Send + Sync,
{
    /// Wraps a closure; derivatives will be taken numerically.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f, partials: None }
    }

    /// Attaches exact partial derivatives `(u, v) → (∂f/∂u, ∂f/∂v)`.
    #[must_use]
    pub fn with_partials<D>(mut self, partials: D) -> Self
    where
        D: Fn(f64, f64) -> (Vector3, Vector3) + Send + Sync + 'static,
    {
        self.partials = Some(Arc::new(partials));
        self
    }
}

impl<F> Surface for FnSurface<F>
where
    F: Fn(f64, f64) -> Point3 + Send + Sync,
{
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        (self.f)(u, v)
    }

    fn analytic_partials(&self) -> Option<PartialsFn> {
        self.partials.clone()
    }
}

impl<F> std::fmt::Debug for FnSurface<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSurface")
            .field("analytic_partials", &self.partials.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_surface_evaluates() {
        let s = FnSurface::new(|u, v| Point3::new(u, v, u * v));
        assert_eq!(s.evaluate(2.0, 3.0), Point3::new(2.0, 3.0, 6.0));
        assert!(s.analytic_partials().is_none());
    }

    #[test]
    fn attached_partials_are_reported() {
        let s = FnSurface::new(|u, v| Point3::new(u, v, u * v))
            .with_partials(|u, v| (Vector3::new(1.0, 0.0, v), Vector3::new(0.0, 1.0, u)));
        let partials = s.analytic_partials();
        assert!(partials.is_some());
        if let Some(d) = partials {
            let (du, dv) = d(2.0, 3.0);
            assert_eq!(du, Vector3::new(1.0, 0.0, 3.0));
            assert_eq!(dv, Vector3::new(0.0, 1.0, 2.0));
        }
    }
}
