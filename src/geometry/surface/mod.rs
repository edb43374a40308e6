mod function;
mod hyperbolic_paraboloid;
mod plane;

pub use function::FnSurface;
pub use hyperbolic_paraboloid::HyperbolicParaboloid;
pub use plane::Plane;

use std::sync::Arc;

use crate::math::{Point3, Vector3};

/// Exact first partial derivatives `(∂f/∂u, ∂f/∂v)` of a surface.
pub type PartialsFn = Arc<dyn Fn(f64, f64) -> (Vector3, Vector3) + Send + Sync>;

/// Trait for parametric mid-surfaces `(u, v) → (x, y, z)`.
///
/// Evaluation is pure and total over the sampled domain.
pub trait Surface: Send + Sync {
    /// Evaluates the surface at parameters `(u, v)`.
    fn evaluate(&self, u: f64, v: f64) -> Point3;

    /// Returns exact partial derivatives when the surface knows them.
    ///
    /// Queried once, when a [`Shell`](crate::geometry::Shell) is built. `None`
    /// selects central finite differences.
    fn analytic_partials(&self) -> Option<PartialsFn> {
        None
    }
}
