pub mod curve;
pub mod pline;
pub mod polygon;
pub mod shell;
pub mod surface;

pub use curve::{ClosedCurve, Ellipse, FnCurve};
pub use pline::Pline;
pub use polygon::Polygon;
pub use shell::{
    default_shell, Constant, DistanceField, Layer, MidSurfaceKind, NormalParams, Shell, Thickness,
};
pub use surface::{FnSurface, HyperbolicParaboloid, PartialsFn, Plane, Surface};
