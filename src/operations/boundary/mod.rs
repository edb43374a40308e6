//! Boundary curves of the notched outer region.

mod axis;
mod outer;

pub use axis::{CutValues, SampledAxis, SampledDomain};
pub use outer::OuterBoundary;
