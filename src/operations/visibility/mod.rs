//! Visible and hidden pieces of the cut-away outlines.

mod iso;
mod resolver;

pub use iso::{sector_filter, Axis};
pub use resolver::{VisibilityResolver, VisibilitySet};
