pub mod drawing;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{CutawayError, Result};
