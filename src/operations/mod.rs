pub mod boolean;
pub mod boundary;
pub mod visibility;
