pub mod dictionary;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod naming;
pub mod operations;

pub use error::{GeomeshError, Result};
