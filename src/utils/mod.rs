pub mod signal_handling;
pub mod tour;

pub use tour::*;
