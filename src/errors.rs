use crate::graph::{Town, Weight};
use std::error::Error;

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphInvariantError {
    #[error("edge ({0}, {1}) is stored without its reverse direction")]
    AsymmetricEdge(Town, Town),

    #[error("edge ({0}, {1}) has weight {2} in one direction but {3} in the other")]
    MismatchedWeight(Town, Town, Weight, Weight),
}
