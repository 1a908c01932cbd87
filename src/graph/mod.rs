pub mod adj_map;
pub mod edge;
pub mod path_cost;

/// A vertex of the input graph. Identifiers are arbitrary and need not be contiguous.
pub type Town = u32;
pub type NumTowns = Town;
pub type Weight = u64;

use itertools::Itertools;

pub use adj_map::*;
pub use edge::*;
pub use path_cost::*;

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// Returns the number of towns of the graph
    fn number_of_towns(&self) -> NumTowns;

    /// Return the number of towns as usize
    fn len(&self) -> usize {
        self.number_of_towns() as usize
    }

    /// Returns an iterator over V in an unspecified order.
    fn towns(&self) -> impl Iterator<Item = Town> + '_;

    /// Returns all towns sorted ascendingly. This is the canonical iteration
    /// order whenever reproducible results are required.
    fn sorted_towns(&self) -> Vec<Town> {
        self.towns().sorted().collect()
    }

    /// Returns true if the graph has no towns (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read access to the weighted neighborhoods of an undirected graph.
pub trait WeightedAdjacency: GraphOrder {
    /// Returns an iterator over the neighbors of `u` and the weights of the
    /// connecting edges. Empty if `u` has no neighbors or is not part of the graph.
    fn neighbors_of(&self, u: Town) -> impl Iterator<Item = (Town, Weight)> + '_;

    /// Returns the weight of the edge between `u` and `v`, or None if no such
    /// edge exists. Symmetric for all implementors of this crate.
    fn weight_between(&self, u: Town, v: Town) -> Option<Weight>;

    /// Returns the number of neighbors of `u`
    fn degree_of(&self, u: Town) -> NumTowns {
        self.neighbors_of(u).count() as NumTowns
    }

    /// Returns true exactly if `u` is a town of the graph
    fn has_town(&self, u: Town) -> bool;

    /// Returns true exactly if the graph contains an edge between `u` and `v`
    fn has_edge(&self, u: Town, v: Town) -> bool {
        self.weight_between(u, v).is_some()
    }
}

pub trait GraphNew {
    /// Creates a graph without towns or edges
    fn new() -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Inserts the undirected edge `{u, v}` with weight `w`; both towns are
    /// created if not yet present. Re-inserting an existing edge overwrites
    /// its weight (last write wins).
    fn insert_edge(&mut self, u: Town, v: Town, weight: Weight);

    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.insert_edge(u, v, w);
        }
    }
}
