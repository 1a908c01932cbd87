use super::*;
use crate::errors::{GraphInvariantError, InvariantCheck};
use fxhash::FxHashMap;
use itertools::Itertools;
use std::fmt;

/// Symmetric mapping-of-mappings adjacency: town -> (neighbor -> weight).
/// Built once by the loader and treated as read-only by the solvers.
#[derive(Clone, Default)]
pub struct AdjMap {
    adj: FxHashMap<Town, FxHashMap<Town, Weight>>,
    number_of_edges: usize,
}

impl GraphOrder for AdjMap {
    fn number_of_towns(&self) -> NumTowns {
        self.adj.len() as NumTowns
    }

    fn towns(&self) -> impl Iterator<Item = Town> + '_ {
        self.adj.keys().copied()
    }
}

impl WeightedAdjacency for AdjMap {
    fn neighbors_of(&self, u: Town) -> impl Iterator<Item = (Town, Weight)> + '_ {
        self.adj
            .get(&u)
            .into_iter()
            .flatten()
            .map(|(&v, &w)| (v, w))
    }

    fn weight_between(&self, u: Town, v: Town) -> Option<Weight> {
        self.adj.get(&u)?.get(&v).copied()
    }

    fn degree_of(&self, u: Town) -> NumTowns {
        self.adj.get(&u).map_or(0, |nbs| nbs.len() as NumTowns)
    }

    fn has_town(&self, u: Town) -> bool {
        self.adj.contains_key(&u)
    }
}

impl GraphNew for AdjMap {
    fn new() -> Self {
        Default::default()
    }
}

impl GraphEdgeEditing for AdjMap {
    fn insert_edge(&mut self, u: Town, v: Town, weight: Weight) {
        if self.adj.entry(u).or_default().insert(v, weight).is_none() {
            self.number_of_edges += 1;
        }
        if u != v {
            self.adj.entry(v).or_default().insert(u, weight);
        }
    }
}

impl AdjMap {
    pub fn number_of_edges(&self) -> usize {
        self.number_of_edges
    }

    /// Inserts `u` as an isolated town if not yet present
    pub fn add_town(&mut self, u: Town) {
        self.adj.entry(u).or_default();
    }

    pub fn test_only_from(edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }
}

/// Verifies that the adjacency is symmetric, i.e. every stored direction of an
/// edge is accompanied by its reverse carrying the same weight.
impl InvariantCheck<GraphInvariantError> for AdjMap {
    fn is_correct(&self) -> Result<(), GraphInvariantError> {
        for (&u, neighbors) in &self.adj {
            for (&v, &w) in neighbors {
                match self.weight_between(v, u) {
                    None => return Err(GraphInvariantError::AsymmetricEdge(u, v)),
                    Some(rev) if rev != w => {
                        return Err(GraphInvariantError::MismatchedWeight(u, v, w, rev));
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }
}

/// Debug-prints towns and neighborhoods sorted ascendingly to keep the output
/// independent of hash-map iteration order.
impl fmt::Debug for AdjMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for u in self.sorted_towns() {
            let neighbors: Vec<_> = self
                .neighbors_of(u)
                .sorted()
                .map(|(v, w)| format!("{v}: {w}"))
                .collect();
            map.entry(&u, &neighbors);
        }
        map.finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let graph = AdjMap::new();
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_towns(), 0);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn insert_is_undirected() {
        let mut graph = AdjMap::new();
        graph.insert_edge(1, 2, 5);

        assert_eq!(graph.number_of_towns(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.weight_between(1, 2), Some(5));
        assert_eq!(graph.weight_between(2, 1), Some(5));
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(1, 3));
    }

    #[test]
    fn duplicate_insert_overwrites() {
        let mut graph = AdjMap::new();
        graph.insert_edge(1, 2, 5);
        graph.insert_edge(2, 1, 9);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.weight_between(1, 2), Some(9));
        assert_eq!(graph.weight_between(2, 1), Some(9));
    }

    #[test]
    fn neighbors_and_degrees() {
        let graph = AdjMap::test_only_from([(1, 2, 5), (1, 5, 7), (3, 4, 6)]);

        assert_eq!(graph.number_of_towns(), 5);
        assert_eq!(graph.degree_of(1), 2);
        assert_eq!(graph.degree_of(4), 1);
        assert_eq!(graph.degree_of(42), 0);

        let mut nbs: Vec<_> = graph.neighbors_of(1).collect();
        nbs.sort();
        assert_eq!(nbs, vec![(2, 5), (5, 7)]);
        assert_eq!(graph.neighbors_of(42).count(), 0);
    }

    #[test]
    fn sorted_towns_ascending() {
        let graph = AdjMap::test_only_from([(7, 2, 1), (2, 9, 1), (4, 7, 1)]);
        assert_eq!(graph.sorted_towns(), vec![2, 4, 7, 9]);
    }

    #[test]
    fn isolated_town() {
        let mut graph = AdjMap::new();
        graph.add_town(3);
        graph.add_town(3);

        assert_eq!(graph.number_of_towns(), 1);
        assert_eq!(graph.degree_of(3), 0);
        assert!(graph.has_town(3));
    }

    #[test]
    fn invariant_holds_after_inserts() {
        let graph = AdjMap::test_only_from([(1, 2, 10), (2, 3, 20), (1, 3, 30)]);
        assert!(graph.is_correct().is_ok());
    }
}
