use crate::graph::{GraphOrder, Town, Weight, WeightedAdjacency};
use fxhash::FxHashSet;
use itertools::Itertools;
use std::io::Write;

/// A closed tour through all towns and its total length.
///
/// By convention a tour over `n >= 2` towns has `n + 1` stops, starting and
/// ending at the same town; the degenerate single-town tour is `[start]` and
/// the empty graph yields an empty tour. Both degenerate tours cost 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    stops: Vec<Town>,
    cost: Weight,
}

impl Tour {
    pub fn new(stops: Vec<Town>, cost: Weight) -> Self {
        Self { stops, cost }
    }

    /// Returns the visiting order, including the final return to the start.
    ///
    /// # Example
    /// ```
    /// use tsp::utils::Tour;
    /// let tour = Tour::new(vec![1, 2, 3, 1], 12);
    /// assert_eq!(tour.stops(), &[1, 2, 3, 1]);
    /// ```
    pub fn stops(&self) -> &[Town] {
        &self.stops
    }

    /// Returns the total length of the tour.
    ///
    /// # Example
    /// ```
    /// use tsp::utils::Tour;
    /// let tour = Tour::new(vec![1, 2, 3, 1], 12);
    /// assert_eq!(tour.cost(), 12);
    /// ```
    pub fn cost(&self) -> Weight {
        self.cost
    }

    /// Returns the number of stops, counting the closing return stop.
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the tour starts and ends at the same town. Degenerate
    /// tours of at most one stop are closed by convention.
    ///
    /// # Example
    /// ```
    /// use tsp::utils::Tour;
    /// assert!(Tour::new(vec![1, 2, 1], 4).is_closed());
    /// assert!(Tour::new(vec![1], 0).is_closed());
    /// assert!(!Tour::new(vec![1, 2], 2).is_closed());
    /// ```
    pub fn is_closed(&self) -> bool {
        self.stops.len() < 2 || self.stops.first() == self.stops.last()
    }

    /// Returns true if the tour is a feasible solution for `graph`: it is
    /// closed, every consecutive pair of stops is connected by an edge, every
    /// town of the graph is visited exactly once (the start twice), and the
    /// recorded cost matches the edge weights.
    pub fn is_valid(&self, graph: &impl WeightedAdjacency) -> bool {
        if !self.is_closed() {
            return false;
        }

        match self.stops.len() {
            0 => return graph.is_empty() && self.cost == 0,
            1 => {
                return graph.number_of_towns() == 1
                    && graph.has_town(self.stops[0])
                    && self.cost == 0;
            }
            _ => {}
        }

        let interior = &self.stops[..self.stops.len() - 1];
        if interior.len() != graph.len() {
            return false;
        }

        let visited: FxHashSet<Town> = interior.iter().copied().collect();
        if visited.len() != interior.len() || !visited.iter().all(|&u| graph.has_town(u)) {
            return false;
        }

        let mut total: Weight = 0;
        for pair in self.stops.windows(2) {
            match graph.weight_between(pair[0], pair[1]) {
                Some(w) => total += w,
                None => return false,
            }
        }

        total == self.cost
    }

    /// Writes the tour as two lines: the total length, then the
    /// space-separated visiting order.
    ///
    /// ```
    /// use tsp::utils::Tour;
    /// let tour = Tour::new(vec![1, 2, 4, 3, 1], 70);
    ///
    /// let mut buffer: Vec<u8> = Vec::new(); // implements Write
    /// tour.write(&mut buffer).unwrap();
    /// let expected = b"70\n1 2 4 3 1\n";
    /// assert_eq!(buffer, expected);
    /// ```
    pub fn write<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(&mut writer, "{}", self.cost)?;
        writeln!(&mut writer, "{}", self.stops.iter().join(" "))?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::{AdjMap, GraphNew};

    fn triangle() -> AdjMap {
        AdjMap::test_only_from([(1, 2, 1), (2, 3, 2), (1, 3, 3)])
    }

    #[test]
    fn valid_tour() {
        assert!(Tour::new(vec![1, 2, 3, 1], 6).is_valid(&triangle()));
    }

    #[test]
    fn rejects_open_tour() {
        assert!(!Tour::new(vec![1, 2, 3], 3).is_valid(&triangle()));
    }

    #[test]
    fn rejects_skipped_town() {
        assert!(!Tour::new(vec![1, 2, 1], 2).is_valid(&triangle()));
    }

    #[test]
    fn rejects_repeated_town() {
        let graph = AdjMap::test_only_from([(1, 2, 1), (2, 3, 2), (1, 3, 3), (2, 4, 1), (3, 4, 1)]);
        assert!(!Tour::new(vec![1, 2, 3, 2, 1], 6).is_valid(&graph));
    }

    #[test]
    fn rejects_wrong_cost() {
        assert!(!Tour::new(vec![1, 2, 3, 1], 7).is_valid(&triangle()));
    }

    #[test]
    fn degenerate_tours() {
        let mut single = AdjMap::new();
        single.add_town(1);

        assert!(Tour::new(vec![1], 0).is_valid(&single));
        assert!(!Tour::new(vec![2], 0).is_valid(&single));
        assert!(Tour::new(vec![], 0).is_valid(&AdjMap::new()));
        assert!(!Tour::new(vec![], 0).is_valid(&single));
    }
}
