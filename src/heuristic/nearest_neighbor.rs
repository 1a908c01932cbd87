use crate::graph::*;
use crate::utils::Tour;
use fxhash::FxHashSet;

/// Constructs a single closed tour by always stepping to the nearest
/// unvisited neighbor of the current town; ties are broken towards the
/// smallest town identifier.
///
/// This is a single-pass local heuristic: it never backtracks and gives no
/// optimality guarantee. Returns None if the construction gets stuck (the
/// current town has no unvisited neighbor while unvisited towns remain), if
/// the closing edge back to `start` is missing, or if `start` is not a town
/// of the graph.
pub fn nearest_neighbor_solver(graph: &impl WeightedAdjacency, start: Town) -> Option<Tour> {
    if !graph.has_town(start) {
        return None;
    }

    if graph.number_of_towns() == 1 {
        return Some(Tour::new(vec![start], 0));
    }

    let mut visited = FxHashSet::default();
    visited.insert(start);

    let mut stops = Vec::with_capacity(graph.len() + 1);
    stops.push(start);

    let mut current = start;
    let mut cost: Weight = 0;

    while visited.len() < graph.len() {
        let (next, weight) = graph
            .neighbors_of(current)
            .filter(|(v, _)| !visited.contains(v))
            .min_by_key(|&(v, w)| (w, v))?;

        visited.insert(next);
        stops.push(next);
        cost += weight;
        current = next;
    }

    // close the tour
    cost += graph.weight_between(current, start)?;
    stops.push(start);

    Some(Tour::new(stops, cost))
}
