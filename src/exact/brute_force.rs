use crate::graph::*;
use crate::utils::{signal_handling, Tour};
use itertools::Itertools;
use log::{info, warn};

/// Finds a minimum-length closed tour by enumerating all tour permutations.
///
/// The start town is fixed (caller-supplied, otherwise the smallest
/// identifier) to skip rotational duplicates. The remaining towns are sorted
/// ascendingly and their permutations enumerated lazily in lexicographic
/// order; each candidate is scored by [`evaluate_path`] with the best known
/// length as pruning bound. Ties are broken deterministically: the solver
/// only replaces its incumbent on a strictly shorter length, so the first
/// minimum in enumeration order wins.
///
/// Returns None if no closed tour spans all towns, or if the supplied start
/// is not a town of the graph. Graphs with zero or one town have the
/// degenerate tours `[]` and `[start]`, both of cost 0.
///
/// Runtime is factorial in the number of towns minus one; only suitable for
/// small instances. A termination signal stops the enumeration early, in
/// which case the best tour found so far is returned and optimality is no
/// longer guaranteed.
pub fn brute_force_solver(graph: &impl WeightedAdjacency, start: Option<Town>) -> Option<Tour> {
    let towns = graph.sorted_towns();

    let start = match start {
        Some(s) if !graph.has_town(s) => return None,
        Some(s) => s,
        None => match towns.first() {
            Some(&s) => s,
            None => return Some(Tour::new(Vec::new(), 0)),
        },
    };

    if towns.len() == 1 {
        return Some(Tour::new(vec![start], 0));
    }

    let rest: Vec<Town> = towns.into_iter().filter(|&u| u != start).collect();

    let mut best: Option<Tour> = None;
    let mut bound = PathLength::Infinite;
    let mut candidate = Vec::with_capacity(rest.len() + 2);

    for perm in rest.iter().permutations(rest.len()) {
        if signal_handling::received_ctrl_c() {
            warn!("search interrupted; best tour so far is not proven optimal");
            break;
        }

        candidate.clear();
        candidate.push(start);
        candidate.extend(perm.into_iter().copied());
        candidate.push(start);

        if let PathLength::Finite(length) = evaluate_path(graph, &candidate, bound) {
            if bound > PathLength::Finite(length) {
                info!("improved tour of length {length}");
                best = Some(Tour::new(candidate.clone(), length));
                bound = PathLength::Finite(length);
            }
        }
    }

    best
}
