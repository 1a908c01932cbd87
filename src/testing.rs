use super::graph::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Seeded generator so failing tests reproduce.
pub fn test_rng(seed: u64) -> impl Rng {
    Pcg64Mcg::seed_from_u64(seed)
}

/// Complete graph over the towns `1..=n` with weights drawn from `1..=max_weight`.
pub fn random_complete_graph(rng: &mut impl Rng, n: Town, max_weight: Weight) -> AdjMap {
    let mut graph = AdjMap::new();
    for u in 1..=n {
        graph.add_town(u);
        for v in (u + 1)..=n {
            graph.insert_edge(u, v, rng.gen_range(1..=max_weight));
        }
    }
    graph
}

/// G(n, p) over the towns `1..=n`; every edge is present independently with
/// probability `p` and carries a weight from `1..=max_weight`. Towns without
/// edges stay in the graph as isolated towns.
pub fn random_gnp_graph(rng: &mut impl Rng, n: Town, p: f64, max_weight: Weight) -> AdjMap {
    let mut graph = AdjMap::new();
    for u in 1..=n {
        graph.add_town(u);
        for v in (u + 1)..=n {
            if rng.gen_bool(p) {
                graph.insert_edge(u, v, rng.gen_range(1..=max_weight));
            }
        }
    }
    graph
}
