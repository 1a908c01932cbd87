use super::*;

/// Length of a path through the graph. `Infinite` marks an infeasible or
/// pruned candidate; the derived order places every finite length below it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum PathLength {
    Finite(Weight),
    Infinite,
}

impl PathLength {
    pub fn is_finite(&self) -> bool {
        matches!(self, PathLength::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// Returns the finite weight, or None for the infinite sentinel
    pub fn finite(&self) -> Option<Weight> {
        match *self {
            PathLength::Finite(w) => Some(w),
            PathLength::Infinite => None,
        }
    }
}

impl From<Weight> for PathLength {
    fn from(value: Weight) -> Self {
        PathLength::Finite(value)
    }
}

/// Computes the total length of `path` by accumulating the weights of
/// consecutive edges.
///
/// Returns [`PathLength::Infinite`] if some consecutive pair of towns has no
/// edge, or as soon as the running sum strictly exceeds `bound`. Passing the
/// best known tour length as `bound` prunes candidates that cannot improve on
/// it without summing them to the end; pass [`PathLength::Infinite`] to
/// disable pruning.
///
/// Paths with fewer than two stops have no edges and cost `Finite(0)`.
pub fn evaluate_path(
    graph: &impl WeightedAdjacency,
    path: &[Town],
    bound: PathLength,
) -> PathLength {
    let mut length: Weight = 0;

    for pair in path.windows(2) {
        match graph.weight_between(pair[0], pair[1]) {
            Some(weight) => length += weight,
            None => return PathLength::Infinite,
        }

        if PathLength::Finite(length) > bound {
            return PathLength::Infinite;
        }
    }

    PathLength::Finite(length)
}
