use crate::coordinate::Coordinate;
use itertools::Itertools;

pub mod astar;

/// Cost of moving between two cells: the straight-line distance between their centres, so an
/// orthogonal step costs 1 and a diagonal step `sqrt(2)`.
pub fn distance(source: Coordinate, destination: Coordinate) -> f64 {
    source.euclidean_distance(&destination)
}

/// Estimated remaining cost from `position` to `goal`. Uses the same metric as [distance], which
/// makes it admissible and consistent on the 8-connected grid.
pub fn heuristic(position: Coordinate, goal: Coordinate) -> f64 {
    position.euclidean_distance(&goal)
}

/// Sums [distance] over consecutive cells of a path.
pub fn get_path_cost(path: &[Coordinate]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| distance(*a, *b))
        .sum()
}

/// Tunables for [AstarSolver](astar::AstarSolver). The default runs an unbounded search without
/// any pre-check, which always terminates on a finite grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Give up with [SearchOutcome::Aborted](crate::SearchOutcome::Aborted) after expanding
    /// this many nodes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_expansions: Option<usize>,
    /// Report [SearchOutcome::NoPath](crate::SearchOutcome::NoPath) right away when start and
    /// goal lie in different connected components of the grid.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skip_unreachable: bool,
}

impl SearchConfig {
    pub fn with_max_expansions(mut self, max_expansions: usize) -> SearchConfig {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_skip_unreachable(mut self, skip_unreachable: bool) -> SearchConfig {
        self.skip_unreachable = skip_unreachable;
        self
    }
}
