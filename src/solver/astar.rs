use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::astar::{astar, SearchOutcome};
use crate::coordinate::Coordinate;
use crate::error::{Endpoint, PreconditionError, Result};
use crate::occupancy_grid::OccupancyGrid;
use crate::solver::{distance, heuristic, SearchConfig};

/// A* over the 8-connected free cells of an [OccupancyGrid], with Euclidean step costs and
/// heuristic. Holds no per-search state, so one solver can serve any number of searches.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SearchConfig,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_config(config: SearchConfig) -> AstarSolver {
        AstarSolver { config }
    }

    /// The free neighbours of `node` with their step costs. A blocked cell has no successors, so
    /// a search starting on an obstacle never leaves it.
    fn successors(&self, grid: &OccupancyGrid, node: &Coordinate) -> SmallVec<[(Coordinate, f64); 8]> {
        if grid.is_blocked(node) {
            return SmallVec::new();
        }
        grid.neighbours(node)
            .into_iter()
            .map(|n| (n, distance(*node, n)))
            .collect()
    }

    /// Verifies that the grid is non-empty and both endpoints lie on it.
    pub fn check_preconditions(
        &self,
        grid: &OccupancyGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<()> {
        if grid.is_empty() {
            return Err(PreconditionError::EmptyGrid {
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        for (endpoint, position) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !grid.in_bounds(&position) {
                return Err(PreconditionError::OutOfBounds {
                    endpoint,
                    position,
                    rows: grid.rows(),
                    cols: grid.cols(),
                });
            }
        }
        Ok(())
    }

    /// Computes a shortest path from start to goal. Fails only when the request itself is
    /// invalid; an unreachable goal yields [SearchOutcome::NoPath].
    pub fn search(
        &self,
        grid: &OccupancyGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<SearchOutcome> {
        self.check_preconditions(grid, start, goal)?;
        debug!("Searching path from {} to {}", start, goal);

        if self.config.skip_unreachable && start != goal && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(SearchOutcome::NoPath);
        }

        let outcome = astar(
            &start,
            |node| self.successors(grid, node),
            |point| heuristic(*point, goal),
            |point| *point == goal,
            self.config.max_expansions,
        );
        match &outcome {
            SearchOutcome::Found(handle) => info!(
                "Found path from {} to {} with cost {:.3} after {} expansions",
                start,
                goal,
                handle.cost(),
                handle.expansions()
            ),
            SearchOutcome::NoPath => info!("No path from {} to {}", start, goal),
            SearchOutcome::Aborted { expansions } => warn!(
                "Search from {} to {} aborted after {} expansions",
                start, goal, expansions
            ),
        }
        Ok(outcome)
    }

    /// Like [search](Self::search) but returns the materialised path directly.
    pub fn get_path_single_goal(
        &self,
        grid: &OccupancyGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Option<Vec<Coordinate>>> {
        Ok(self.search(grid, start, goal)?.path())
    }
}
