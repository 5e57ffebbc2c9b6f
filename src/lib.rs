//! # grid_astar
//!
//! Shortest paths on a 2D occupancy grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Cells are either free or blocked and
//! movement is allowed in all 8 directions. Steps cost their
//! [Euclidean length](https://en.wikipedia.org/wiki/Euclidean_distance), 1 for orthogonal moves
//! and `sqrt(2)` for diagonal ones, and the same metric guides the search, so the first path found
//! is optimal.
//!
//! ```
//! use grid_astar::{search, Coordinate, OccupancyGrid, SearchOutcome};
//!
//! let grid = OccupancyGrid::from_rows(&[[0, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
//! match search(Coordinate::new(0, 0), Coordinate::new(2, 2), &grid).unwrap() {
//!     SearchOutcome::Found(handle) => assert_eq!(handle.path().len(), 4),
//!     SearchOutcome::NoPath | SearchOutcome::Aborted { .. } => unreachable!(),
//! }
//! ```
pub mod astar;
pub mod coordinate;
pub mod error;
pub mod occupancy_grid;
pub mod solver;

pub use crate::astar::{PathHandle, SearchNode, SearchOutcome};
pub use crate::coordinate::Coordinate;
pub use crate::error::{Endpoint, PreconditionError, Result};
pub use crate::occupancy_grid::OccupancyGrid;
pub use crate::solver::astar::AstarSolver;
pub use crate::solver::{distance, get_path_cost, heuristic, SearchConfig};

/// Searches a shortest path from `start` to `goal` with the default [SearchConfig].
///
/// Returns an error if the grid is empty or either endpoint lies outside it. Otherwise the
/// outcome is either [SearchOutcome::Found], whose handle reconstructs the path, or
/// [SearchOutcome::NoPath].
pub fn search(start: Coordinate, goal: Coordinate, grid: &OccupancyGrid) -> Result<SearchOutcome> {
    AstarSolver::new().search(grid, start, goal)
}
