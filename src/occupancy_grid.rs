use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::debug;
use num_traits::Zero;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::coordinate::Coordinate;
use crate::error::{PreconditionError, Result};

/// Offsets to the neighbours with a larger index. Visiting only these from every cell links each
/// pair of adjacent free cells exactly once.
const FORWARD_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

/// [OccupancyGrid] holds the raw occupancy values in a [BoolGrid] (blocked is [true]) together
/// with the connected components of its free cells, stored in a [UnionFind]. The grid is fixed
/// after construction, so the components never go stale.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    grid: BoolGrid,
    components: UnionFind<usize>,
}

impl Default for OccupancyGrid {
    fn default() -> OccupancyGrid {
        OccupancyGrid::free(0, 0)
    }
}

impl OccupancyGrid {
    /// A grid of the given size without obstacles.
    pub fn free(rows: usize, cols: usize) -> OccupancyGrid {
        OccupancyGrid::from_bool_grid(BoolGrid::new(cols, rows, false))
    }

    /// Builds a grid from row-major cell values where zero marks a free cell and anything else
    /// an obstacle. All rows must have the same length.
    pub fn from_rows<T, R>(rows: &[R]) -> Result<OccupancyGrid>
    where
        T: Zero,
        R: AsRef<[T]>,
    {
        let n_cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = BoolGrid::new(n_cols, rows.len(), false);
        for (row_ix, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_cols {
                return Err(PreconditionError::RaggedRow {
                    row: row_ix,
                    len: row.len(),
                    expected: n_cols,
                });
            }
            for (col_ix, value) in row.iter().enumerate() {
                let cell = Coordinate::new(row_ix as i32, col_ix as i32);
                grid.set_point(Point::from(cell), !value.is_zero());
            }
        }
        Ok(OccupancyGrid::from_bool_grid(grid))
    }

    /// Wraps an existing [BoolGrid] whose width is the column count and height the row count.
    pub fn from_bool_grid(grid: BoolGrid) -> OccupancyGrid {
        let mut occupancy = OccupancyGrid {
            components: UnionFind::new(grid.width() * grid.height()),
            grid,
        };
        occupancy.generate_components();
        occupancy
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }

    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    pub fn in_bounds(&self, c: &Coordinate) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as usize) < self.rows() && (c.col as usize) < self.cols()
    }

    /// Whether the cell is an obstacle. Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, c: &Coordinate) -> bool {
        !self.in_bounds(c) || self.grid.get_point(Point::from(*c))
    }

    pub fn can_move_to(&self, c: &Coordinate) -> bool {
        !self.is_blocked(c)
    }

    /// The free, in-bounds Moore neighbours of `c`, in neighbourhood order.
    pub fn neighbours(&self, c: &Coordinate) -> SmallVec<[Coordinate; 8]> {
        c.moore_neighborhood()
            .into_iter()
            .filter(|n| self.can_move_to(n))
            .collect()
    }

    fn get_ix(&self, c: &Coordinate) -> usize {
        c.row as usize * self.cols() + c.col as usize
    }

    /// Retrieves the component id a given [Coordinate] belongs to, [None] if out of bounds.
    pub fn get_component(&self, c: &Coordinate) -> Option<usize> {
        self.in_bounds(c)
            .then(|| self.components.find(self.get_ix(c)))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Blocked cells are their own
    /// component, so only identical blocked endpoints are reachable from each other.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }

    /// Links every pair of adjacent free cells in a fresh [UnionFind].
    fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} grid",
            self.rows(),
            self.cols()
        );
        let mut components = UnionFind::new(self.rows() * self.cols());
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                let cell = Coordinate::new(row, col);
                if self.is_blocked(&cell) {
                    continue;
                }
                let cell_ix = self.get_ix(&cell);
                for (d_row, d_col) in FORWARD_OFFSETS {
                    let n = cell.offset(d_row, d_col);
                    if self.can_move_to(&n) {
                        components.union(cell_ix, self.get_ix(&n));
                    }
                }
            }
        }
        self.components = components;
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in 0..self.rows() as i32 {
            let values = (0..self.cols() as i32)
                .map(|col| self.grid.get_point(Coordinate::new(row, col).into()) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
