use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

/// Row/column offsets of the Moore neighbourhood, in the order neighbours are generated.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// A cell on the grid addressed by row and column. Two coordinates are the same search state
/// exactly when both components match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Coordinate {
        Coordinate { row, col }
    }

    pub const fn offset(&self, d_row: i32, d_col: i32) -> Coordinate {
        Coordinate::new(self.row + d_row, self.col + d_col)
    }

    /// All 8 neighbours in [MOORE_OFFSETS] order, including ones that fall outside any grid.
    pub fn moore_neighborhood(&self) -> SmallVec<[Coordinate; 8]> {
        MOORE_OFFSETS
            .iter()
            .map(|&(d_row, d_col)| self.offset(d_row, d_col))
            .collect()
    }

    /// Straight-line distance between the cell centres.
    pub fn euclidean_distance(&self, other: &Coordinate) -> f64 {
        let d_row = self.row as f64 - other.row as f64;
        let d_col = self.col as f64 - other.col as f64;
        (d_row * d_row + d_col * d_col).sqrt()
    }

    /// Number of king moves between the two cells.
    pub fn move_distance(&self, other: &Coordinate) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Coordinate {
        Coordinate::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> (i32, i32) {
        (c.row, c.col)
    }
}

/// Columns map to `x` and rows to `y`, matching the width/height layout of the backing grid.
impl From<Point> for Coordinate {
    fn from(p: Point) -> Coordinate {
        Coordinate::new(p.y, p.x)
    }
}

impl From<Coordinate> for Point {
    fn from(c: Coordinate) -> Point {
        Point::new(c.col, c.row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
