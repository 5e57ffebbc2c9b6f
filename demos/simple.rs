use grid_astar::{search, Coordinate, OccupancyGrid, SearchOutcome};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S    |
// |  ## |
// | #   |
// | ##  |
// |    E|
//  _____
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighborhood

fn main() -> grid_astar::Result<()> {
    let grid = OccupancyGrid::from_rows(&[
        [0, 0, 0, 0, 0],
        [0, 0, 1, 1, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ])?;
    println!("{}", grid);
    let start = Coordinate::new(0, 0);
    let end = Coordinate::new(4, 4);
    match search(start, end, &grid)? {
        SearchOutcome::Found(handle) => {
            println!("Path (cost {:.3}):", handle.cost());
            for p in handle.path() {
                println!("{}", p);
            }
        }
        SearchOutcome::NoPath | SearchOutcome::Aborted { .. } => println!("No path found"),
    }
    Ok(())
}
