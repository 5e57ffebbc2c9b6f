use grid_astar::{distance, Coordinate, OccupancyGrid};
use petgraph::algo::dijkstra;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// Cost of the cheapest 8-connected route between two free cells, computed with petgraph's
/// Dijkstra on an explicit graph of the free cells.
#[allow(dead_code)]
pub fn optimal_cost(grid: &OccupancyGrid, start: Coordinate, goal: Coordinate) -> Option<f64> {
    let mut graph: UnGraph<Coordinate, f64> = UnGraph::new_undirected();
    let mut indices = HashMap::new();
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let cell = Coordinate::new(row, col);
            if grid.can_move_to(&cell) {
                indices.insert(cell, graph.add_node(cell));
            }
        }
    }
    for (cell, &ix) in &indices {
        for n in grid.neighbours(cell) {
            if *cell < n {
                graph.add_edge(ix, indices[&n], distance(*cell, n));
            }
        }
    }
    let start_ix = *indices.get(&start)?;
    let goal_ix = *indices.get(&goal)?;
    let costs = dijkstra(&graph, start_ix, Some(goal_ix), |e| *e.weight());
    costs.get(&goal_ix).copied()
}

/// Checks that consecutive cells are adjacent and every cell is free.
#[allow(dead_code)]
pub fn is_valid_path(grid: &OccupancyGrid, path: &[Coordinate]) -> bool {
    path.iter().all(|c| grid.can_move_to(c))
        && path.windows(2).all(|w| w[0].move_distance(&w[1]) == 1)
}

#[allow(dead_code)]
pub fn visualize_grid(grid: &OccupancyGrid, start: &Coordinate, end: &Coordinate) {
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let c = Coordinate::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if grid.is_blocked(&c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}
