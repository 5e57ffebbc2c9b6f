mod common;

use common::{is_valid_path, optimal_cost};
use grid_astar::{
    distance, get_path_cost, heuristic, search, Coordinate, Endpoint, OccupancyGrid,
    PreconditionError, SearchOutcome,
};
use std::f64::consts::SQRT_2;

fn c(row: i32, col: i32) -> Coordinate {
    Coordinate::new(row, col)
}

const MAZE: [[i32; 8]; 9] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [0, 0, 0, 1, 1, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

#[test]
fn euclidean_costs() {
    assert_eq!(distance(c(0, 0), c(3, 4)), 5.0);
    assert_eq!(heuristic(c(0, 0), c(0, 0)), 0.0);
}

#[test]
fn out_of_bounds_endpoints_fail() {
    let grid = OccupancyGrid::from_rows(&[[0]]).unwrap();
    for (start, goal, endpoint) in [
        (c(1, 0), c(0, 0), Endpoint::Start),
        (c(0, -1), c(0, 0), Endpoint::Start),
        (c(0, 0), c(1, 0), Endpoint::Goal),
        (c(0, 0), c(0, 1), Endpoint::Goal),
        (c(0, 0), c(-3, 0), Endpoint::Goal),
    ] {
        match search(start, goal, &grid) {
            Err(PreconditionError::OutOfBounds {
                endpoint: e,
                position,
                ..
            }) => {
                assert_eq!(e, endpoint);
                let expected = if endpoint == Endpoint::Start { start } else { goal };
                assert_eq!(position, expected);
            }
            other => panic!("expected out of bounds error, got {other:?}"),
        }
    }
}

#[test]
fn empty_grid_fails() {
    let no_rows: Vec<Vec<i32>> = vec![];
    let no_cols: Vec<Vec<i32>> = vec![vec![]; 3];
    for rows in [no_rows, no_cols] {
        let grid = OccupancyGrid::from_rows(&rows).unwrap();
        assert!(matches!(
            search(c(0, 0), c(0, 0), &grid),
            Err(PreconditionError::EmptyGrid { .. })
        ));
    }
}

#[test]
fn trivial_path() {
    for value in [0, 1] {
        let grid = OccupancyGrid::from_rows(&[[0, 0], [0, value]]).unwrap();
        let outcome = search(c(1, 1), c(1, 1), &grid).unwrap();
        assert_eq!(outcome.path(), Some(vec![c(1, 1)]));
    }
}

#[test]
fn diagonal_shortcut_is_optimal() {
    let grid = OccupancyGrid::from_rows(&[[0, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
    let handle = search(c(0, 0), c(2, 2), &grid)
        .unwrap()
        .into_handle()
        .unwrap();
    assert_eq!(handle.path(), vec![c(0, 0), c(1, 1), c(2, 2)]);
    assert!((handle.cost() - 2.0 * SQRT_2).abs() < 1e-12);
}

#[test]
fn blocked_column_has_no_path() {
    let grid = OccupancyGrid::from_rows(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
    let outcome = search(c(0, 0), c(0, 2), &grid).unwrap();
    assert!(matches!(outcome, SearchOutcome::NoPath));
}

#[test]
fn maze_path_is_optimal() {
    let grid = OccupancyGrid::from_rows(&MAZE).unwrap();
    let (start, goal) = (c(0, 0), c(8, 7));
    let path = search(start, goal, &grid).unwrap().path().unwrap();
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert!(is_valid_path(&grid, &path));
    let optimum = optimal_cost(&grid, start, goal).unwrap();
    assert!((get_path_cost(&path) - optimum).abs() < 1e-9);
    assert!((optimum - (7.0 + 4.0 * SQRT_2)).abs() < 1e-9);
    assert_eq!(path.len(), 12);
}

#[test]
fn enclosed_goal_has_no_path() {
    let grid = OccupancyGrid::from_rows(&[
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 1, 0, 1, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();
    let outcome = search(c(0, 0), c(2, 2), &grid).unwrap();
    assert!(matches!(outcome, SearchOutcome::NoPath));

    // Goal in a corner, walled in by the border and blocked cells
    let grid = OccupancyGrid::from_rows(&[[0, 0, 0], [0, 1, 1], [0, 1, 0]]).unwrap();
    let outcome = search(c(0, 0), c(2, 2), &grid).unwrap();
    assert!(!outcome.is_found());
}

#[test]
fn repeated_searches_agree() {
    let grid = OccupancyGrid::from_rows(&MAZE).unwrap();
    let first = search(c(0, 0), c(8, 7), &grid).unwrap().path();
    let second = search(c(0, 0), c(8, 7), &grid).unwrap().path();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn parent_chain_walks_back_to_start() {
    let grid = OccupancyGrid::from_rows(&MAZE).unwrap();
    let handle = search(c(0, 0), c(8, 7), &grid)
        .unwrap()
        .into_handle()
        .unwrap();
    let chain: Vec<_> = handle.parent_chain().collect();
    assert_eq!(chain.first().map(|n| n.position), Some(c(8, 7)));
    assert_eq!(chain.last().map(|n| n.position), Some(c(0, 0)));
    assert_eq!(chain.last().and_then(|n| n.parent()), None);
    // g only grows along the path and h vanishes at the goal
    assert!(chain.windows(2).all(|w| w[0].g > w[1].g));
    assert_eq!(handle.goal_node().h, 0.0);
    assert!(chain.iter().all(|n| (n.f - (n.g + n.h)).abs() < 1e-12));
}

#[test]
fn shared_grid_across_threads() {
    let grid = OccupancyGrid::from_rows(&MAZE).unwrap();
    let expected = search(c(0, 0), c(8, 7), &grid).unwrap().path();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| search(c(0, 0), c(8, 7), &grid).unwrap().path()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
