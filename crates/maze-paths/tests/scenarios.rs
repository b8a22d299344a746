use std::collections::HashSet;

use maze_core::{Cell, Endpoint, ErrorKind, MazeError, Point, layout};
use maze_paths::{SearchOutcome, Strategy, Weighting, search, solve};

const STRATEGIES: [Strategy; 3] = [
    Strategy::BreadthFirst,
    Strategy::AStar(Weighting::Plain),
    Strategy::AStar(Weighting::GREEDY),
];

fn pts(v: &[(i32, i32)]) -> Vec<Point> {
    v.iter().map(|&p| Point::from(p)).collect()
}

fn rows(codes: &[&[i32]]) -> Vec<Vec<Cell>> {
    codes
        .iter()
        .map(|r| r.iter().map(|&c| Cell::from_code(c).unwrap()).collect())
        .collect()
}

#[test]
fn single_cell_start_is_goal() {
    for strategy in STRATEGIES {
        let out = solve(rows(&[&[0]]), Point::ZERO, Point::ZERO, strategy).unwrap();
        assert_eq!(out.path(), pts(&[(0, 0)]));
        assert_eq!(out.explored(), pts(&[(0, 0)]));
    }
}

#[test]
fn straight_row() {
    for strategy in STRATEGIES {
        let out = solve(
            rows(&[&[0, 0, 0]]),
            Point::new(0, 0),
            Point::new(0, 2),
            strategy,
        )
        .unwrap();
        assert_eq!(out.path(), pts(&[(0, 0), (0, 1), (0, 2)]));
    }
}

#[test]
fn detours_around_wall_column() {
    let grid = rows(&[&[0, 1, 0], &[0, 1, 0], &[0, 0, 0]]);
    for strategy in STRATEGIES {
        let out = solve(grid.clone(), Point::new(0, 0), Point::new(0, 2), strategy).unwrap();
        assert_eq!(
            out.path(),
            pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]),
            "{strategy}"
        );
        assert!(!out.path().contains(&Point::new(0, 1)));
        assert!(!out.path().contains(&Point::new(1, 1)));
    }
}

#[test]
fn start_on_wall_is_invalid_input() {
    let err = solve(
        rows(&[&[1, 0], &[0, 0]]),
        Point::new(0, 0),
        Point::new(1, 1),
        Strategy::BreadthFirst,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(
        err,
        MazeError::EndpointOnWall {
            endpoint: Endpoint::Start,
            pos: Point::new(0, 0)
        }
    );
}

#[test]
fn out_of_bounds_goal_is_invalid_input() {
    let err = solve(
        rows(&[&[0, 0]]),
        Point::new(0, 0),
        Point::new(0, 5),
        Strategy::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        MazeError::EndpointOutOfBounds {
            endpoint: Endpoint::Goal,
            ..
        }
    ));
}

#[test]
fn enclosed_goal_is_not_found() {
    let grid = layout::parse(
        "
        S....
        ..#..
        .#G#.
        ..#..
        .....",
    )
    .unwrap();
    for strategy in STRATEGIES {
        let out = search(&grid, strategy);
        assert!(matches!(out, SearchOutcome::NotFound { .. }), "{strategy}");
        assert!(out.path().is_empty());
        assert_eq!(out.explored().first(), Some(&Point::new(0, 0)));
        // Everything outside the enclosure gets expanded.
        let distinct: HashSet<_> = out.explored().iter().collect();
        assert_eq!(distinct.len(), 20);
    }
}

#[test]
fn same_maze_between_other_endpoints() {
    let grid = layout::parse("S.#\n..#\nG..").unwrap();
    let back = grid
        .clone()
        .with_endpoints(grid.goal(), grid.start())
        .unwrap();
    let there = search(&grid, Strategy::BreadthFirst);
    let home = search(&back, Strategy::BreadthFirst);
    assert_eq!(there.path().len(), home.path().len());
    assert_eq!(home.path().first(), Some(&grid.goal()));
}
