use gridpath_core::{Coord, Grid};
use gridpath_search::{
    Adjacency, Algorithm, PathFinder, PathResult, SearchRequest, search,
};

fn run(grid: &Grid, start: Coord, end: Coord, algorithm: Algorithm) -> PathResult {
    let req = SearchRequest::new(start, end).with_algorithm(algorithm);
    search(grid, &req).unwrap().outcome
}

fn run_map(src: &str, algorithm: Algorithm, adjacency: Adjacency) -> PathResult {
    let map = Grid::parse(src).unwrap();
    let req = SearchRequest::from_markers(map.start, map.end)
        .unwrap()
        .with_algorithm(algorithm)
        .with_adjacency(adjacency);
    search(&map.grid, &req).unwrap().outcome
}

#[test]
fn open_five_by_five() {
    let grid = Grid::new(5, 5);
    let (start, end) = (Coord::new(0, 0), Coord::new(4, 4));

    let bfs = run(&grid, start, end, Algorithm::Bfs);
    let bfs = bfs.path().unwrap();
    assert_eq!(bfs.edges(), 8);
    assert!(bfs.is_walkable(&grid, Adjacency::Four));
    // Every step moves right or down.
    for w in bfs.cells().windows(2) {
        let d = w[1] - w[0];
        assert!(d == Coord::new(1, 0) || d == Coord::new(0, 1));
    }

    let dijkstra = run(&grid, start, end, Algorithm::Dijkstra);
    assert_eq!(dijkstra.path().unwrap().cost(), 8);
    let astar = run(&grid, start, end, Algorithm::AStar);
    assert_eq!(astar.path().unwrap().cost(), 8);
}

#[test]
fn wall_with_single_gap_at_bottom() {
    let mut grid = Grid::new(5, 5);
    for r in 0..4 {
        grid.set_blocked(Coord::new(r, 2), true);
    }
    for algorithm in Algorithm::ALL {
        let result = run(&grid, Coord::new(0, 0), Coord::new(4, 4), algorithm);
        let path = result.path().unwrap();
        assert!(
            path.cells().contains(&Coord::new(4, 2)),
            "{algorithm} did not use the gap"
        );
        assert!(path.is_walkable(&grid, Adjacency::Four));
    }
}

#[test]
fn heavy_row_vs_light_detour() {
    // The straight route crosses a weight-9 cell and costs 12; the detour
    // through the top row costs 6 in six steps.
    let src = "
        .......
        .S.9.E.
        .......
    ";
    for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
        let result = run_map(src, algorithm, Adjacency::Four);
        let path = result.path().unwrap();
        assert_eq!(path.cost(), 6, "{algorithm}");
        assert!(!path.cells().contains(&Coord::new(1, 3)), "{algorithm}");
    }
    let bfs = run_map(src, Algorithm::Bfs, Adjacency::Four);
    let bfs = bfs.path().unwrap();
    assert_eq!(bfs.edges(), 4);
    assert!(bfs.cells().contains(&Coord::new(1, 3)));
    assert_eq!(bfs.cost(), 12);
}

#[test]
fn start_equals_end() {
    let grid = Grid::new(3, 3);
    let c = Coord::new(1, 2);
    for algorithm in Algorithm::ALL {
        match run(&grid, c, c, algorithm) {
            PathResult::Found(path) => {
                assert_eq!(path.cells(), &[c]);
                assert_eq!(path.cost(), 0);
                assert_eq!(path.edges(), 0);
            }
            PathResult::Unreachable => panic!("{algorithm}: start == end must be found"),
        }
    }
}

#[test]
fn enclosed_end_is_unreachable() {
    let src = "
        S....
        ..###
        ..#E#
        ..###
    ";
    for algorithm in Algorithm::ALL {
        for adjacency in [Adjacency::Four, Adjacency::Eight] {
            assert_eq!(
                run_map(src, algorithm, adjacency),
                PathResult::Unreachable,
                "{algorithm} {adjacency}"
            );
        }
    }
}

#[test]
fn diagonals_squeeze_between_blocked_corners() {
    let src = "
        S#
        #E
    ";
    assert_eq!(
        run_map(src, Algorithm::Bfs, Adjacency::Four),
        PathResult::Unreachable
    );
    let result = run_map(src, Algorithm::AStar, Adjacency::Eight);
    assert_eq!(result.path().unwrap().edges(), 1);
}

#[test]
fn eight_way_terrain_costs() {
    let src = "
        S.mmm
        .w.m.
        ..w.E
    ";
    let d = run_map(src, Algorithm::Dijkstra, Adjacency::Eight);
    let a = run_map(src, Algorithm::AStar, Adjacency::Eight);
    assert_eq!(d.path().unwrap().cost(), a.path().unwrap().cost());
    // Four diagonal-or-straight steps over weight-1 cells.
    assert_eq!(d.path().unwrap().cost(), 4);
}

#[test]
fn repeated_runs_are_identical() {
    let map = Grid::parse(
        "
        S..2....
        .##2.##.
        ..5..#..
        .#...#.E
        ",
    )
    .unwrap();
    let mut pf = PathFinder::for_grid(&map.grid);
    for algorithm in Algorithm::ALL {
        let req = SearchRequest::from_markers(map.start, map.end)
            .unwrap()
            .with_algorithm(algorithm);
        let first = pf.run(&map.grid, &req).unwrap();
        let second = pf.run(&map.grid, &req).unwrap();
        assert_eq!(first, second, "{algorithm}");
        assert_eq!(first, search(&map.grid, &req).unwrap(), "{algorithm}");
    }
}

#[test]
fn grid_edits_between_searches_are_seen() {
    let mut grid = Grid::new(3, 3);
    let (start, end) = (Coord::new(0, 0), Coord::new(0, 2));
    let mut pf = PathFinder::for_grid(&grid);
    let req = SearchRequest::new(start, end).with_algorithm(Algorithm::Dijkstra);

    let before = pf.run(&grid, &req).unwrap();
    assert_eq!(before.path().unwrap().edges(), 2);

    grid.set_blocked(Coord::new(0, 1), true);
    let after = pf.run(&grid, &req).unwrap();
    assert_eq!(after.path().unwrap().edges(), 4);
}
