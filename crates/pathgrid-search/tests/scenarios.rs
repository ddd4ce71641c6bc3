use std::collections::VecDeque;
use std::time::Instant;

use pathgrid_core::{Grid, Pos, Role};
use pathgrid_search::{AStar, SearchResult, UNREACHABLE, cancel, manhattan, search};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn quiet(_: &Grid) {}

fn never() -> bool {
    false
}

/// Shortest step count by plain BFS over positions, ignoring the grid's
/// cached neighbor sets.
fn brute_force(grid: &Grid, from: Pos, to: Pos) -> Option<usize> {
    let side = grid.side() as usize;
    let mut dist = vec![usize::MAX; side * side];
    let at = |p: Pos| p.row as usize * side + p.col as usize;
    let mut queue = VecDeque::from([from]);
    dist[at(from)] = 0;
    while let Some(p) = queue.pop_front() {
        if p == to {
            return Some(dist[at(p)]);
        }
        for n in p.neighbors_4() {
            if !grid.contains(n) || grid.cell_at(n).unwrap().is_wall() {
                continue;
            }
            if dist[at(n)] != usize::MAX {
                continue;
            }
            dist[at(n)] = dist[at(p)] + 1;
            queue.push_back(n);
        }
    }
    None
}

#[test]
fn five_by_five_open_grid() {
    let mut g = Grid::new(5).unwrap();
    g.set_role(Pos::new(0, 0), Role::Start).unwrap();
    g.set_role(Pos::new(4, 4), Role::Goal).unwrap();
    let r = search(&mut g, Pos::new(0, 0), Pos::new(4, 4), quiet, never).unwrap();
    let path = r.path().unwrap();
    assert_eq!(path.len(), 8);
    assert_eq!(path.last(), Some(&Pos::new(4, 4)));
    // 7 interior cells on one monotone staircase
    assert_eq!(g.count(Role::Path), 7);
    let mut prev = Pos::new(0, 0);
    for &p in path {
        let step = p - prev;
        assert!(step == Pos::new(1, 0) || step == Pos::new(0, 1));
        prev = p;
    }
}

#[test]
fn wall_column_blocks_three_by_three() {
    let mut g = Grid::new(3).unwrap();
    for row in 0..3 {
        g.set_role(Pos::new(row, 1), Role::Wall).unwrap();
    }
    g.recompute_neighbors();
    let r = search(&mut g, Pos::new(0, 0), Pos::new(2, 2), quiet, never).unwrap();
    assert_eq!(r, SearchResult::Exhausted);
    assert_eq!(g.count(Role::Path), 0);
}

#[test]
fn start_equals_goal() {
    let mut g = Grid::new(4).unwrap();
    g.set_role(Pos::new(2, 1), Role::Start).unwrap();
    let mut engine = AStar::new();
    let r = engine
        .run(&mut g, Pos::new(2, 1), Pos::new(2, 1), quiet, never)
        .unwrap();
    assert_eq!(r, SearchResult::Found(vec![]));
    assert_eq!(g.count(Role::Frontier), 0);
    assert_eq!(g.count(Role::Visited), 0);
    assert_eq!(g.count(Role::Path), 0);
    assert!(g.cell_at(Pos::new(2, 1)).unwrap().is_start());
    assert_eq!(engine.stats().expanded, 1);
}

#[test]
fn cancelled_before_first_iteration() {
    let mut g = Grid::new(5).unwrap();
    let start = Pos::new(1, 1);
    let goal = Pos::new(3, 4);
    let mut engine = AStar::new();
    let r = engine.run(&mut g, start, goal, quiet, || true).unwrap();
    assert_eq!(r, SearchResult::Cancelled);
    assert_eq!(engine.scored_cells(), 1);
    assert_eq!(engine.g_score(start), 0);
    assert_eq!(engine.f_score(start), manhattan(start, goal));
    assert_eq!(engine.frontier_len(), 1);
    assert!(engine.in_frontier(start));
    for n in start.neighbors_4() {
        assert_eq!(engine.g_score(n), UNREACHABLE);
        assert_eq!(engine.predecessor(n), None);
    }
    assert_eq!(engine.stats().relaxed, 0);
    assert_eq!(g.count(Role::Empty), 25);
}

#[test]
fn cancelled_mid_run_leaves_marks() {
    let mut g = Grid::new(8).unwrap();
    let r = search(
        &mut g,
        Pos::new(0, 0),
        Pos::new(7, 7),
        quiet,
        cancel::after_polls(3),
    )
    .unwrap();
    assert_eq!(r, SearchResult::Cancelled);
    assert!(g.count(Role::Visited) > 0);
    assert!(g.count(Role::Frontier) > 0);
    assert_eq!(g.count(Role::Path), 0);
}

#[test]
fn expired_deadline_cancels() {
    let mut g = Grid::new(4).unwrap();
    let r = search(
        &mut g,
        Pos::new(0, 0),
        Pos::new(3, 3),
        quiet,
        cancel::deadline(Instant::now()),
    )
    .unwrap();
    assert_eq!(r, SearchResult::Cancelled);
}

#[test]
fn enclosed_goal_is_exhausted() {
    let mut g = Grid::from_ascii(
        "\
S......
.......
...#...
..#G#..
...#...
.......
.......",
    )
    .unwrap();
    let (start, goal) = g.endpoints().unwrap();
    let r = search(&mut g, start, goal, quiet, never).unwrap();
    assert_eq!(r, SearchResult::Exhausted);
    assert_eq!(g.count(Role::Path), 0);
    assert_eq!(g.count(Role::Frontier), 0);
    // everything outside the enclosure except the start was expanded
    assert_eq!(g.count(Role::Visited), 49 - 4 - 1 - 1);
    assert!(g.cell_at(goal).unwrap().is_goal());
}

#[test]
fn open_grid_path_length_is_manhattan() {
    let side = 6;
    for a in 0..side * side {
        for b in [0, side * side - 1, side * 2 + 3, a / 2] {
            let start = Pos::new(a / side, a % side);
            let goal = Pos::new(b / side, b % side);
            let mut g = Grid::new(side).unwrap();
            let r = search(&mut g, start, goal, quiet, never).unwrap();
            assert_eq!(
                r.path().map(|p| p.len() as i32),
                Some(manhattan(start, goal)),
                "{start} -> {goal}"
            );
        }
    }
}

#[test]
fn matches_brute_force_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut engine = AStar::new();
    for _ in 0..200 {
        let side = rng.random_range(2..10);
        let mut g = Grid::new(side).unwrap();
        for row in 0..side {
            for col in 0..side {
                if rng.random_bool(0.3) {
                    g.set_role(Pos::new(row, col), Role::Wall).unwrap();
                }
            }
        }
        let start = Pos::new(rng.random_range(0..side), rng.random_range(0..side));
        let goal = Pos::new(rng.random_range(0..side), rng.random_range(0..side));
        g.clear_role(start).unwrap();
        g.clear_role(goal).unwrap();
        g.recompute_neighbors();

        let expected = brute_force(&g, start, goal);
        let r = engine.run(&mut g, start, goal, quiet, never).unwrap();
        match expected {
            Some(len) => assert_eq!(r.path().map(<[Pos]>::len), Some(len), "\n{g}"),
            None => assert_eq!(r, SearchResult::Exhausted, "\n{g}"),
        }
        assert_eq!(
            pathgrid_search::bfs_distance(&g, start, goal).map(|d| d as usize),
            expected
        );
    }
}

#[test]
fn reset_then_rerun_is_idempotent() {
    let mut g = Grid::from_ascii(
        "\
S....
.###.
...#.
.#...
.#..G",
    )
    .unwrap();
    let (start, goal) = g.endpoints().unwrap();
    let first = search(&mut g, start, goal, quiet, never).unwrap();
    let marked = g.to_string();

    g.reset_search_roles();
    assert_eq!(g.count(Role::Frontier) + g.count(Role::Visited) + g.count(Role::Path), 0);
    assert_eq!(g.count(Role::Wall), 6);
    assert_eq!(g.endpoints(), Some((start, goal)));
    assert_eq!(
        g.count(Role::Empty),
        g.len() - g.count(Role::Wall) - 2
    );

    let second = search(&mut g, start, goal, quiet, never).unwrap();
    assert_eq!(first, second);
    assert_eq!(g.to_string(), marked);
}

#[test]
fn frontier_never_holds_a_cell_twice() {
    let mut g = Grid::from_ascii(
        "\
S.......
.######.
........
.######.
........
.######.
........
.......G",
    )
    .unwrap();
    let (start, goal) = g.endpoints().unwrap();
    let mut engine = AStar::new();
    let mut budget = 0;
    // Cancel after an increasing number of expansions and check the queue
    // at every stopping point.
    loop {
        budget += 1;
        g.reset_search_roles();
        let r = engine
            .run(&mut g, start, goal, quiet, cancel::after_polls(budget))
            .unwrap();
        let members = g
            .iter()
            .filter(|c| engine.in_frontier(c.pos()))
            .count();
        assert_eq!(members, engine.frontier_len());
        let marked = g.count(Role::Frontier) + usize::from(engine.in_frontier(goal));
        assert_eq!(marked, engine.frontier_len());
        assert!(engine.stats().pushed <= g.len());
        if r != SearchResult::Cancelled {
            assert!(r.is_found());
            break;
        }
    }
}
