use std::collections::VecDeque;

use pathgrid_core::{Grid, Pos};

use crate::scores::UNREACHABLE;

/// Breadth-first step counts from `from` to every cell, indexed like the
/// grid. Unreached cells (and every cell when `from` is off-grid) hold
/// [`UNREACHABLE`].
///
/// Uses the grid's current neighbor sets, like the A* search.
pub fn distance_map(grid: &Grid, from: Pos) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; grid.len()];
    let Some(si) = grid.idx(from) else {
        return dist;
    };
    dist[si] = 0;
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        for ni in grid.neighbors(ci) {
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
        }
    }
    dist
}

/// Length of a shortest route from `from` to `to`, or `None` if there is
/// none.
pub fn bfs_distance(grid: &Grid, from: Pos, to: Pos) -> Option<i32> {
    let ti = grid.idx(to)?;
    let d = distance_map(grid, from)[ti];
    (d != UNREACHABLE).then_some(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_distance_is_manhattan() {
        let g = Grid::new(5).unwrap();
        assert_eq!(bfs_distance(&g, Pos::new(0, 0), Pos::new(4, 4)), Some(8));
        assert_eq!(bfs_distance(&g, Pos::new(2, 2), Pos::new(2, 2)), Some(0));
    }

    #[test]
    fn detour_around_wall() {
        let g = Grid::from_ascii(
            "\
S#.
.#.
...",
        )
        .unwrap();
        assert_eq!(bfs_distance(&g, Pos::new(0, 0), Pos::new(0, 2)), Some(6));
    }

    #[test]
    fn blocked_and_off_grid() {
        let g = Grid::from_ascii(
            "\
.#.
.#.
.#.",
        )
        .unwrap();
        assert_eq!(bfs_distance(&g, Pos::new(0, 0), Pos::new(2, 2)), None);
        assert_eq!(bfs_distance(&g, Pos::new(9, 9), Pos::new(0, 0)), None);
        assert_eq!(bfs_distance(&g, Pos::new(0, 0), Pos::new(9, 9)), None);
        let map = distance_map(&g, Pos::new(0, 0));
        assert_eq!(map.iter().filter(|&&d| d != UNREACHABLE).count(), 3);
    }
}
