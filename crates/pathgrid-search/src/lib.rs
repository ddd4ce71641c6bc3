//! Cancellable A* search over a [`pathgrid_core::Grid`].
//!
//! The engine finds a minimum-cost route between two cells under
//! 4-directional unit-cost movement, marking cells as it goes so a front end
//! can animate the frontier:
//!
//! - [`search`] / [`AStar::run`]: the best-first search, with a redraw hook
//!   and a polled cancellation predicate
//! - [`manhattan`]: the admissible, consistent heuristic it uses
//! - [`Frontier`] and [`ScoreTables`]: the open set and cost bookkeeping,
//!   flat arrays indexed by grid cell index
//! - [`bfs_distance`] / [`distance_map`]: plain breadth-first distances
//! - [`cancel`]: ready-made cancellation predicates (deadlines, poll budgets)
//!
//! # Example
//!
//! ```
//! use pathgrid_core::{Grid, Pos};
//! use pathgrid_search::{search, SearchResult};
//!
//! let mut grid = Grid::new(5).unwrap();
//! let result = search(&mut grid, Pos::new(0, 0), Pos::new(4, 4), |_| {}, || false).unwrap();
//! assert_eq!(result.path().map(|p| p.len()), Some(8));
//! ```

mod astar;
mod bfs;
pub mod cancel;
mod distance;
mod frontier;
mod outcome;
mod reconstruct;
mod scores;

pub use astar::{AStar, search};
pub use bfs::{bfs_distance, distance_map};
pub use distance::manhattan;
pub use frontier::Frontier;
pub use outcome::{SearchError, SearchResult, SearchStats};
pub use scores::{ScoreTables, UNREACHABLE};
