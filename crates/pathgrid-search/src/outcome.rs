use std::fmt;

use pathgrid_core::Pos;

/// How a search run ended. None of these is a failure: an exhausted
/// frontier simply means the goal cannot be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// A shortest route, in travel order. The start is left out and the goal
    /// is the last element, so the length equals the number of moves.
    Found(Vec<Pos>),
    /// Every reachable cell was expanded without meeting the goal.
    Exhausted,
    /// The cancellation predicate returned `true`.
    Cancelled,
}

impl SearchResult {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The route when one was found.
    pub fn path(&self) -> Option<&[Pos]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(path) => write!(f, "found ({} steps)", path.len()),
            Self::Exhausted => write!(f, "exhausted"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Counters for one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped from the frontier.
    pub expanded: usize,
    /// Cells inserted into the frontier (the start included).
    pub pushed: usize,
    /// Strict improvements of a neighbor's `g`.
    pub relaxed: usize,
}

/// A search call whose arguments break its preconditions. The run is
/// rejected before any cell is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal lies outside the grid.
    OutOfBounds(Pos),
    /// Start or goal is a wall.
    Blocked(Pos),
    /// Walls changed since the last `recompute_neighbors`.
    StaleNeighbors,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "search: endpoint {p} out of bounds"),
            Self::Blocked(p) => write!(f, "search: endpoint {p} is a wall"),
            Self::StaleNeighbors => {
                write!(f, "search: walls changed since neighbors were computed")
            }
        }
    }
}

impl std::error::Error for SearchError {}
