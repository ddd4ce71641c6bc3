//! The [`Grid`] type — a square board of [`Cell`]s with derived neighbor
//! sets.
//!
//! Every cell gets a stable flat index (`row * side + col`) when the grid is
//! built. Per-cell data kept outside the grid (score tables, predecessor
//! links, frontier membership) is stored in flat arrays addressed by that
//! index.

use std::fmt;

use crate::cell::{Cell, Role};
use crate::geom::Pos;
use crate::neighbors::Neighbors;

/// A square grid of cells.
///
/// Holds at most one `Start` and at most one `Goal`; assigning either role
/// moves it off its previous holder.
#[derive(Debug, Clone)]
pub struct Grid {
    side: i32,
    cells: Vec<Cell>,
    neighbors: Vec<Neighbors>,
    start: Option<usize>,
    goal: Option<usize>,
    /// Walls changed since the neighbor sets were last rebuilt.
    stale: bool,
}

impl Grid {
    /// Build a `side` x `side` grid with every cell `Empty`.
    ///
    /// Neighbor sets are computed for the empty board, so a fresh grid can
    /// be searched right away.
    pub fn new(side: i32) -> Result<Self, GridError> {
        if side <= 0 {
            return Err(GridError::InvalidSize(side));
        }
        let len = (side as usize) * (side as usize);
        let mut cells = Vec::with_capacity(len);
        for row in 0..side {
            for col in 0..side {
                cells.push(Cell::new(Pos::new(row, col)));
            }
        }
        let mut grid = Self {
            side,
            cells,
            neighbors: vec![Neighbors::new(); len],
            start: None,
            goal: None,
            stale: true,
        };
        grid.recompute_neighbors();
        Ok(grid)
    }

    /// Side length.
    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Number of cells (`side * side`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.in_square(self.side)
    }

    // -----------------------------------------------------------------------
    // Index helpers
    // -----------------------------------------------------------------------

    /// Flat index of `p`, or `None` if outside the grid.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.side as usize + p.col as usize)
    }

    /// Position of the cell with flat index `idx`.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        self.cells[idx].pos()
    }

    fn checked_idx(&self, p: Pos) -> Result<usize, GridError> {
        self.idx(p).ok_or(GridError::OutOfBounds(p))
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`.
    pub fn cell_at(&self, p: Pos) -> Result<&Cell, GridError> {
        let i = self.checked_idx(p)?;
        Ok(&self.cells[i])
    }

    /// The cell with flat index `idx`. Panics if `idx >= len()`.
    #[inline]
    pub fn cell(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells currently holding `role`.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role() == role).count()
    }

    /// Position of the `Start` cell, if any.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start.map(|i| self.pos(i))
    }

    /// Position of the `Goal` cell, if any.
    #[inline]
    pub fn goal(&self) -> Option<Pos> {
        self.goal.map(|i| self.pos(i))
    }

    /// `(start, goal)` when both are set.
    pub fn endpoints(&self) -> Option<(Pos, Pos)> {
        Some((self.start()?, self.goal()?))
    }

    // -----------------------------------------------------------------------
    // Role mutation
    // -----------------------------------------------------------------------

    /// Give the cell at `p` a new role.
    ///
    /// Assigning `Start` or `Goal` clears the previous holder of that role.
    /// Overwriting a `Start` or `Goal` cell with another role releases the
    /// designation.
    pub fn set_role(&mut self, p: Pos, role: Role) -> Result<(), GridError> {
        let i = self.checked_idx(p)?;
        self.assign(i, role);
        Ok(())
    }

    /// Reset the cell at `p` to `Empty`, releasing a `Start`/`Goal`
    /// designation it held.
    pub fn clear_role(&mut self, p: Pos) -> Result<(), GridError> {
        self.set_role(p, Role::Empty)
    }

    /// Turn every `Frontier`, `Visited` and `Path` cell back to `Empty`.
    /// Walls and endpoints are kept.
    pub fn reset_search_roles(&mut self) {
        for c in self.cells.iter_mut() {
            if c.role().is_search_mark() {
                c.set_role(Role::Empty);
            }
        }
    }

    /// Apply a search visualization role (`Frontier`, `Visited`, `Path`) to
    /// the cell with flat index `idx`.
    ///
    /// Endpoints and walls are never overwritten, so a finished search leaves
    /// `Start` and `Goal` where they were and the neighbor sets valid.
    pub fn mark(&mut self, idx: usize, role: Role) {
        debug_assert!(role.is_search_mark(), "mark() takes search roles only");
        let c = &mut self.cells[idx];
        if c.role().is_endpoint() || c.is_wall() {
            return;
        }
        c.set_role(role);
    }

    fn assign(&mut self, i: usize, role: Role) {
        let old = self.cells[i].role();
        if old == role {
            return;
        }
        match old {
            Role::Start => self.start = None,
            Role::Goal => self.goal = None,
            _ => {}
        }
        match role {
            Role::Start => {
                if let Some(prev) = self.start.replace(i) {
                    self.cells[prev].set_role(Role::Empty);
                }
            }
            Role::Goal => {
                if let Some(prev) = self.goal.replace(i) {
                    self.cells[prev].set_role(Role::Empty);
                }
            }
            _ => {}
        }
        if (old == Role::Wall) != (role == Role::Wall) {
            self.stale = true;
        }
        self.cells[i].set_role(role);
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Rebuild every cell's traversable neighbor set: the edge-adjacent cells
    /// that are not walls, in the order below, above, right, left.
    pub fn recompute_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let mut set = Neighbors::new();
            for np in self.cells[i].pos().neighbors_4() {
                if let Some(ni) = self.idx(np) {
                    if !self.cells[ni].is_wall() {
                        set.push(ni);
                    }
                }
            }
            self.neighbors[i] = set;
        }
        self.stale = false;
        log::trace!(
            "recomputed neighbors for {}x{} grid ({} walls)",
            self.side,
            self.side,
            self.count(Role::Wall)
        );
    }

    /// Traversable neighbors of the cell with flat index `idx`, as of the
    /// last [`recompute_neighbors`](Self::recompute_neighbors).
    #[inline]
    pub fn neighbors(&self, idx: usize) -> &Neighbors {
        &self.neighbors[idx]
    }

    /// Traversable neighbors of the cell at `p`.
    pub fn neighbors_of(&self, p: Pos) -> Result<&Neighbors, GridError> {
        let i = self.checked_idx(p)?;
        Ok(&self.neighbors[i])
    }

    /// Whether walls changed since neighbor sets were last rebuilt.
    #[inline]
    pub fn neighbors_stale(&self) -> bool {
        self.stale
    }
}

/// Errors raised by grid construction and coordinate access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Side length was zero or negative.
    InvalidSize(i32),
    /// Position lies outside the grid.
    OutOfBounds(Pos),
    /// A layout row has a different width than the first one.
    InconsistentSize { row: i32 },
    /// A layout holds a row count different from its column count.
    NotSquare { rows: i32, cols: i32 },
    /// A layout contains a character with no role.
    InvalidRune { ch: char, pos: Pos },
    /// A layout names a second `Start` or `Goal`.
    DuplicateEndpoint { role: Role, pos: Pos },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "grid: invalid side length {n}"),
            Self::OutOfBounds(p) => write!(f, "grid: position {p} out of bounds"),
            Self::InconsistentSize { row } => {
                write!(f, "grid layout: row {row} has inconsistent width")
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "grid layout: {rows} rows by {cols} columns is not square")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid layout: invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateEndpoint { role, pos } => {
                write!(f, "grid layout: second {role:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
