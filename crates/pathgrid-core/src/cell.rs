//! The [`Cell`] type — one grid position and its [`Role`].

use std::hash::{Hash, Hasher};

use crate::geom::Pos;

/// What a cell currently is. Exactly one role applies at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Empty,
    Start,
    Goal,
    Wall,
    /// Discovered and queued, not yet expanded.
    Frontier,
    /// Expanded (closed).
    Visited,
    /// Part of the reconstructed route.
    Path,
}

impl Role {
    /// Roles written by a search run. [`Grid::reset_search_roles`] clears
    /// exactly these.
    ///
    /// [`Grid::reset_search_roles`]: crate::Grid::reset_search_roles
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Role::Frontier | Role::Visited | Role::Path)
    }

    /// `Start` or `Goal`.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Role::Start | Role::Goal)
    }

    /// Text glyph used by the ASCII layout format and `Display`.
    pub const fn glyph(self) -> char {
        match self {
            Role::Empty => '.',
            Role::Start => 'S',
            Role::Goal => 'G',
            Role::Wall => '#',
            Role::Frontier => 'o',
            Role::Visited => 'x',
            Role::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Role> {
        Some(match ch {
            '.' => Role::Empty,
            'S' => Role::Start,
            'G' => Role::Goal,
            '#' => Role::Wall,
            'o' => Role::Frontier,
            'x' => Role::Visited,
            '*' => Role::Path,
            _ => return None,
        })
    }
}

/// A single grid position with a mutable role.
///
/// Identity is the position: two cells compare equal when their positions
/// match, whatever their roles. Roles are changed through [`Grid`] so the
/// start/goal invariant holds.
///
/// [`Grid`]: crate::Grid
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    role: Role,
}

impl Cell {
    #[inline]
    pub(crate) const fn new(pos: Pos) -> Self {
        Self {
            pos,
            role: Role::Empty,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    // --- role predicates ---

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.role == Role::Empty
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.role == Role::Goal
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.role == Role::Wall
    }

    #[inline]
    pub fn is_frontier(&self) -> bool {
        self.role == Role::Frontier
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.role == Role::Visited
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.role == Role::Path
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}
