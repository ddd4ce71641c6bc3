//! Editing actions for an interactive front end.
//!
//! A front end maps its primary action (left click, space on a cursor...) to
//! [`Grid::place`] and its secondary action to [`Grid::erase`]. The first
//! placements pick the start and goal; later ones draw walls.

use crate::cell::Role;
use crate::geom::Pos;
use crate::grid::{Grid, GridError};

impl Grid {
    /// Primary edit action on the cell at `p`.
    ///
    /// - no start yet and `p` is not the goal: `p` becomes `Start`;
    /// - otherwise no goal yet and `p` is not the start: `p` becomes `Goal`;
    /// - otherwise, if `p` is neither endpoint: `p` becomes `Wall`.
    ///
    /// Returns the role assigned, or `None` when `p` is an endpoint and was
    /// left alone.
    pub fn place(&mut self, p: Pos) -> Result<Option<Role>, GridError> {
        let role = self.cell_at(p)?.role();
        let is_start = role == Role::Start;
        let is_goal = role == Role::Goal;
        let next = if self.start().is_none() && !is_goal {
            Role::Start
        } else if self.goal().is_none() && !is_start {
            Role::Goal
        } else if !is_start && !is_goal {
            Role::Wall
        } else {
            return Ok(None);
        };
        self.set_role(p, next)?;
        Ok(Some(next))
    }

    /// Secondary edit action: reset the cell at `p` to `Empty`.
    pub fn erase(&mut self, p: Pos) -> Result<(), GridError> {
        self.clear_role(p)
    }
}
