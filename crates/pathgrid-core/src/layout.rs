//! Text layouts: build a [`Grid`] from ASCII art and render it back.
//!
//! One character per cell, rows separated by `'\n'`:
//!
//! | glyph | role |
//! |---|---|
//! | `.` | `Empty` |
//! | `S` | `Start` |
//! | `G` | `Goal` |
//! | `#` | `Wall` |
//! | `o` | `Frontier` |
//! | `x` | `Visited` |
//! | `*` | `Path` |
//!
//! Leading/trailing whitespace of the whole string is trimmed, but not of
//! individual lines.

use std::fmt;

use crate::cell::Role;
use crate::geom::Pos;
use crate::grid::{Grid, GridError};

impl Grid {
    /// Parse a square layout. Neighbor sets are up to date on return.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(GridError::InconsistentSize { row: row as i32 });
            }
        }
        if rows != cols {
            return Err(GridError::NotSquare { rows, cols });
        }

        let mut grid = Grid::new(rows)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                let role = Role::from_glyph(ch).ok_or(GridError::InvalidRune { ch, pos })?;
                let taken = match role {
                    Role::Start => grid.start().is_some(),
                    Role::Goal => grid.goal().is_some(),
                    _ => false,
                };
                if taken {
                    return Err(GridError::DuplicateEndpoint { role, pos });
                }
                grid.set_role(pos, role)?;
            }
        }
        grid.recompute_neighbors();
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side() as usize;
        for (i, c) in self.iter().enumerate() {
            if i > 0 && i % side == 0 {
                writeln!(f)?;
            }
            write!(f, "{}", c.role().glyph())?;
        }
        Ok(())
    }
}
