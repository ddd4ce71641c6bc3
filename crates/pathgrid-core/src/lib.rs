//! **pathgrid-core** — the board model for interactive shortest-path search.
//!
//! This crate provides the types every other pathgrid crate builds on:
//! grid coordinates, cells and their roles, a square grid with derived
//! traversable-neighbor sets, editing actions for front ends, and a text
//! layout format.

pub mod cell;
mod edit;
pub mod geom;
pub mod grid;
mod layout;
mod neighbors;

pub use cell::{Cell, Role};
pub use geom::Pos;
pub use grid::{Grid, GridError};
pub use neighbors::Neighbors;
