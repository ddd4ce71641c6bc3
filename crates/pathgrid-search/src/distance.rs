use pathgrid_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// Exact remaining cost on an open 4-connected grid with unit steps, so it is
/// both admissible and consistent.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
