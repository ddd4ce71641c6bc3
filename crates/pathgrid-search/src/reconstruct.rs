use pathgrid_core::{Grid, Pos, Role};

/// Walk the predecessor chain back from `goal` and return the route in
/// travel order, start excluded and goal included.
///
/// Every cell strictly between start and goal is marked `Path`, and
/// `on_step` runs once per link so the route can be drawn progressively.
pub(crate) fn reconstruct<S>(
    grid: &mut Grid,
    parent: &[Option<usize>],
    goal: usize,
    on_step: &mut S,
) -> Vec<Pos>
where
    S: FnMut(&Grid),
{
    let mut path = Vec::new();
    let mut cur = goal;
    while let Some(prev) = parent[cur] {
        path.push(grid.pos(cur));
        // Only the start has no predecessor.
        if parent[prev].is_some() {
            grid.mark(prev, Role::Path);
        }
        on_step(grid);
        cur = prev;
    }
    path.reverse();
    path
}
