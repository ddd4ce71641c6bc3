use log::{debug, trace, warn};
use pathgrid_core::{Grid, Pos, Role};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::outcome::{SearchError, SearchResult, SearchStats};
use crate::reconstruct::reconstruct;
use crate::scores::{ScoreTables, UNREACHABLE};

/// A* search engine.
///
/// `AStar` owns the per-run state (score tables, frontier, predecessor
/// links), all flat arrays indexed by grid cell index. The state is reset at
/// the start of every [`run`](Self::run) and kept afterwards for inspection,
/// so a cancelled run can be examined and one engine can serve many runs
/// without reallocating.
#[derive(Debug, Default)]
pub struct AStar {
    side: i32,
    scores: ScoreTables,
    frontier: Frontier,
    parent: Vec<Option<usize>>,
    stats: SearchStats,
}

impl AStar {
    /// Create an engine with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a shortest route from `start` to `goal` on `grid`.
    ///
    /// `on_settle` runs after each expanded cell and after each step of path
    /// reconstruction; it may read the grid but must not re-enter the
    /// search. `is_cancelled` is polled once per expansion, before the next
    /// cell is popped; returning `true` stops the run with
    /// [`SearchResult::Cancelled`].
    ///
    /// Expanded cells become `Visited`, queued cells `Frontier` and the route
    /// `Path`. The `start` and `goal` cells keep their roles. Marks are not
    /// rolled back on cancellation; call
    /// [`Grid::reset_search_roles`] before the next run.
    ///
    /// Fails without touching anything if an endpoint is off-grid or a wall,
    /// or if walls changed since [`Grid::recompute_neighbors`].
    pub fn run<S, C>(
        &mut self,
        grid: &mut Grid,
        start: Pos,
        goal: Pos,
        mut on_settle: S,
        mut is_cancelled: C,
    ) -> Result<SearchResult, SearchError>
    where
        S: FnMut(&Grid),
        C: FnMut() -> bool,
    {
        let (start_idx, goal_idx) = match check_preconditions(grid, start, goal) {
            Ok(ends) => ends,
            Err(e) => {
                warn!("rejecting search {start} -> {goal}: {e}");
                return Err(e);
            }
        };

        self.prepare(grid);
        debug!("a* {start} -> {goal} on {0}x{0} grid", grid.side());

        self.scores.set(start_idx, 0, manhattan(start, goal));
        self.frontier.insert(start_idx, self.scores.f(start_idx));
        self.stats.pushed += 1;

        let result = 'search: loop {
            if self.frontier.is_empty() {
                break 'search SearchResult::Exhausted;
            }
            if is_cancelled() {
                break 'search SearchResult::Cancelled;
            }
            let Some(ci) = self.frontier.pop() else {
                break 'search SearchResult::Exhausted;
            };
            self.stats.expanded += 1;

            if ci == goal_idx {
                let path = reconstruct(grid, &self.parent, goal_idx, &mut on_settle);
                break 'search SearchResult::Found(path);
            }

            let current_g = self.scores.g(ci);
            trace!("expand {} g={current_g} f={}", grid.pos(ci), self.scores.f(ci));

            let neighbors = *grid.neighbors(ci);
            for ni in &neighbors {
                let tentative_g = current_g + 1;
                if tentative_g >= self.scores.g(ni) {
                    continue;
                }
                let f = tentative_g + manhattan(grid.pos(ni), goal);
                self.parent[ni] = Some(ci);
                self.scores.set(ni, tentative_g, f);
                self.stats.relaxed += 1;

                if self.frontier.contains(ni) {
                    self.frontier.reprioritize(ni, f);
                } else {
                    self.frontier.insert(ni, f);
                    self.stats.pushed += 1;
                    if ni != goal_idx {
                        grid.mark(ni, Role::Frontier);
                    }
                }
            }

            on_settle(grid);

            if ci != start_idx {
                grid.mark(ci, Role::Visited);
            }
        };

        debug!(
            "a* {start} -> {goal}: {result} (expanded {}, pushed {}, relaxed {})",
            self.stats.expanded, self.stats.pushed, self.stats.relaxed
        );
        Ok(result)
    }

    fn prepare(&mut self, grid: &Grid) {
        let len = grid.len();
        self.side = grid.side();
        self.scores.reset(len);
        self.frontier.reset(len);
        self.parent.clear();
        self.parent.resize(len, None);
        self.stats = SearchStats::default();
    }

    fn idx(&self, p: Pos) -> Option<usize> {
        if !p.in_square(self.side) {
            return None;
        }
        Some(p.row as usize * self.side as usize + p.col as usize)
    }

    // -----------------------------------------------------------------------
    // Inspection of the last run
    // -----------------------------------------------------------------------

    /// Best known cost from the start to `p`, or [`UNREACHABLE`].
    pub fn g_score(&self, p: Pos) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.scores.g(i))
    }

    /// Estimated total cost through `p`, or [`UNREACHABLE`].
    pub fn f_score(&self, p: Pos) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.scores.f(i))
    }

    /// Number of cells with a known route.
    pub fn scored_cells(&self) -> usize {
        self.scores.known()
    }

    /// The cell `p` was last reached from.
    pub fn predecessor(&self, p: Pos) -> Option<Pos> {
        let i = self.idx(p)?;
        let prev = self.parent[i]?;
        let side = self.side as usize;
        Some(Pos::new((prev / side) as i32, (prev % side) as i32))
    }

    /// Whether `p` is queued in the frontier.
    pub fn in_frontier(&self, p: Pos) -> bool {
        self.idx(p).is_some_and(|i| self.frontier.contains(i))
    }

    /// Number of cells queued in the frontier.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

fn check_preconditions(
    grid: &Grid,
    start: Pos,
    goal: Pos,
) -> Result<(usize, usize), SearchError> {
    if grid.neighbors_stale() {
        return Err(SearchError::StaleNeighbors);
    }
    let mut ends = [0usize; 2];
    for (slot, p) in ends.iter_mut().zip([start, goal]) {
        let i = grid.idx(p).ok_or(SearchError::OutOfBounds(p))?;
        if grid.cell(i).is_wall() {
            return Err(SearchError::Blocked(p));
        }
        *slot = i;
    }
    Ok((ends[0], ends[1]))
}

/// Run a one-off A* search. See [`AStar::run`].
pub fn search<S, C>(
    grid: &mut Grid,
    start: Pos,
    goal: Pos,
    on_settle: S,
    is_cancelled: C,
) -> Result<SearchResult, SearchError>
where
    S: FnMut(&Grid),
    C: FnMut() -> bool,
{
    AStar::new().run(grid, start, goal, on_settle, is_cancelled)
}
