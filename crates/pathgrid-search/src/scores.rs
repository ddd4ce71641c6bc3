/// Sentinel meaning "no known route" in the score tables.
pub const UNREACHABLE: i32 = i32::MAX;

/// Best-known cost from the start (`g`) and estimated total cost (`f`) per
/// cell, addressed by flat cell index.
#[derive(Debug, Clone, Default)]
pub struct ScoreTables {
    g: Vec<i32>,
    f: Vec<i32>,
}

impl ScoreTables {
    /// Forget every score and size the tables for `len` cells.
    pub fn reset(&mut self, len: usize) {
        self.g.clear();
        self.g.resize(len, UNREACHABLE);
        self.f.clear();
        self.f.resize(len, UNREACHABLE);
    }

    #[inline]
    pub fn g(&self, idx: usize) -> i32 {
        self.g[idx]
    }

    #[inline]
    pub fn f(&self, idx: usize) -> i32 {
        self.f[idx]
    }

    /// Record a route of cost `g` to `idx` with estimate `f`.
    #[inline]
    pub fn set(&mut self, idx: usize, g: i32, f: i32) {
        self.g[idx] = g;
        self.f[idx] = f;
    }

    /// Number of cells with a finite `g`.
    pub fn known(&self) -> usize {
        self.g.iter().filter(|&&g| g != UNREACHABLE).count()
    }
}
