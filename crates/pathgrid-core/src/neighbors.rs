/// The traversable neighbors of one cell, stored as flat cell indices.
///
/// Holds at most four entries (4-directional movement), so it lives inline
/// without a heap allocation per cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    buf: [usize; 4],
    len: u8,
}

impl Neighbors {
    /// An empty neighbor set.
    pub const fn new() -> Self {
        Self {
            buf: [0; 4],
            len: 0,
        }
    }

    /// Append `idx`. Silently ignores a fifth entry.
    #[inline]
    pub(crate) fn push(&mut self, idx: usize) {
        if (self.len as usize) < self.buf.len() {
            self.buf[self.len as usize] = idx;
            self.len += 1;
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.buf[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.as_slice().contains(&idx)
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.as_slice().iter().copied()
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
