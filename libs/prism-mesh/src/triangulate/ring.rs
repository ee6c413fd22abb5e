//! Working set of boundary points that have not been clipped yet.

/// Circular doubly linked list over the original point indices.
///
/// Links live in two fixed arrays indexed by original point index, so removal
/// is O(1) and the surviving points keep their original boundary order. A
/// removed index keeps its stale links and must not be passed back in.
#[derive(Debug, Clone)]
pub(crate) struct RemainingPoints {
    prev: Vec<usize>,
    next: Vec<usize>,
    len: usize,
}

impl RemainingPoints {
    /// Creates a ring over `0..n` in order.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            next: (0..n).map(|i| (i + 1) % n).collect(),
            len: n,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn prev(&self, index: usize) -> usize {
        self.prev[index]
    }

    #[inline]
    pub(crate) fn next(&self, index: usize) -> usize {
        self.next[index]
    }

    /// Unlinks `index` from the ring.
    pub(crate) fn remove(&mut self, index: usize) {
        let (before, after) = (self.prev[index], self.next[index]);
        self.next[before] = after;
        self.prev[after] = before;
        self.len -= 1;
    }

    /// Remaining indices in ring order, starting at `start`.
    pub(crate) fn iter_from(&self, start: usize) -> impl Iterator<Item = usize> + '_ {
        let mut current = start;
        (0..self.len).map(move |_| {
            let index = current;
            current = self.next[current];
            index
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_links() {
        let ring = RemainingPoints::new(4);
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.prev(0), 3);
        assert_eq!(ring.next(3), 0);
        assert_eq!(ring.iter_from(2).collect::<Vec<_>>(), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_ring_remove_keeps_order() {
        let mut ring = RemainingPoints::new(5);
        ring.remove(2);
        ring.remove(0);
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.iter_from(1).collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(ring.prev(1), 4);
        assert_eq!(ring.next(1), 3);
    }
}
