//! Positional list abstraction implemented by the crate's sequence types.

/// Ordered sequence with positional access.
///
/// Every operation is permissive: an out-of-range index yields `None` (for
/// reads and removals) or is clamped (for insertion) instead of failing.
/// Callers that need a hard error layer it on top, the way
/// [`Scoreboard::remove`](crate::board::Scoreboard::remove) does.
pub trait List<E> {
    /// First element, or `None` when empty.
    fn first(&self) -> Option<&E>;

    /// Last element, or `None` when empty.
    fn last(&self) -> Option<&E>;

    /// Prepend `element`.
    fn add_first(&mut self, element: E);

    /// Append `element`.
    fn add_last(&mut self, element: E);

    /// Remove and return the first element.
    fn remove_first(&mut self) -> Option<E>;

    /// Remove and return the last element.
    fn remove_last(&mut self) -> Option<E>;

    /// Insert `element` so that it ends up at `index`.
    ///
    /// An index at or past the end appends.
    fn insert(&mut self, element: E, index: usize);

    /// Remove and return the element at `index`, or `None` when out of bounds.
    fn remove(&mut self, index: usize) -> Option<E>;

    /// Element at `index`, or `None` when out of bounds.
    fn get(&self, index: usize) -> Option<&E>;

    /// Number of stored elements.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
