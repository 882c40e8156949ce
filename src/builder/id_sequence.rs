use std::cell::Cell;
use std::rc::Rc;

/// Source of unique, increasing identifiers.
///
/// This is a shared handle: clones draw from the same counter, which is how a
/// pull request hands its comment sequence to every review and thread it
/// creates. Use [`IdSequence::new`] for an independent sequence.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: Rc<Cell<u64>>,
}

impl IdSequence {
    /// First identifier issued by a default sequence.
    pub const FIRST_ID: u64 = 1;

    pub fn new() -> Self {
        Self::starting_at(Self::FIRST_ID)
    }

    /// A sequence whose first id is `first`.
    ///
    /// The counter saturates at `u64::MAX`: once reached, every further call
    /// to [`IdSequence::next_id`] returns `u64::MAX` again.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Rc::new(Cell::new(first)),
        }
    }

    /// Return the current value and advance the counter.
    pub fn next_id(&self) -> u64 {
        let id = self.next.get();
        self.next.set(id.saturating_add(1));
        id
    }

    /// The value the next call to [`IdSequence::next_id`] will return.
    pub fn peek(&self) -> u64 {
        self.next.get()
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let ids = IdSequence::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_custom_start() {
        let ids = IdSequence::starting_at(0);
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.peek(), 1);
    }

    #[test]
    fn test_saturates_at_max() {
        let ids = IdSequence::starting_at(u64::MAX - 1);
        assert_eq!(ids.next_id(), u64::MAX - 1);
        assert_eq!(ids.next_id(), u64::MAX);
        assert_eq!(ids.next_id(), u64::MAX);
        assert_eq!(ids.peek(), u64::MAX);
    }

    #[test]
    fn test_clones_share_counter() {
        let ids = IdSequence::new();
        let shared = ids.clone();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(shared.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_independent_sequences() {
        let a = IdSequence::new();
        let b = IdSequence::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), 1);
    }
}
