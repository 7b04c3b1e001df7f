//! Deck State Module
//! Current page index and the navigation affordances derived from it.

/// Number of pages in the deck.
pub const TOTAL_PAGES: usize = 11;

/// Enabled/disabled state of the navigation controls and the position text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordances {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub position_label: String,
}

impl Default for Affordances {
    fn default() -> Self {
        DeckState::default().affordances()
    }
}

/// Which page is showing. Always a valid index into the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckState {
    current: usize,
    total: usize,
}

impl Default for DeckState {
    fn default() -> Self {
        Self {
            current: 0,
            total: TOTAL_PAGES,
        }
    }
}

impl DeckState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// Move one page forward. Returns the new index, or `None` on the last page.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_last() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Move one page back. Returns the new index, or `None` on the first page.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.is_first() {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Jump to `target`. Out-of-range targets leave the state untouched.
    pub fn jump_to(&mut self, target: usize) -> Option<usize> {
        if target >= self.total {
            return None;
        }
        self.current = target;
        Some(self.current)
    }

    pub fn affordances(&self) -> Affordances {
        Affordances {
            previous_enabled: !self.is_first(),
            next_enabled: !self.is_last(),
            position_label: format!("Page {} of {}", self.current + 1, self.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_no_ops() {
        let mut state = DeckState::new();
        assert_eq!(state.retreat(), None);
        assert_eq!(state.current(), 0);

        assert_eq!(state.jump_to(TOTAL_PAGES - 1), Some(10));
        assert_eq!(state.advance(), None);
        assert_eq!(state.current(), 10);
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut state = DeckState::new();
        state.jump_to(3);
        assert_eq!(state.jump_to(TOTAL_PAGES), None);
        assert_eq!(state.jump_to(usize::MAX), None);
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn affordances_follow_index() {
        let mut state = DeckState::new();
        let first = state.affordances();
        assert!(!first.previous_enabled);
        assert!(first.next_enabled);
        assert_eq!(first.position_label, "Page 1 of 11");

        state.jump_to(10);
        let last = state.affordances();
        assert!(last.previous_enabled);
        assert!(!last.next_enabled);
        assert_eq!(last.position_label, "Page 11 of 11");
    }
}
