//! Page visibility collaborator.
//!
//! [`DeckView`] is what the navigator drives: page active flags, navigation
//! controls, scroll position and the sidebar. [`DeckScreen`] is the
//! in-memory implementation the GUI renders from.

use crate::deck::state::Affordances;

pub trait DeckView {
    /// Number of page elements present.
    fn page_count(&self) -> usize;

    /// Set the active flag of page `index`. Returns `false` if no such page
    /// exists.
    fn set_page_active(&mut self, index: usize, active: bool) -> bool;

    /// Apply button enabled states and the position label.
    fn apply_affordances(&mut self, affordances: &Affordances);

    /// Request an animated scroll to the top of the page.
    fn scroll_to_top(&mut self);

    fn sidebar_open(&self) -> bool;

    fn set_sidebar_open(&mut self, open: bool);
}

/// Page visibility state for the egui shell.
#[derive(Debug, Clone, Default)]
pub struct DeckScreen {
    active: Vec<bool>,
    affordances: Affordances,
    scroll_requested: bool,
    sidebar_open: bool,
}

impl DeckScreen {
    pub fn new(page_count: usize) -> Self {
        Self {
            active: vec![false; page_count],
            ..Self::default()
        }
    }

    /// Index of the active page. `None` before navigation starts.
    pub fn active_page(&self) -> Option<usize> {
        self.active.iter().position(|&a| a)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn affordances(&self) -> &Affordances {
        &self.affordances
    }

    /// Consume a pending scroll request.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}

impl DeckView for DeckScreen {
    fn page_count(&self) -> usize {
        self.active.len()
    }

    fn set_page_active(&mut self, index: usize, active: bool) -> bool {
        match self.active.get_mut(index) {
            Some(slot) => {
                *slot = active;
                true
            }
            None => false,
        }
    }

    fn apply_affordances(&mut self, affordances: &Affordances) {
        self.affordances = affordances.clone();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_requested = true;
    }

    fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }
}
