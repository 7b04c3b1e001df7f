//! Deck module - Page navigation and chart scheduling

pub mod navigator;
pub mod scheduler;
pub mod state;
pub mod view;

pub use navigator::{Navigator, DEFAULT_PROVISION_DELAY};
pub use scheduler::{PendingProvision, ProvisionScheduler};
pub use state::{Affordances, DeckState, TOTAL_PAGES};
pub use view::{DeckScreen, DeckView};
