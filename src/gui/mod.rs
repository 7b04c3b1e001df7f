//! GUI module - User interface components

mod app;
mod nav_bar;
mod page_view;
mod sidebar;

pub use app::DeckApp;
pub use nav_bar::{NavAction, NavBar};
pub use page_view::PageView;
pub use sidebar::{Sidebar, SidebarAction};
