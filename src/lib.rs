//! Marketing Deck - an eleven page marketing report presented as a slide deck,
//! with interactive charts and PowerPoint export.

pub mod charts;
pub mod config;
pub mod deck;
pub mod gui;
pub mod ppt;
pub mod telemetry;
