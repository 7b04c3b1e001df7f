//! Navigation Bar Widget
//! Bottom bar with previous/next buttons and the page position.

use crate::deck::Affordances;
use egui::{Color32, RichText};

/// Bottom navigation bar.
pub struct NavBar;

impl NavBar {
    /// Draw the bar. Buttons follow the affordances' enabled flags.
    pub fn show(ui: &mut egui::Ui, affordances: &Affordances) -> NavAction {
        let mut action = NavAction::None;

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let prev = egui::Button::new(RichText::new("◀ Previous").size(14.0))
                .min_size(egui::vec2(120.0, 30.0));
            if ui.add_enabled(affordances.previous_enabled, prev).clicked() {
                action = NavAction::Previous;
            }

            ui.add_space(12.0);
            ui.label(
                RichText::new(&affordances.position_label)
                    .size(14.0)
                    .color(Color32::GRAY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let next = egui::Button::new(RichText::new("Next ▶").size(14.0))
                    .min_size(egui::vec2(120.0, 30.0));
                if ui.add_enabled(affordances.next_enabled, next).clicked() {
                    action = NavAction::Next;
                }
            });
        });
        ui.add_space(6.0);

        action
    }
}

/// Actions triggered by the navigation bar
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    None,
    Previous,
    Next,
}
