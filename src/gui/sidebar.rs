//! Sidebar Widget
//! Table of contents; selecting an entry jumps to that page.

use crate::config::PageContent;
use egui::{RichText, ScrollArea};

pub struct Sidebar;

impl Sidebar {
    pub fn show(ui: &mut egui::Ui, pages: &[PageContent], current: usize) -> SidebarAction {
        let mut action = SidebarAction::None;

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Contents").size(16.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✖").clicked() {
                    action = SidebarAction::Close;
                }
            });
        });
        ui.separator();

        ScrollArea::vertical().show(ui, |ui| {
            for (index, page) in pages.iter().enumerate() {
                let text = RichText::new(format!("{}. {}", index + 1, page.title)).size(14.0);
                if ui.selectable_label(index == current, text).clicked() {
                    action = SidebarAction::JumpTo(index);
                }
                ui.add_space(2.0);
            }
        });

        action
    }
}

/// Actions triggered by the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    JumpTo(usize),
    Close,
}
