//! Marketing Deck Main Application
//! Main window with header, table of contents, page view and navigation bar.

use crate::charts::{ChartProvisioner, PlotBackend};
use crate::config::DeckConfig;
use crate::deck::{DeckScreen, DeckView, Navigator};
use crate::gui::{NavAction, NavBar, PageView, Sidebar, SidebarAction};
use crate::ppt::PptGenerator;
use egui::{Color32, RichText};
use std::time::Instant;
use tracing::{info, warn};

/// Main application window.
pub struct DeckApp {
    config: DeckConfig,
    navigator: Navigator<DeckScreen, PlotBackend>,
    status: String,
}

impl DeckApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DeckConfig) -> Self {
        let screen = DeckScreen::new(config.pages.len());
        let backend = PlotBackend::new(config.chart_surfaces());
        let mut navigator = Navigator::new(screen, ChartProvisioner::new(backend))
            .with_delay(config.provision_delay());
        navigator.start();

        Self {
            config,
            navigator,
            status: String::new(),
        }
    }

    /// Export every page to a .pptx chosen by the user.
    fn handle_export_ppt(&mut self) {
        // Ask user for output location
        let output_path = match rfd::FileDialog::new()
            .add_filter("PowerPoint", &["pptx"])
            .set_file_name("marketing_report.pptx")
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        let result = PptGenerator::slides_from_config(&self.config).and_then(|slides| {
            PptGenerator::generate_deck(&slides, &output_path, &self.config.title)
                .map(|()| slides.len())
        });

        match result {
            Ok(count) => {
                self.status = format!("PPT exported: {} slides", count);
                if self.config.open_after_export {
                    if let Err(e) = open::that(&output_path) {
                        warn!(error = %e, "could not open exported deck");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "PPT export failed");
                self.status = format!("PPT error: {}", e);
            }
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        let mut export = false;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button(RichText::new("☰").size(18.0)).on_hover_text("Contents").clicked() {
                    self.navigator.toggle_sidebar();
                }
                ui.label(RichText::new(&self.config.title).size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("📄 Export PPT").clicked() {
                        export = true;
                    }
                    if !self.status.is_empty() {
                        let color = if self.status.contains("error") {
                            Color32::from_rgb(220, 80, 80)
                        } else {
                            Color32::from_rgb(100, 200, 100)
                        };
                        ui.label(RichText::new(&self.status).color(color));
                    }
                });
            });
            ui.add_space(4.0);
        });

        if export {
            self.handle_export_ppt();
        }
    }

    fn show_sidebar(&mut self, ctx: &egui::Context, now: Instant) {
        let open = self.navigator.view().sidebar_open();
        let current = self.navigator.current_page();
        let mut action = SidebarAction::None;

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(260.0)
            .show_animated(ctx, open, |ui| {
                action = Sidebar::show(ui, &self.config.pages, current);
            });

        match action {
            SidebarAction::JumpTo(page) => {
                self.navigator.jump_to(page, now);
            }
            SidebarAction::Close => self.navigator.close_sidebar(),
            SidebarAction::None => {}
        }
    }

    fn show_nav_bar(&mut self, ctx: &egui::Context, now: Instant) {
        let mut action = NavAction::None;

        egui::TopBottomPanel::bottom("nav_bar").show(ctx, |ui| {
            action = NavBar::show(ui, self.navigator.view().affordances());
        });

        match action {
            NavAction::Previous => {
                self.navigator.retreat(now);
            }
            NavAction::Next => {
                self.navigator.advance(now);
            }
            NavAction::None => {}
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let fired = self.navigator.run_due(now);
        if fired > 0 {
            info!(fired, "charts provisioned");
        }

        self.show_header(ctx);
        self.show_sidebar(ctx, now);
        self.show_nav_bar(ctx, now);

        // Wake up for the next delayed chart
        if let Some(due) = self.navigator.next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(now));
        }

        let scroll_to_top = self.navigator.view_mut().take_scroll_request();
        let active = self.navigator.view().active_page();

        egui::CentralPanel::default().show(ctx, |ui| {
            match active.and_then(|index| self.config.page(index)) {
                Some(page) => {
                    let chart = page
                        .chart
                        .and_then(|kind| self.navigator.provisioner().chart(kind.surface()));
                    PageView::show(ui, page, chart, scroll_to_top);
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new("This page has no content").color(Color32::GRAY));
                    });
                }
            }
        });
    }
}
