//! Page View Widget
//! Draws the active page: heading, bullet text and, on chart pages, the chart
//! bound to the page's surface.

use crate::charts::{ChartPlotter, LiveChart};
use crate::config::PageContent;
use egui::{Color32, RichText, ScrollArea, Sense};

const CHART_HEIGHT: f32 = 380.0;
const MAX_CONTENT_WIDTH: f32 = 960.0;

pub struct PageView;

impl PageView {
    /// `chart` is the chart currently bound to this page's surface; a chart
    /// page without one shows a spinner until provisioning runs.
    pub fn show(
        ui: &mut egui::Ui,
        page: &PageContent,
        chart: Option<&LiveChart>,
        scroll_to_top: bool,
    ) {
        ScrollArea::vertical()
            .id_salt("page_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let (top, _) =
                    ui.allocate_exact_size(egui::vec2(ui.available_width(), 0.0), Sense::hover());
                if scroll_to_top {
                    ui.scroll_to_rect(top, Some(egui::Align::TOP));
                }

                ui.vertical_centered(|ui| {
                    ui.set_max_width(MAX_CONTENT_WIDTH);
                    ui.add_space(24.0);

                    ui.label(RichText::new(&page.title).size(30.0).strong());
                    if let Some(subtitle) = &page.subtitle {
                        ui.add_space(4.0);
                        ui.label(RichText::new(subtitle).size(17.0).color(Color32::GRAY));
                    }
                    ui.add_space(20.0);

                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        for bullet in &page.bullets {
                            ui.label(RichText::new(format!("•  {}", bullet)).size(16.0));
                            ui.add_space(4.0);
                        }

                        if page.chart.is_some() {
                            ui.add_space(16.0);
                            Self::draw_chart_card(ui, chart);
                        }
                    });
                    ui.add_space(24.0);
                });
            });
    }

    fn draw_chart_card(ui: &mut egui::Ui, chart: Option<&LiveChart>) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(16.0)
            .show(ui, |ui| match chart {
                Some(chart) => {
                    ui.label(RichText::new(chart.spec.title).size(18.0).strong());
                    ui.add_space(8.0);
                    ChartPlotter::draw(ui, chart, CHART_HEIGHT);
                }
                None => {
                    ui.set_min_height(CHART_HEIGHT);
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
            });
    }
}
