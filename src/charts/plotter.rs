//! Chart Plotter Module
//! Interactive chart drawing with egui_plot, plus the backend that binds
//! charts to the deck's surfaces.

use crate::charts::curve;
use crate::charts::registry::ChartBackend;
use crate::charts::spec::{ChartSpec, ChartType, LegendPosition, Rgba, Series};
use egui::{Color32, RichText, Sense, Stroke};
use egui_plot::{Bar, BarChart, Corner, Legend, Line, Plot, PlotPoints, Points, Polygon};
use std::collections::HashSet;
use std::f32::consts::{FRAC_PI_2, TAU};
use tracing::trace;

/// Samples per segment when drawing smoothed lines
const CURVE_STEPS: usize = 16;
/// Arc segments for a full pie
const PIE_SEGMENTS: f32 = 96.0;

/// A constructed chart, ready to draw.
#[derive(Debug, Clone)]
pub struct LiveChart {
    pub surface: String,
    pub spec: ChartSpec,
    /// Distinguishes successive charts on one surface; part of the plot id so
    /// a rebuilt chart starts with fresh zoom/drag state.
    pub generation: u64,
}

impl LiveChart {
    fn plot_id(&self) -> String {
        format!("{}_{}", self.surface, self.generation)
    }
}

/// egui backend: surfaces are the chart slots declared by the deck pages.
#[derive(Debug, Default)]
pub struct PlotBackend {
    surfaces: HashSet<String>,
    next_generation: u64,
    live: usize,
}

impl PlotBackend {
    pub fn new<I, S>(surfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            surfaces: surfaces.into_iter().map(Into::into).collect(),
            next_generation: 0,
            live: 0,
        }
    }

    /// Charts constructed and not yet disposed
    pub fn live_count(&self) -> usize {
        self.live
    }
}

impl ChartBackend for PlotBackend {
    type Chart = LiveChart;

    fn has_surface(&self, surface: &str) -> bool {
        self.surfaces.contains(surface)
    }

    fn construct(&mut self, surface: &str, spec: &ChartSpec) -> LiveChart {
        self.next_generation += 1;
        self.live += 1;
        trace!(surface, generation = self.next_generation, "construct chart");
        LiveChart {
            surface: surface.to_string(),
            spec: spec.clone(),
            generation: self.next_generation,
        }
    }

    fn dispose(&mut self, chart: LiveChart) {
        self.live = self.live.saturating_sub(1);
        trace!(surface = %chart.surface, generation = chart.generation, "dispose chart");
    }
}

/// Draws chart specs into an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color(c: Rgba) -> Color32 {
        Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }

    /// Area color under a line series, if it is filled.
    pub fn area_fill(series: &Series) -> Option<Color32> {
        series.fill.map(Self::color)
    }

    /// Draw a live chart using the available width and the given height.
    pub fn draw(ui: &mut egui::Ui, chart: &LiveChart, height: f32) {
        match chart.spec.chart_type {
            ChartType::Pie => Self::draw_pie(ui, chart, height),
            ChartType::Line => Self::draw_line(ui, chart, height),
            ChartType::HorizontalBar => Self::draw_bar(ui, chart, height),
        }
    }

    /// Pie starting at 12 o'clock, slices clockwise in label order.
    fn draw_pie(ui: &mut egui::Ui, chart: &LiveChart, height: f32) {
        let spec = &chart.spec;
        let Some(series) = spec.series.first() else {
            return;
        };
        let total: f64 = series.values.iter().sum();
        if total <= 0.0 {
            return;
        }

        if spec.legend == LegendPosition::Top {
            Self::draw_pie_legend(ui, spec);
        }

        let side = height.min(ui.available_width());
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), side), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = side / 2.0 - 4.0;
        let border = Stroke::new(series.border_width, Self::color(series.border));

        let mut spans: Vec<(f32, f32)> = Vec::with_capacity(series.values.len());
        let mut start = -FRAC_PI_2;
        for (i, &value) in series.values.iter().enumerate() {
            let sweep = (value / total) as f32 * TAU;
            let fill = series
                .colors
                .get(i)
                .copied()
                .map(Self::color)
                .unwrap_or(Color32::GRAY);

            // Split into sub-sectors of at most a quarter turn so each
            // polygon stays convex.
            let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
            let piece_sweep = sweep / pieces as f32;
            for p in 0..pieces {
                let a0 = start + p as f32 * piece_sweep;
                let segs = ((piece_sweep / TAU) * PIE_SEGMENTS).ceil().max(1.0) as usize;
                let mut points = Vec::with_capacity(segs + 2);
                points.push(center);
                for s in 0..=segs {
                    let a = a0 + piece_sweep * s as f32 / segs as f32;
                    points.push(center + radius * egui::vec2(a.cos(), a.sin()));
                }
                painter.add(egui::Shape::convex_polygon(points, fill, Stroke::NONE));
            }

            spans.push((start, start + sweep));
            start += sweep;
        }

        if series.border_width > 0.0 {
            for &(a, _) in &spans {
                let edge = center + radius * egui::vec2(a.cos(), a.sin());
                painter.line_segment([center, edge], border);
            }
            painter.circle_stroke(center, radius, border);
        }

        if let Some(pos) = response.hover_pos() {
            let d = pos - center;
            if d.length() <= radius {
                let angle = d.y.atan2(d.x);
                // Angle measured clockwise from 12 o'clock
                let rel = (angle + FRAC_PI_2).rem_euclid(TAU) - FRAC_PI_2;
                let hit = spans.iter().position(|&(a0, a1)| rel >= a0 && rel < a1);
                if let Some(text) = hit.and_then(|i| spec.tooltip(0, i)) {
                    response.on_hover_text(text);
                }
            }
        }

        if spec.legend == LegendPosition::Bottom {
            ui.add_space(8.0);
            Self::draw_pie_legend(ui, spec);
        }
    }

    fn draw_pie_legend(ui: &mut egui::Ui, spec: &ChartSpec) {
        let Some(series) = spec.series.first() else {
            return;
        };
        ui.horizontal_wrapped(|ui| {
            for (label, color) in spec.labels.iter().zip(series.colors.iter()) {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), Sense::hover());
                ui.painter().rect_filled(rect, 3.0, Self::color(*color));
                ui.label(RichText::new(*label).size(14.0));
                ui.add_space(15.0);
            }
        });
    }

    /// Filled line chart over ordinal x positions (one per label).
    fn draw_line(ui: &mut egui::Ui, chart: &LiveChart, height: f32) {
        let spec = chart.spec.clone();
        let x_labels = spec.labels.clone();
        let y_format = spec.value_format;
        let hover_spec = spec.clone();

        let mut plot = Plot::new(chart.plot_id())
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_grid([spec.show_x_grid, spec.show_y_grid])
            .include_y(0.0)
            .include_x(-0.2)
            .include_x(x_labels.len() as f64 - 0.8)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 {
                    x_labels
                        .get(idx as usize)
                        .map(|s| s.to_string())
                        .unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .y_axis_formatter(move |mark, _range| {
                if mark.value < 0.0 {
                    String::new()
                } else {
                    y_format.format(mark.value)
                }
            })
            // Every series at the hovered week, not the nearest curve sample
            .label_formatter(move |_name, value| {
                hover_spec.index_tooltip(value.x).unwrap_or_default()
            });

        if spec.legend != LegendPosition::Hidden {
            let corner = match spec.legend {
                LegendPosition::Bottom => Corner::LeftBottom,
                _ => Corner::LeftTop,
            };
            plot = plot.legend(Legend::default().position(corner));
        }

        let curves: Vec<(Vec<[f64; 2]>, Vec<[f64; 2]>)> = spec
            .series
            .iter()
            .map(|series| {
                let raw: Vec<[f64; 2]> = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v])
                    .collect();
                let smoothed = curve::smooth(&raw, series.tension, CURVE_STEPS);
                (raw, smoothed)
            })
            .collect();

        plot.show(ui, |plot_ui| {
            // Areas first so every line stays on top
            for (series, (_, smoothed)) in spec.series.iter().zip(&curves) {
                let Some(fill) = Self::area_fill(series) else {
                    continue;
                };
                for band in curve::area_bands(smoothed, 0.0) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(band.to_vec()))
                            .fill_color(fill)
                            .stroke(Stroke::NONE),
                    );
                }
            }

            for (series, (raw, smoothed)) in spec.series.iter().zip(curves) {
                let color = Self::color(series.border);
                let line = Line::new(smoothed.into_iter().collect::<PlotPoints>())
                    .color(color)
                    .width(series.border_width)
                    .name(series.label);
                plot_ui.line(line);

                if series.point_radius > 0.0 {
                    plot_ui.points(
                        Points::new(raw.into_iter().collect::<PlotPoints>())
                            .radius(series.point_radius)
                            .filled(true)
                            .color(color)
                            .name(series.label),
                    );
                }
            }
        });
    }

    /// Horizontal bars, first label at the top.
    fn draw_bar(ui: &mut egui::Ui, chart: &LiveChart, height: f32) {
        let spec = chart.spec.clone();
        let Some(series) = spec.series.first().cloned() else {
            return;
        };
        let n = spec.labels.len();
        let y_labels = spec.labels.clone();
        let x_format = spec.value_format;
        let bar_format = spec.value_format;

        let bars: Vec<Bar> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let fill = series
                    .colors
                    .get(i)
                    .copied()
                    .map(Self::color)
                    .unwrap_or(Color32::GRAY);
                Bar::new((n - 1 - i) as f64, v)
                    .width(0.7)
                    .fill(fill)
                    .name(spec.labels.get(i).copied().unwrap_or_default())
            })
            .collect();

        Plot::new(chart.plot_id())
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_x(false)
            .show_y(false)
            .show_grid([spec.show_x_grid, spec.show_y_grid])
            .include_x(0.0)
            .x_axis_formatter(move |mark, _range| {
                if mark.value < 0.0 {
                    String::new()
                } else {
                    x_format.format(mark.value)
                }
            })
            .y_axis_formatter(move |mark, _range| {
                let row = mark.value.round();
                if (mark.value - row).abs() < 1e-6 && row >= 0.0 && (row as usize) < n {
                    y_labels[n - 1 - row as usize].to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .name(series.label)
                        .element_formatter(Box::new(move |bar, _chart| {
                            bar_format.format(bar.value)
                        })),
                );
            });
    }
}
