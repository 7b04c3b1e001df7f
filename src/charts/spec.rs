//! Chart Specifications
//! Fixed datasets and appearance for the three chart-bearing pages.

use crate::charts::format::group_thousands;
use serde::{Deserialize, Serialize};

/// RGBA color shared by the interactive and static renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 255,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha * 255.0) as u8,
            ..self
        }
    }

    pub fn alpha_f64(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

pub const WHITE: Rgba = Rgba::hex(0xFFFFFF);

/// Funnel stage palette, one color per stage
pub const FUNNEL_PALETTE: [Rgba; 6] = [
    Rgba::hex(0x1FB8CD), // Teal
    Rgba::hex(0xFFC185), // Peach
    Rgba::hex(0xECEBD5), // Cream
    Rgba::hex(0x5D878F), // Slate
    Rgba::hex(0xD2BA4C), // Mustard
    Rgba::hex(0x047857), // Green
];

/// The three chart-bearing pages of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Platform budget split (pie)
    Distribution,
    /// Weekly sales vs budget (filled line)
    Trend,
    /// Conversion funnel (horizontal bar)
    Funnel,
}

/// Page index to chart mapping. Pages not listed carry no chart.
pub const CHART_PAGES: [(usize, ChartKind); 3] = [
    (5, ChartKind::Distribution),
    (6, ChartKind::Trend),
    (7, ChartKind::Funnel),
];

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Distribution, ChartKind::Trend, ChartKind::Funnel];

    /// Chart bound to the page at `index`, if any.
    pub fn for_page(index: usize) -> Option<ChartKind> {
        CHART_PAGES
            .iter()
            .find(|(page, _)| *page == index)
            .map(|(_, kind)| *kind)
    }

    /// Identifier of the surface this chart is drawn into.
    pub fn surface(&self) -> &'static str {
        match self {
            ChartKind::Distribution => "platformChart",
            ChartKind::Trend => "growthChart",
            ChartKind::Funnel => "funnelChart",
        }
    }

    pub fn spec(&self) -> ChartSpec {
        match self {
            ChartKind::Distribution => distribution_spec(),
            ChartKind::Trend => trend_spec(),
            ChartKind::Funnel => funnel_spec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Pie,
    Line,
    HorizontalBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
    Hidden,
}

/// How values are printed on ticks and tooltips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `50` -> `50%`
    Percent,
    /// `30000` -> `30,000` plus an optional unit suffix
    Grouped { unit: Option<&'static str> },
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Percent => format!("{}%", group_thousands(value)),
            ValueFormat::Grouped { unit: Some(unit) } => {
                format!("{} {}", group_thousands(value), unit)
            }
            ValueFormat::Grouped { unit: None } => group_thousands(value),
        }
    }
}

/// One dataset of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub values: Vec<f64>,
    /// Per-value fill colors (pie slices, bars). Lines use `border`.
    pub colors: Vec<Rgba>,
    pub border: Rgba,
    pub border_width: f32,
    /// Area fill under a line
    pub fill: Option<Rgba>,
    /// Spline tension, 0 draws straight segments
    pub tension: f64,
    pub point_radius: f32,
}

/// Complete description of one chart: data plus appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub chart_type: ChartType,
    pub title: &'static str,
    pub labels: Vec<&'static str>,
    pub series: Vec<Series>,
    pub legend: LegendPosition,
    pub value_format: ValueFormat,
    pub show_x_grid: bool,
    pub show_y_grid: bool,
}

impl ChartSpec {
    /// Hover text for the value at `index` of series `series_idx`.
    pub fn tooltip(&self, series_idx: usize, index: usize) -> Option<String> {
        let series = self.series.get(series_idx)?;
        let value = *series.values.get(index)?;

        let text = match self.chart_type {
            ChartType::Pie => {
                let label = self.labels.get(index).copied().unwrap_or_default();
                format!("{}: {}", label, self.value_format.format(value))
            }
            ChartType::Line => {
                if series.label.is_empty() {
                    self.value_format.format(value)
                } else {
                    format!("{}: {}", series.label, self.value_format.format(value))
                }
            }
            ChartType::HorizontalBar => self.value_format.format(value),
        };
        Some(text)
    }

    /// Hover text for the category nearest to `x` on an ordinal axis: the
    /// category label, then one line per series with its data value.
    pub fn index_tooltip(&self, x: f64) -> Option<String> {
        if !x.is_finite() || self.labels.is_empty() {
            return None;
        }
        let index = x.round().clamp(0.0, (self.labels.len() - 1) as f64) as usize;

        let mut lines = vec![self.labels[index].to_string()];
        lines.extend((0..self.series.len()).filter_map(|s| self.tooltip(s, index)));
        Some(lines.join("\n"))
    }

    /// Axis tick text for a value on the value axis
    pub fn tick_label(&self, value: f64) -> String {
        self.value_format.format(value)
    }

    /// Largest value over all series, used for axis ranges.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

fn distribution_spec() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Distribution,
        chart_type: ChartType::Pie,
        title: "Budget Distribution by Platform",
        labels: vec!["Facebook Ads", "Instagram Ads", "Retargeting"],
        series: vec![Series {
            label: "",
            values: vec![50.0, 35.0, 15.0],
            colors: vec![
                Rgba::hex(0x1FB8CD),
                Rgba::hex(0xFFC185),
                Rgba::hex(0xB4413C),
            ],
            border: WHITE,
            border_width: 2.0,
            fill: None,
            tension: 0.0,
            point_radius: 0.0,
        }],
        legend: LegendPosition::Bottom,
        value_format: ValueFormat::Percent,
        show_x_grid: false,
        show_y_grid: false,
    }
}

fn trend_spec() -> ChartSpec {
    let sales = Rgba::hex(0x047857);
    let budget = Rgba::hex(0x1E3A8A);

    ChartSpec {
        kind: ChartKind::Trend,
        chart_type: ChartType::Line,
        title: "Weekly Sales vs Budget",
        labels: vec!["Week 1", "Week 2", "Week 3", "Week 4"],
        series: vec![
            Series {
                label: "Sales (EGP)",
                values: vec![1250.0, 3750.0, 15000.0, 30000.0],
                colors: Vec::new(),
                border: sales,
                border_width: 3.0,
                fill: Some(sales.with_alpha(0.1)),
                tension: 0.4,
                point_radius: 6.0,
            },
            Series {
                label: "Budget (EGP)",
                values: vec![500.0, 1500.0, 2500.0, 2500.0],
                colors: Vec::new(),
                border: budget,
                border_width: 3.0,
                fill: Some(budget.with_alpha(0.1)),
                tension: 0.4,
                point_radius: 6.0,
            },
        ],
        legend: LegendPosition::Top,
        value_format: ValueFormat::Grouped { unit: Some("EGP") },
        show_x_grid: false,
        show_y_grid: true,
    }
}

fn funnel_spec() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Funnel,
        chart_type: ChartType::HorizontalBar,
        title: "Conversion Funnel",
        labels: vec![
            "Impressions",
            "Clicks",
            "Page Views",
            "Add to Cart",
            "Checkout",
            "Purchase",
        ],
        series: vec![Series {
            label: "Funnel Metrics",
            values: vec![900000.0, 16200.0, 14580.0, 437.0, 219.0, 88.0],
            colors: FUNNEL_PALETTE.to_vec(),
            border: WHITE,
            border_width: 0.0,
            fill: None,
            tension: 0.0,
            point_radius: 0.0,
        }],
        legend: LegendPosition::Hidden,
        value_format: ValueFormat::Grouped { unit: None },
        show_x_grid: true,
        show_y_grid: false,
    }
}
