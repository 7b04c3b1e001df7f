//! Charts module - Chart datasets, provisioning and rendering

pub mod curve;
pub mod format;
mod plotter;
pub mod registry;
mod renderer;
pub mod spec;

pub use plotter::{ChartPlotter, LiveChart, PlotBackend};
pub use registry::{ChartBackend, ChartProvisioner, ChartRegistry};
pub use renderer::{RenderError, StaticChartRenderer};
pub use spec::{ChartKind, ChartSpec, ChartType, CHART_PAGES};
