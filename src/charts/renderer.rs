//! Static Chart Renderer
//! Draws chart specs to PNG with plotters, for embedding in exported slides.
//!
//! Layout per chart:
//! 1. Title centered at the top
//! 2. Plot area (pie, filled lines, or horizontal bars)
//! 3. Legend (bottom row for pies, inside the plot for lines)

use crate::charts::curve;
use crate::charts::spec::{ChartSpec, ChartType, LegendPosition, Rgba};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid image size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

type DrawResult = Result<(), Box<dyn std::error::Error>>;
type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const MIN_SIZE: u32 = 200;
const CURVE_STEPS: usize = 24;
const FONT: &str = "sans-serif";

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `spec` into an in-memory PNG.
    pub fn render_png(spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        if width < MIN_SIZE || height < MIN_SIZE {
            return Err(RenderError::InvalidSize { width, height });
        }

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw_chart(&root, spec).map_err(|e| RenderError::Draw(e.to_string()))?;
            root.present()
                .map_err(|e| RenderError::Draw(e.to_string()))?;
        }

        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(RenderError::InvalidSize { width, height })?;
        let mut png = Cursor::new(Vec::new());
        img.write_to(&mut png, ImageFormat::Png)?;
        Ok(png.into_inner())
    }

    fn draw_chart(root: &Area<'_>, spec: &ChartSpec) -> DrawResult {
        root.fill(&WHITE)?;
        let area = root.titled(spec.title, (FONT, 30).into_font().color(&BLACK))?;

        match spec.chart_type {
            ChartType::Pie => Self::draw_pie(&area, spec),
            ChartType::Line => Self::draw_line(&area, spec),
            ChartType::HorizontalBar => Self::draw_bar(&area, spec),
        }
    }

    fn draw_pie(area: &Area<'_>, spec: &ChartSpec) -> DrawResult {
        let Some(series) = spec.series.first() else {
            return Ok(());
        };

        let (width, height) = area.dim_in_pixel();
        let legend_h = 60u32.min(height / 4);
        let (pie_area, legend_area) = area.split_vertically(height - legend_h);

        let (pw, ph) = pie_area.dim_in_pixel();
        let center = ((pw / 2) as i32, (ph / 2) as i32);
        let radius = pw.min(ph) as f64 * 0.38;
        let colors: Vec<RGBColor> = series.colors.iter().map(|c| Self::rgb(*c)).collect();
        let labels: Vec<String> = (0..series.values.len())
            .map(|i| spec.tooltip(0, i).unwrap_or_default())
            .collect();

        let mut pie = Pie::new(&center, &radius, &series.values, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style((FONT, 20).into_font().color(&BLACK));
        pie_area.draw(&pie)?;

        // Legend row
        let font = (FONT, 18).into_font();
        let slot = width as i32 / spec.labels.len().max(1) as i32;
        let y = (legend_h / 2) as i32;
        for (i, (label, color)) in spec.labels.iter().zip(colors.iter()).enumerate() {
            let x = slot * i as i32 + 20;
            legend_area.draw(&Rectangle::new(
                [(x, y - 8), (x + 16, y + 8)],
                color.filled(),
            ))?;
            legend_area.draw(&Text::new(label.to_string(), (x + 24, y - 9), font.clone()))?;
        }

        Ok(())
    }

    fn draw_line(area: &Area<'_>, spec: &ChartSpec) -> DrawResult {
        let n = spec.labels.len();
        let y_max = axis_max(spec.max_value());
        let value_format = spec.value_format;

        let mut chart = ChartBuilder::on(area)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(110)
            .build_cartesian_2d(-0.3f64..(n as f64 - 0.7), 0f64..y_max)?;

        let x_fmt = |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 1e-6 && idx >= 0.0 {
                spec.labels
                    .get(idx as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default()
            } else {
                String::new()
            }
        };
        let y_fmt = |y: &f64| value_format.format(*y);

        let mut mesh = chart.configure_mesh();
        mesh.x_labels(n)
            .y_labels(8)
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .label_style((FONT, 16))
            .light_line_style(&WHITE)
            .bold_line_style(BLACK.mix(0.05));
        if !spec.show_x_grid {
            mesh.disable_x_mesh();
        }
        if !spec.show_y_grid {
            mesh.disable_y_mesh();
        }
        mesh.draw()?;

        for series in &spec.series {
            let color = Self::rgba(series.border);
            let raw: Vec<(f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v))
                .collect();
            let points: Vec<[f64; 2]> = raw.iter().map(|&(x, y)| [x, y]).collect();
            let smoothed = curve::smooth(&points, series.tension, CURVE_STEPS);
            let line_style = color.stroke_width(series.border_width.round() as u32);

            let anno = match series.fill {
                Some(fill) => chart.draw_series(
                    AreaSeries::new(
                        smoothed.iter().map(|p| (p[0], p[1])),
                        0.0,
                        Self::rgba(fill).filled(),
                    )
                    .border_style(line_style),
                )?,
                None => chart.draw_series(LineSeries::new(
                    smoothed.iter().map(|p| (p[0], p[1])),
                    line_style,
                ))?,
            };
            anno.label(series.label).legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 18, y + 6)], color.filled())
            });

            let radius = series.point_radius.round() as i32;
            if radius > 0 {
                chart.draw_series(
                    raw.iter()
                        .map(|&(x, y)| Circle::new((x, y), radius, color.filled())),
                )?;
            }
        }

        if spec.legend != LegendPosition::Hidden {
            let position = match spec.legend {
                LegendPosition::Bottom => SeriesLabelPosition::LowerRight,
                _ => SeriesLabelPosition::UpperLeft,
            };
            chart
                .configure_series_labels()
                .position(position)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK.mix(0.2))
                .label_font((FONT, 18))
                .draw()?;
        }

        Ok(())
    }

    fn draw_bar(area: &Area<'_>, spec: &ChartSpec) -> DrawResult {
        let Some(series) = spec.series.first() else {
            return Ok(());
        };
        let n = spec.labels.len();
        // Headroom for the value printed after each bar
        let x_max = axis_max(spec.max_value() * 1.15);
        let value_format = spec.value_format;

        let mut chart = ChartBuilder::on(area)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(130)
            .build_cartesian_2d(0f64..x_max, (0..n).into_segmented())?;

        // Row 0 is at the bottom, so the first stage maps to row n - 1.
        let y_fmt = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(row) if *row < n => spec.labels[n - 1 - row].to_string(),
            _ => String::new(),
        };
        let x_fmt = |x: &f64| value_format.format(*x);

        let mut mesh = chart.configure_mesh();
        mesh.y_labels(n)
            .x_labels(6)
            .x_label_formatter(&x_fmt)
            .y_label_formatter(&y_fmt)
            .label_style((FONT, 16))
            .light_line_style(&WHITE)
            .bold_line_style(BLACK.mix(0.05));
        if !spec.show_x_grid {
            mesh.disable_x_mesh();
        }
        if !spec.show_y_grid {
            mesh.disable_y_mesh();
        }
        mesh.draw()?;

        let font = (FONT, 15).into_font();
        for (i, &value) in series.values.iter().enumerate() {
            let row = n - 1 - i;
            let color = series
                .colors
                .get(i)
                .copied()
                .map(Self::rgb)
                .unwrap_or(RGBColor(128, 128, 128));

            let mut bar = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(row)),
                    (value, SegmentValue::Exact(row + 1)),
                ],
                color.filled(),
            );
            bar.set_margin(8, 8, 0, 0);
            chart.draw_series(std::iter::once(bar))?;
            chart.draw_series(std::iter::once(Text::new(
                format!(" {}", value_format.format(value)),
                (value, SegmentValue::CenterOf(row)),
                font.clone(),
            )))?;
        }

        Ok(())
    }

    fn rgb(c: Rgba) -> RGBColor {
        RGBColor(c.r, c.g, c.b)
    }

    fn rgba(c: Rgba) -> RGBAColor {
        RGBAColor(c.r, c.g, c.b, c.alpha_f64())
    }
}

/// Round an axis maximum up to the next half step of its magnitude, with a
/// little headroom (`30000` -> `35000`).
pub fn axis_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let padded = value * 1.05;
    let step = 10f64.powf(padded.log10().floor()) / 2.0;
    (padded / step).ceil() * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::spec::ChartKind;
    use approx::assert_relative_eq;

    #[test]
    fn axis_max_rounds_up_with_headroom() {
        assert_relative_eq!(axis_max(30000.0), 35000.0);
        assert_relative_eq!(axis_max(88.0), 95.0);
        assert_relative_eq!(axis_max(0.0), 1.0);
        assert!(axis_max(900000.0) > 900000.0);
    }

    #[test]
    fn rejects_tiny_images() {
        let spec = ChartKind::Funnel.spec();
        let err = StaticChartRenderer::render_png(&spec, 10, 10).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidSize {
                width: 10,
                height: 10
            }
        ));
    }
}
