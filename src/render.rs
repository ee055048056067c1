//! Render a [`ChartConfig`] to **SVG** or **PNG** with Plotters.
//!
//! The static analogue of the dashboard's canvas widget: visible datasets
//! are drawn as translucent lines with circular markers and no fill under
//! the line; hidden datasets (legend toggled off) are skipped entirely.

use crate::chart::{ChartConfig, Dataset, POINT_RADIUS, Rgba, STROKE_WIDTH};
use anyhow::{Result, anyhow};
use log::debug;
use num_format::{Locale, ToFormattedString};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS
/// fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

fn to_rgba(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

/// Render `config` to `out_path`. The backend is chosen by extension:
/// `.svg` uses the SVG backend, anything else the bitmap backend.
pub fn render_chart<P: AsRef<Path>>(
    config: &ChartConfig,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let visible: Vec<&Dataset> = config.visible_datasets().collect();
    if visible.is_empty() {
        return Err(anyhow!("no visible datasets to plot"));
    }

    let values: Vec<f64> = visible
        .iter()
        .flat_map(|d| d.values.iter().copied())
        .filter(|v| v.is_finite())
        .collect();
    if values.is_empty() {
        return Err(anyhow!("no numeric values to plot"));
    }
    let (mut min_val, mut max_val) = (
        values.iter().cloned().fold(f64::INFINITY, f64::min),
        values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    );
    if (max_val - min_val).abs() < f64::EPSILON {
        min_val -= 1.0;
        max_val += 1.0;
    }

    // Category axis: positions are sample indices, labels come from config.
    let n = visible
        .iter()
        .map(|d| d.values.len())
        .max()
        .unwrap_or(0)
        .max(config.labels.len());
    let x_max = (n.saturating_sub(1)) as f64;

    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    debug!("rendering {}x{} chart to {}", width, height, path_string);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, config, &visible, x_max, min_val, max_val)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, config, &visible, x_max, min_val, max_val)?;
    }
    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    config: &ChartConfig,
    visible: &[&Dataset],
    x_max: f64,
    min_val: f64,
    max_val: f64,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .set_label_area_size(LabelAreaPosition::Left, 72)
        .set_label_area_size(LabelAreaPosition::Bottom, 48)
        .build_cartesian_2d(-0.5..x_max + 0.5, min_val..max_val)
        .map_err(|e| anyhow!("{:?}", e))?;

    let x_label_fmt = |x: &f64| {
        let i = x.round();
        if i < 0.0 || (i - x).abs() > 1e-6 {
            return String::new();
        }
        config.labels.get(i as usize).cloned().unwrap_or_default()
    };
    // Y uses thousands separators for large magnitudes, otherwise a
    // magnitude-dependent precision; blanked when the scale is hidden.
    let show_y_scale = config.axes.show_y_scale;
    let y_label_fmt = move |v: &f64| {
        if !show_y_scale {
            return String::new();
        }
        let a = v.abs();
        if a >= 1000.0 {
            ((*v).round() as i64).to_formatted_string(&Locale::en)
        } else {
            let prec = if a >= 100.0 {
                0
            } else if a >= 10.0 {
                1
            } else {
                2
            };
            format!("{:.*}", prec, *v)
        }
    };
    let x_label_count = config.labels.len().clamp(1, 12);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(config.axes.x_title.as_str())
        .y_desc(config.axes.y_title.as_str())
        .x_labels(x_label_count)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for dataset in visible {
        let color = to_rgba(dataset.role.color());
        let points: Vec<(f64, f64)> = dataset
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v))
            .collect();

        let style = ShapeStyle {
            color,
            filled: false,
            stroke_width: STROKE_WIDTH,
        };
        chart
            .draw_series(LineSeries::new(points.clone(), style))
            .map_err(|e| anyhow!("{:?}", e))?;
        let elem = chart
            .draw_series(
                points
                    .iter()
                    .map(|(x, y)| Circle::new((*x, *y), POINT_RADIUS as i32, color.filled())),
            )
            .map_err(|e| anyhow!("{:?}", e))?;

        if config.legend.display {
            let legend_color = color;
            let legend_text = dataset.label.clone();
            elem.label(legend_text.clone()).legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + Circle::new((x + 8, y), 4, legend_color.filled())
                    + Text::new(legend_text.clone(), (x + 20, y), (FontFamily::SansSerif, 14))
            });
        }
    }

    if config.legend.display {
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .label_font((FontFamily::SansSerif, 14))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
