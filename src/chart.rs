//! Declarative line-chart configuration.
//!
//! A [`ChartConfig`] is the value object a render call consumes: category
//! labels, one to three datasets with fixed visual identities, axis options,
//! and tooltip/legend style. One configurable factory ([`ChartOptions`])
//! replaces the historical near-duplicate builders (fixed demo data, two
//! series with optional reference, three series with a computed difference).

use crate::models::{CurvePlot, Series};
use crate::stats;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Point marker radius shared by all datasets.
pub const POINT_RADIUS: u32 = 5;
/// Line stroke width shared by all datasets.
pub const STROKE_WIDTH: u32 = 3;

/// Label used for difference datasets assembled from a report.
pub const DIFFERENCE_LABEL: &str = "Difference";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("reference series has {reference} points but current series has {current}")]
    LengthMismatch { reference: usize, current: usize },
}

/// An RGBA color, alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Which of the three comparison roles a dataset plays. The role fixes the
/// dataset's visual identity so every chart in a report reads the same way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeriesRole {
    Reference,
    Current,
    Difference,
}

impl SeriesRole {
    /// Translucent line/marker color: reference red, current green,
    /// difference purple.
    pub fn color(self) -> Rgba {
        match self {
            SeriesRole::Reference => Rgba::new(220, 53, 69, 0.75),
            SeriesRole::Current => Rgba::new(40, 167, 69, 0.75),
            SeriesRole::Difference => Rgba::new(111, 66, 193, 0.75),
        }
    }
}

/// One plotted dataset. `hidden` is the legend-toggle state: a hidden
/// dataset keeps its slot in the config but is not drawn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub role: SeriesRole,
    pub hidden: bool,
}

/// Axis titles and scale visibility. One legacy report page hides the
/// y tick labels entirely while still titling the axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisOptions {
    pub x_title: String,
    pub y_title: String,
    pub show_y_scale: bool,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            x_title: String::new(),
            y_title: String::new(),
            show_y_scale: true,
        }
    }
}

/// Tooltip aggregation: `Index` groups all visible datasets sharing an
/// x position into one tooltip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TooltipMode {
    #[default]
    Index,
    Point,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TooltipOptions {
    pub mode: TooltipMode,
    /// When false the cursor need not intersect a point exactly.
    pub intersect: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            mode: TooltipMode::Index,
            intersect: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LegendOptions {
    pub display: bool,
    pub use_point_style: bool,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: true,
            use_point_style: true,
        }
    }
}

/// Where the difference dataset comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DiffSource {
    /// No difference dataset.
    #[default]
    None,
    /// Precomputed values, e.g. straight from a report file.
    Supplied(Vec<f64>),
    /// Compute `reference[i] - current[i]`; silently omitted when there is
    /// no reference to subtract from.
    Computed,
}

/// Input to the chart factory. Construct with [`ChartOptions::new`], adjust
/// the public fields, then [`ChartOptions::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub labels: Vec<String>,
    pub x_title: String,
    pub y_title: String,
    /// Always required and always rendered.
    pub current: Series,
    /// Rendered only when present and non-empty.
    pub reference: Option<Series>,
    pub difference: DiffSource,
    pub show_y_scale: bool,
    pub show_legend: bool,
}

impl ChartOptions {
    pub fn new(labels: Vec<String>, current: Series) -> Self {
        Self {
            labels,
            x_title: String::new(),
            y_title: String::new(),
            current,
            reference: None,
            difference: DiffSource::None,
            show_y_scale: true,
            show_legend: true,
        }
    }

    /// Assemble the final config. The difference dataset, when it exists,
    /// starts hidden; it stays togglable via [`ChartConfig::toggle_series`].
    pub fn build(self) -> Result<ChartConfig, ChartError> {
        let mut datasets = Vec::with_capacity(3);

        let reference = self.reference.filter(|r| !r.is_empty());
        if let Some(r) = &reference {
            datasets.push(Dataset {
                label: r.label.clone(),
                values: r.values.clone(),
                role: SeriesRole::Reference,
                hidden: false,
            });
        }

        datasets.push(Dataset {
            label: self.current.label.clone(),
            values: self.current.values.clone(),
            role: SeriesRole::Current,
            hidden: false,
        });

        let diff_values = match self.difference {
            DiffSource::None => None,
            DiffSource::Supplied(v) if v.is_empty() => None,
            DiffSource::Supplied(v) => Some(v),
            DiffSource::Computed => match &reference {
                Some(r) => Some(stats::pairwise_difference(
                    &r.values,
                    &self.current.values,
                )?),
                None => None,
            },
        };
        if let Some(values) = diff_values {
            datasets.push(Dataset {
                label: DIFFERENCE_LABEL.to_string(),
                values,
                role: SeriesRole::Difference,
                hidden: true,
            });
        }

        Ok(ChartConfig {
            labels: self.labels,
            datasets,
            axes: AxisOptions {
                x_title: self.x_title,
                y_title: self.y_title,
                show_y_scale: self.show_y_scale,
            },
            tooltip: TooltipOptions::default(),
            legend: LegendOptions {
                display: self.show_legend,
                ..LegendOptions::default()
            },
        })
    }
}

/// A fully assembled chart: everything a render call needs. Constructed
/// fresh per render; owns its data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub axes: AxisOptions,
    pub tooltip: TooltipOptions,
    pub legend: LegendOptions,
}

impl ChartConfig {
    /// Flip the hidden flag of the dataset with the given label, leaving all
    /// other datasets untouched. Returns false when no dataset matched.
    pub fn toggle_series(&mut self, label: &str) -> bool {
        match self.datasets.iter_mut().find(|d| d.label == label) {
            Some(d) => {
                d.hidden = !d.hidden;
                true
            }
            None => false,
        }
    }

    /// Datasets that will actually be drawn.
    pub fn visible_datasets(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter().filter(|d| !d.hidden)
    }

    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }

    /// Build a comparison chart from one report curve: reference and current
    /// labeled by version, the report's precomputed difference attached.
    pub fn from_curve_plot(plot: &CurvePlot) -> Result<ChartConfig, ChartError> {
        let mut opts = ChartOptions::new(
            plot.labels(),
            Series::new(version_label("Current", &plot.version_now), plot.y_axis_now.clone()),
        );
        opts.x_title = strip_quotes(&plot.x_label);
        opts.y_title = strip_quotes(&plot.y_label);
        if plot.has_reference() {
            opts.reference = Some(Series::new(
                version_label("Reference", &plot.version_ref),
                plot.y_axis_ref.clone(),
            ));
        }
        if !plot.diff.is_empty() {
            opts.difference = DiffSource::Supplied(plot.diff.clone());
        }
        opts.build()
    }
}

fn version_label(role: &str, version: &str) -> String {
    if version.is_empty() || version == "-1" {
        role.to_string()
    } else {
        format!("{role} ({version})")
    }
}

/// Report axis labels arrive wrapped in literal double quotes.
fn strip_quotes(s: &str) -> String {
    s.trim().trim_matches('"').to_string()
}

/// The fixed demo chart shown on the landing page: two sales series over
/// the years 2010-2016, legend off.
pub fn sales_demo() -> ChartConfig {
    let labels = ["2010", "2011", "2012", "2013", "2014", "2015", "2016"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut opts = ChartOptions::new(
        labels,
        Series::new("Electronics", vec![0.0, 50.0, 40.0, 80.0, 40.0, 79.0, 120.0]),
    );
    opts.reference = Some(Series::new(
        "Foods",
        vec![0.0, 30.0, 10.0, 120.0, 50.0, 63.0, 10.0],
    ));
    opts.y_title = "Value".to_string();
    opts.show_legend = false;
    // Demo data is fixed and equal-length, so this cannot fail.
    opts.build().unwrap_or_else(|_| unreachable!())
}
