//! delta-dash
//!
//! A lightweight Rust library for building and rendering the presentation
//! layer of a regression-report dashboard. Pairs with the `delta-dash` CLI.
//!
//! ### Features
//! - One configurable line-chart factory: reference vs. current series with
//!   an optional (supplied or computed) difference series, fixed per-role
//!   colors, category x axis
//! - Render chart configs to SVG/PNG files
//! - Threshold badge coloring with a slider-bounded cutoff
//! - Navigation menu highlighting for the current URL
//! - Serde model for the curve-report JSON emitted by the test runner
//!
//! ### Example
//! ```no_run
//! use delta_dash::{ChartOptions, DiffSource, Series};
//!
//! let labels = vec!["1".into(), "2".into(), "3".into()];
//! let mut opts = ChartOptions::new(labels, Series::new("Current", vec![8.0, 15.0, 33.0]));
//! opts.reference = Some(Series::new("Reference", vec![10.0, 20.0, 30.0]));
//! opts.difference = DiffSource::Computed;
//! let config = opts.build()?;
//! delta_dash::render::render_chart(&config, "curve.svg", 1000, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod badges;
pub mod chart;
pub mod models;
pub mod nav;
pub mod page;
pub mod render;
pub mod stats;

pub use chart::{ChartConfig, ChartError, ChartOptions, DiffSource};
pub use models::{CurvePlot, Series};
