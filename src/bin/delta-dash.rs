use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use delta_dash::chart::{self, DIFFERENCE_LABEL};
use delta_dash::models::CurvePlot;
use delta_dash::{ChartConfig, render, stats};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "delta-dash",
    version,
    about = "Render regression-report charts & inspect curve deltas"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one curve of a report file as a comparison chart.
    Plot(PlotArgs),
    /// Print each curve's max relative delta and the suggested slider limit.
    Delta(DeltaArgs),
    /// Render the fixed sales demo chart.
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct PlotArgs {
    /// Curve-report JSON file (a single plot object or an array of them).
    #[arg(short, long)]
    report: PathBuf,
    /// Index of the curve to render when the report holds several.
    #[arg(long, default_value_t = 0)]
    index: usize,
    /// Output image path (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Start with the difference series visible instead of hidden.
    #[arg(long, default_value_t = false)]
    show_diff: bool,
    /// Hide the y-axis tick labels (the axis keeps its title).
    #[arg(long, default_value_t = false)]
    hide_y_scale: bool,
    /// Render without a legend.
    #[arg(long, default_value_t = false)]
    no_legend: bool,
}

#[derive(Args, Debug)]
struct DeltaArgs {
    /// Curve-report JSON file (a single plot object or an array of them).
    #[arg(short, long)]
    report: PathBuf,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Output image path (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
}

/// A report file is either one plot object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReportFile {
    Many(Vec<CurvePlot>),
    One(Box<CurvePlot>),
}

fn load_plots(path: &Path) -> Result<Vec<CurvePlot>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let report: ReportFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing report JSON from {}", path.display()))?;
    Ok(match report {
        ReportFile::Many(plots) => plots,
        ReportFile::One(plot) => vec![*plot],
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plot(args) => cmd_plot(args),
        Command::Delta(args) => cmd_delta(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_plot(args: PlotArgs) -> Result<()> {
    let plots = load_plots(&args.report)?;
    let plot = plots.get(args.index).ok_or_else(|| {
        anyhow::anyhow!(
            "report has {} curve(s), index {} is out of range",
            plots.len(),
            args.index
        )
    })?;

    let mut config = ChartConfig::from_curve_plot(plot)?;
    if args.show_diff {
        config.toggle_series(DIFFERENCE_LABEL);
    }
    if args.hide_y_scale {
        config.axes.show_y_scale = false;
    }
    if args.no_legend {
        config.legend.display = false;
    }

    render::render_chart(&config, &args.out, args.width, args.height)?;
    info!("rendered curve {} from {}", plot.name, args.report.display());
    println!("Wrote {}", args.out.display());
    Ok(())
}

fn cmd_delta(args: DeltaArgs) -> Result<()> {
    let plots = load_plots(&args.report)?;
    let mut deltas = Vec::new();
    for plot in &plots {
        if !plot.has_reference() {
            println!("{}\tno reference data", plot.name);
            continue;
        }
        let delta = stats::max_relative_delta_percent(&plot.y_axis_ref, &plot.y_axis_now);
        println!("{}\t{:.3}%", plot.name, delta);
        deltas.push(delta);
    }
    println!(
        "suggested slider limit: {}",
        stats::suggested_slider_limit(deltas)
    );
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> Result<()> {
    let config = chart::sales_demo();
    render::render_chart(&config, &args.out, args.width, args.height)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
