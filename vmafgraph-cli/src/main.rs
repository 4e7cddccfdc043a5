use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use vmafgraph::{ChartOptions, FrameField, extract_series, parse_report, render_series_svg};

#[derive(Parser, Debug)]
#[command(name = "vmafgraph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chart one metric across frames as an SVG.
    Graph(GraphArgs),
    /// Print a summary of a parsed report.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct GraphArgs {
    /// Input VMAF XML report.
    report: PathBuf,

    /// Output SVG path.
    #[arg(long, default_value = "vmaf.svg")]
    out: PathBuf,

    /// Keep one frame per `stride` positions in the frame sequence.
    #[arg(long, default_value_t = 1)]
    stride: usize,

    /// Frame metric to chart (report attribute name).
    #[arg(long, default_value = "vmaf")]
    metric: String,

    /// Chart width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Chart height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input VMAF XML report.
    report: PathBuf,

    /// Print the full report as JSON instead of the summary line.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Graph(args) => cmd_graph(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn cmd_graph(args: GraphArgs) -> anyhow::Result<()> {
    let field = FrameField::from_attr_name(&args.metric).ok_or_else(|| {
        let known = FrameField::ALL.map(|f| f.attr_name()).join(", ");
        anyhow::anyhow!("unknown metric '{}' (known: {known})", args.metric)
    })?;

    let report = parse_report(&args.report)?;
    eprintln!("parsed {report}");

    let series = extract_series(&report, args.stride, field)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let opts = ChartOptions {
        width: args.width,
        height: args.height,
        y_label: args.metric.clone(),
    };
    render_series_svg(&series, &args.out, &opts)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let report = parse_report(&args.report)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }
    Ok(())
}
