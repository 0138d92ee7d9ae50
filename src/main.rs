use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use schedsim::{config, metrics, report, simulate};

/// Discrete-time single-core CPU scheduling simulator.
///
/// Reads a workload description (processes with arrival and burst
/// times, a run horizon, and a policy), replays it tick by tick under
/// First-Come First-Served, preemptive Shortest Job First, or
/// Round-Robin, and writes the event trace plus per-process timing
/// metrics next to the input file.
#[derive(Debug, Parser)]
struct Opts {
    /// Workload description file; must end in `.in`. The report is
    /// written alongside it with a `.out` extension.
    input: PathBuf,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        level,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    if opts.input.extension().and_then(|ext| ext.to_str()) != Some("in") {
        bail!("input file must have a .in extension");
    }

    let cfg = config::load(&opts.input)?;
    info!(
        "{} processes under {} for {} ticks",
        cfg.procs.len(),
        cfg.algorithm.label(),
        cfg.run_for
    );

    let outcome = simulate(&cfg);
    let rows = metrics::compute(&outcome.procs);
    let summary = metrics::Summary::of(&rows);
    info!(
        "avg wait {:.2}, avg turnaround {:.2}, avg response {:.2} ticks",
        summary.waiting, summary.turnaround, summary.response
    );

    let output = opts.input.with_extension("out");
    fs::write(&output, report::render(&cfg, &outcome, &rows))
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("report written to {}", output.display());

    Ok(())
}
