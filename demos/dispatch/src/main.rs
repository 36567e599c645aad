//! dispatch — run one parcel dispatch and print the delivery plan.
//!
//! Inputs come from the built-in sample, a seeded synthetic scenario, or
//! three CSV files (edges, vehicles, parcels).  Set `RUST_LOG=debug` to see
//! every decision as it is made.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use pd_core::{DispatchConfig, Minute};
use pd_graph::{DijkstraRouter, HeapDijkstraRouter, Router};
use pd_output::{CsvWriter, DecisionOutputObserver, DecisionWriter, TextReport};
use pd_sim::synthetic::{SyntheticParams, generate};
use pd_sim::{DispatcherBuilder, NoopObserver, RunSummary, Scenario};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RouterKind {
    /// O(V²) scan, best for small dense maps
    Dense,
    /// Binary-heap Dijkstra, best for large sparse maps
    Heap,
}

#[derive(Parser)]
#[command(name = "dispatch")]
#[command(about = "Greedy parcel dispatch over a zone map")]
struct Cli {
    /// Use the built-in four-zone sample (default when no other input is given)
    #[arg(long, conflicts_with_all = ["synthetic", "edges"])]
    sample: bool,

    /// Generate a random scenario with this many parcels
    #[arg(long, value_name = "PARCELS", conflicts_with = "edges")]
    synthetic: Option<usize>,

    /// Seed for --synthetic
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Edge CSV (from,to,minutes)
    #[arg(long, requires_all = ["vehicles", "parcels"])]
    edges: Option<PathBuf>,

    /// Vehicle CSV (id,location,capacity)
    #[arg(long, requires = "edges")]
    vehicles: Option<PathBuf>,

    /// Parcel CSV (id,destination,deadline,order_time,priority)
    #[arg(long, requires = "edges")]
    parcels: Option<PathBuf>,

    /// Zone count for CSV input; inferred from the rows when omitted
    #[arg(long)]
    zones: Option<usize>,

    /// Dispatch configuration as JSON; missing fields take their defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Buffers of ten everywhere and a FIFO availability scheduler
    #[arg(long, conflicts_with = "config")]
    legacy: bool,

    /// Clock value at start, in minutes (overrides the configuration)
    #[arg(long)]
    start: Option<u32>,

    #[arg(long, value_enum, default_value = "dense")]
    router: RouterKind,

    /// Write decisions.csv and summary.csv into this directory
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// With --output, write dispatch.db instead of CSV
    #[arg(long, requires = "output")]
    sqlite: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = load_config(&cli)?;
    if let Some(start) = cli.start {
        config.start = Minute(start);
    }
    let scenario = load_scenario(&cli, config.start)?;
    info!(
        "scenario: {} zones, {} edges, {} vehicles, {} parcels",
        scenario.zone_count,
        scenario.edges.len(),
        scenario.vehicles.len(),
        scenario.parcels.len()
    );

    match cli.router {
        RouterKind::Dense => run(&cli, &scenario, config, DijkstraRouter),
        RouterKind::Heap  => run(&cli, &scenario, config, HeapDijkstraRouter),
    }
}

fn load_config(cli: &Cli) -> Result<DispatchConfig> {
    if cli.legacy {
        return Ok(DispatchConfig::legacy());
    }
    let Some(path) = &cli.config else {
        return Ok(DispatchConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config: DispatchConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn load_scenario(cli: &Cli, start: Minute) -> Result<Scenario> {
    if cli.sample {
        return Ok(Scenario::sample());
    }
    if let Some(parcels) = cli.synthetic {
        let params = SyntheticParams { start, ..SyntheticParams::default() }.with_parcels(parcels);
        return Ok(generate(&params, cli.seed));
    }
    if let (Some(edges), Some(vehicles), Some(parcels)) = (&cli.edges, &cli.vehicles, &cli.parcels) {
        let scenario = Scenario::load_csv(edges, vehicles, parcels, cli.zones)
            .context("loading CSV scenario")?;
        return Ok(scenario);
    }
    Ok(Scenario::sample())
}

fn run<R: Router>(cli: &Cli, scenario: &Scenario, config: DispatchConfig, router: R) -> Result<()> {
    let mut dispatcher = DispatcherBuilder::from_scenario(scenario, config, router)?.build();

    let t0 = Instant::now();
    let summary = match &cli.output {
        Some(dir) => run_with_output(&mut dispatcher, dir, cli.sqlite)?,
        None      => dispatcher.run(&mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    let report = TextReport::from_log(dispatcher.clock().start, dispatcher.log());
    report.write_to(std::io::stdout().lock())?;

    println!();
    print_summary(&summary);
    println!("Dispatch complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    Ok(())
}

fn run_with_output<R: Router>(
    dispatcher: &mut pd_sim::Dispatcher<R>,
    dir:        &Path,
    sqlite:     bool,
) -> Result<RunSummary> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    if sqlite {
        #[cfg(feature = "sqlite")]
        {
            let writer = pd_output::SqliteWriter::new(dir)?;
            return drive(dispatcher, writer);
        }
        #[cfg(not(feature = "sqlite"))]
        anyhow::bail!("SQLite output is not enabled; rebuild with --features sqlite");
    }
    drive(dispatcher, CsvWriter::new(dir)?)
}

fn drive<R: Router, W: DecisionWriter>(
    dispatcher: &mut pd_sim::Dispatcher<R>,
    writer:     W,
) -> Result<RunSummary> {
    let mut obs = DecisionOutputObserver::new(writer);
    let summary = dispatcher.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    Ok(summary)
}

fn print_summary(s: &RunSummary) {
    println!("{:<20} {}", "Start", s.start);
    println!("{:<20} {}", "End", s.end);
    println!("{:<20} {}", "Iterations", s.iterations);
    println!("{:<20} {}", "Assigned", s.assigned);
    println!("{:<20} {}", "Failed", s.failed);
    println!("{:<20} {}", "Vehicles released", s.released);
    if s.dropped_decisions + s.dropped_failures + s.stranded > 0 {
        println!("{}", "-".repeat(28));
        println!("{:<20} {}", "Dropped decisions", s.dropped_decisions);
        println!("{:<20} {}", "Dropped failures", s.dropped_failures);
        println!("{:<20} {}", "Stranded vehicles", s.stranded);
    }
}
