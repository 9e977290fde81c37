use anyhow::{Context, Result};
use arbor_lib::model::config::SimConfig;
use arbor_lib::model::init_logging;
use arbor_lib::model::world::World;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless plant-growth simulation", long_about = None)]
struct Args {
    /// TOML config file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// Ticks per fast-forward batch
    #[arg(short, long, default_value_t = 100)]
    batch: u64,

    /// Write every event as one JSON object per line
    #[arg(short, long)]
    events: Option<PathBuf>,

    /// Only print the final summary
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimConfig::from_toml(&content)?
        }
        None => SimConfig::default(),
    };
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    if !args.quiet {
        init_logging();
    }
    anyhow::ensure!(args.batch > 0, "batch size must be positive");

    let config = load_config(&args)?;
    let mut world = World::new(config)?;
    let mut sink = match &args.events {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => None,
    };

    let mut remaining = args.ticks;
    while remaining > 0 {
        let batch = remaining.min(args.batch);
        let events = world.fast_forward(batch);
        remaining -= batch;
        if let Some(out) = sink.as_mut() {
            for event in &events {
                serde_json::to_writer(&mut *out, event)?;
                out.write_all(b"\n")?;
            }
        }
    }
    if let Some(mut out) = sink {
        out.flush()?;
    }

    let stats = world.stats();
    let metrics = world.metrics();
    println!(
        "tick {} | plants {} | cells {} | seeds {} | lineages {} | max generation {}",
        stats.tick, stats.plants, stats.cells, stats.seeds, stats.lineages, stats.max_generation
    );
    println!(
        "growths {} | germinations {} | deaths {} | reseeds {} | energy delivered {:.1}",
        metrics.growths,
        metrics.germinations,
        metrics.deaths(),
        metrics.reseeds,
        metrics.energy_delivered
    );
    println!(
        "placement digest {} | wall time {:.2?}",
        world.placement_digest(),
        metrics.elapsed()
    );
    Ok(())
}
