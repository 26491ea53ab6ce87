//! Memory Allocation & Fragmentation Analyzer CLI
//!
//! Runs the placement strategies over block/process size lists and prints
//! per-strategy block tables plus the final comparison.

use anyhow::Context;
use clap::Parser;
use memalyzer_rs::{build_comparison, parse_size_list, report, run, run_all, Strategy};
use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Documented sample inputs
const SAMPLE_BLOCKS: [u64; 5] = [100, 500, 200, 300, 600];
const SAMPLE_PROCESSES: [u64; 4] = [212, 417, 112, 426];

#[derive(Parser, Debug)]
#[command(name = "memalyzer")]
#[command(about = "Fixed-partition memory allocation and fragmentation analyzer")]
struct Args {
    /// Memory block sizes in KB, e.g. "100, 500, 200" or "[100, 500, 200]"
    #[arg(short = 'b', long)]
    blocks: Option<String>,

    /// Process sizes in KB, e.g. "212, 417, 112"
    #[arg(short = 'p', long)]
    processes: Option<String>,

    /// Placement strategy (first, best, worst, all) [default: all]
    #[arg(short = 's', long, default_value = "all")]
    strategy: String,

    /// Use the built-in sample input
    #[arg(long)]
    sample: bool,

    /// Export the summary as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Export results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Parse the strategy selection from the CLI string
fn parse_strategies(s: &str) -> Result<Vec<Strategy>, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(Strategy::ALL.to_vec());
    }
    Strategy::from_str(s)
        .map(|strategy| vec![strategy])
        .map_err(|_| {
            format!(
                "Invalid strategy '{}'. Valid options: first, best, worst, all",
                s
            )
        })
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let (blocks, processes) = if args.sample || (args.blocks.is_none() && args.processes.is_none())
    {
        (SAMPLE_BLOCKS.to_vec(), SAMPLE_PROCESSES.to_vec())
    } else {
        let raw_blocks = args
            .blocks
            .as_deref()
            .context("--blocks is required unless --sample is used")?;
        let raw_processes = args
            .processes
            .as_deref()
            .context("--processes is required unless --sample is used")?;
        (parse_size_list(raw_blocks)?, parse_size_list(raw_processes)?)
    };

    let strategies = parse_strategies(&args.strategy).map_err(anyhow::Error::msg)?;

    println!("Memory Allocation & Fragmentation Analyzer");
    println!("-----------------------------------------");
    println!("Blocks (KB): {:?}", blocks);
    println!("Processes (KB): {:?}", processes);

    let results = if strategies.len() == Strategy::ALL.len() {
        run_all(&blocks, &processes)?
    } else {
        strategies
            .iter()
            .map(|&strategy| run(strategy, &blocks, &processes))
            .collect::<memalyzer_rs::Result<Vec<_>>>()?
    };

    for result in &results {
        println!();
        println!("{}", report::strategy_report(result));
    }

    println!();
    println!("{}", report::comparison_report(&build_comparison(&results)));

    if let Some(path) = &args.csv {
        let mut file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        report::write_csv(&mut file, &results)?;
        info!("CSV report written to {}", path.display());
        println!("\nReport exported to: {}", path.display());
    }

    if let Some(path) = &args.json {
        let mut file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        report::write_json(&mut file, &results)?;
        info!("JSON report written to {}", path.display());
        println!("\nJSON exported to: {}", path.display());
    }

    Ok(())
}
