//! Basic Memalyzer Usage Example
//!
//! Demonstrates the core functionality:
//! - Running all three strategies over the sample input
//! - Reading per-block allocation state
//! - Rendering the comparison table
//!
//! Run with: cargo run --example basic

use memalyzer_rs::{build_comparison, report, run_all};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Memalyzer Basic Usage ===\n");

    let blocks = [100, 500, 200, 300, 600];
    let processes = [212, 417, 112, 426];

    println!("1. Running all strategies...");
    let results = run_all(&blocks, &processes)?;
    println!("   ✓ {} runs complete", results.len());
    println!();

    println!("2. Inspecting per-strategy outcomes...");
    for result in &results {
        let placed = result.processes.len() - result.unallocated.len();
        println!(
            "   {}: {}/{} processes placed",
            result.strategy,
            placed,
            result.processes.len()
        );
    }
    println!();

    println!("3. Per-strategy report for the first run:\n");
    println!("{}", report::strategy_report(&results[0]));
    println!();

    println!("4. Final comparison:\n");
    let comparison = build_comparison(&results);
    println!("{}", report::comparison_report(&comparison));
    println!();

    println!("5. Error percentage per strategy:");
    for row in &comparison {
        let pct = report::error_percentage(&row.metrics, results[0].total_memory());
        println!("   {}: {:.2}%", row.strategy, pct);
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
