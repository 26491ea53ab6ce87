//! Plain-text, CSV, and JSON rendering of run results
//!
//! All formatting lives here; the core only produces structured results.
//! This module also owns the derived error-percentage display value, which
//! is a presentation concern rather than a core metric.

use crate::core::{build_comparison, summarize, AllocationResult, Block, BlockStatus, ComparisonRow, RunMetrics};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Column headers for the per-strategy block-status table
pub const BLOCK_HEADERS: [&str; 6] = [
    "Block ID",
    "Block Size (KB)",
    "Status",
    "PID",
    "Requested (KB)",
    "Internal Frag (KB)",
];

/// Column headers for the final comparison table
pub const COMPARISON_HEADERS: [&str; 6] = [
    "Method",
    "Allocated",
    "Total Internal Frag (KB)",
    "Total External Frag (KB)",
    "Total Free (KB)",
    "Largest Free (KB)",
];

fn status_label(status: BlockStatus) -> &'static str {
    match status {
        BlockStatus::Free => "FREE",
        BlockStatus::Allocated => "ALLOCATED",
    }
}

/// Cell rows for the per-strategy block-status table
pub fn block_rows(result: &AllocationResult) -> Vec<Vec<String>> {
    result
        .blocks
        .iter()
        .map(|block| {
            let allocated = block.status == BlockStatus::Allocated;
            vec![
                block.id.to_string(),
                block.size.to_string(),
                status_label(block.status).to_string(),
                block.occupant.clone().unwrap_or_else(|| "-".to_string()),
                block
                    .requested
                    .map_or_else(|| "-".to_string(), |r| r.to_string()),
                if allocated {
                    block.internal_frag.to_string()
                } else {
                    "-".to_string()
                },
            ]
        })
        .collect()
}

/// Cell rows for the final comparison table
pub fn comparison_rows(rows: &[ComparisonRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.strategy.to_string(),
                format!(
                    "{}/{}",
                    row.metrics.allocated_count, row.metrics.total_processes
                ),
                row.metrics.total_internal_frag.to_string(),
                row.metrics.external_frag.to_string(),
                row.metrics.total_free.to_string(),
                row.metrics.largest_free_block.to_string(),
            ]
        })
        .collect()
}

/// Render an aligned plain-text table with a dashed header rule
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let format_row = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(separator);
    lines.extend(rows.iter().map(|row| format_row(row.clone())));
    lines.join("\n")
}

/// Full per-strategy report: block table plus fragmentation summary
pub fn strategy_report(result: &AllocationResult) -> String {
    let metrics = summarize(result);

    let mut lines = vec![
        format!("=== {} ===", result.strategy),
        render_table(&BLOCK_HEADERS, &block_rows(result)),
        String::new(),
        "Fragmentation Summary".to_string(),
        format!(
            "Allocated Processes: {}/{}",
            metrics.allocated_count, metrics.total_processes
        ),
        format!(
            "Total Internal Fragmentation: {} KB",
            metrics.total_internal_frag
        ),
        format!("Total Free Memory: {} KB", metrics.total_free),
        format!("Largest Free Block: {} KB", metrics.largest_free_block),
        format!("External Fragmentation: {} KB", metrics.external_frag),
    ];

    if result.unallocated.is_empty() {
        lines.push("Unallocated Processes: None".to_string());
    } else {
        lines.push(format!(
            "Unallocated Processes: {}",
            result.unallocated.join(", ")
        ));
    }

    lines.join("\n")
}

/// The final cross-strategy comparison table
pub fn comparison_report(rows: &[ComparisonRow]) -> String {
    format!(
        "=== Final Comparison ===\n{}",
        render_table(&COMPARISON_HEADERS, &comparison_rows(rows))
    )
}

/// Display value `(internal + external fragmentation) / total memory * 100`
pub fn error_percentage(metrics: &RunMetrics, total_memory: u64) -> f64 {
    if total_memory == 0 {
        return 0.0;
    }
    (metrics.total_internal_frag + metrics.external_frag) as f64 / total_memory as f64 * 100.0
}

/// Write the CSV report: title, comparison table, then one block-table
/// section per strategy
///
/// Cells are plain digits, labels, and PIDs, so no CSV quoting is needed.
pub fn write_csv<W: Write>(writer: &mut W, results: &[AllocationResult]) -> Result<()> {
    let comparison = build_comparison(results);

    writeln!(writer, "Memory Allocation & Fragmentation Analyzer")?;
    writeln!(writer)?;
    writeln!(writer, "{}", COMPARISON_HEADERS.join(","))?;
    for row in comparison_rows(&comparison) {
        writeln!(writer, "{}", row.join(","))?;
    }

    for result in results {
        writeln!(writer)?;
        writeln!(writer, "{}", result.strategy)?;
        writeln!(writer, "{}", BLOCK_HEADERS.join(","))?;
        for row in block_rows(result) {
            writeln!(writer, "{}", row.join(","))?;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonRun<'a> {
    strategy: String,
    metrics: RunMetrics,
    blocks: &'a [Block],
    unallocated: &'a [String],
}

/// Write the results and their metrics as pretty-printed JSON
///
/// A structured feed for downstream consumers (visualizers, dashboards)
/// that do not want to scrape the text tables.
pub fn write_json<W: Write>(writer: &mut W, results: &[AllocationResult]) -> Result<()> {
    let runs: Vec<JsonRun<'_>> = results
        .iter()
        .map(|result| JsonRun {
            strategy: result.strategy.to_string(),
            metrics: summarize(result),
            blocks: &result.blocks,
            unallocated: &result.unallocated,
        })
        .collect();

    serde_json::to_writer_pretty(writer, &runs)?;
    Ok(())
}
