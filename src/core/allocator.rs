//! Strategy run orchestration
//!
//! One `run` builds a fresh block table, walks the processes strictly in
//! input order, asks the strategy for a target block against the current
//! state, and records the outcome. Earlier processes may consume blocks
//! that later, smaller processes could have used; there is no lookahead,
//! reordering, or backtracking, and unallocated is terminal for a run.

use crate::core::block::{Block, BlockTable, Process};
use crate::core::strategy::Strategy;
use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Final state of one strategy run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub strategy: Strategy,

    /// Final block state, in table order
    pub blocks: Vec<Block>,

    /// The process list as constructed from the input, in input order
    pub processes: Vec<Process>,

    /// PIDs no free block could hold at their turn, in input order
    pub unallocated: Vec<String>,
}

impl AllocationResult {
    /// Sum of all block sizes, in KB
    pub fn total_memory(&self) -> u64 {
        self.blocks.iter().map(|b| b.size).sum()
    }
}

fn validate_sizes(sizes: &[u64], what: &'static str, allow_empty: bool) -> Result<()> {
    if sizes.is_empty() && !allow_empty {
        return Err(AnalyzerError::EmptyInput { what });
    }
    for (index, &size) in sizes.iter().enumerate() {
        if size == 0 {
            return Err(AnalyzerError::ZeroSize { what, index });
        }
    }
    Ok(())
}

/// Validate both input sequences before any allocation is attempted
///
/// An empty process list is a valid degenerate run (every block stays free);
/// an empty block list is not.
pub fn validate_inputs(block_sizes: &[u64], process_sizes: &[u64]) -> Result<()> {
    validate_sizes(block_sizes, "memory blocks", false)?;
    validate_sizes(process_sizes, "processes", true)
}

/// Run one placement strategy against fresh block state
pub fn run(
    strategy: Strategy,
    block_sizes: &[u64],
    process_sizes: &[u64],
) -> Result<AllocationResult> {
    validate_inputs(block_sizes, process_sizes)?;

    debug!(
        "running {} over {} blocks / {} processes",
        strategy,
        block_sizes.len(),
        process_sizes.len()
    );

    let mut table = BlockTable::new(block_sizes);
    let processes: Vec<Process> = process_sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| Process::new(i, size))
        .collect();
    let mut unallocated = Vec::new();

    for process in &processes {
        match strategy.select(table.blocks(), process.size) {
            Some(block_id) => {
                debug!("{}: {} KB -> block {}", process.pid, process.size, block_id);
                table.allocate(block_id, process)?;
            }
            None => {
                debug!("{}: {} KB -> no fit", process.pid, process.size);
                unallocated.push(process.pid.clone());
            }
        }
    }

    Ok(AllocationResult {
        strategy,
        blocks: table.into_blocks(),
        processes,
        unallocated,
    })
}

/// Run every strategy in declaration order against independent block tables
pub fn run_all(block_sizes: &[u64], process_sizes: &[u64]) -> Result<Vec<AllocationResult>> {
    Strategy::ALL
        .iter()
        .map(|&strategy| run(strategy, block_sizes, process_sizes))
        .collect()
}
