//! Per-run aggregates and the cross-strategy comparison

use crate::core::allocator::AllocationResult;
use crate::core::block::BlockStatus;
use crate::core::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// Aggregate figures for one strategy run, all sizes in KB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub allocated_count: usize,
    pub total_processes: usize,
    pub total_internal_frag: u64,
    pub total_free: u64,

    /// 0 when no block is free
    pub largest_free_block: u64,

    /// Free memory not usable as one contiguous block:
    /// `total_free - largest_free_block`
    pub external_frag: u64,
}

/// One row of the cross-strategy comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub strategy: Strategy,
    pub metrics: RunMetrics,
}

/// Fold the final block state of a run into its aggregate figures
pub fn summarize(result: &AllocationResult) -> RunMetrics {
    let total_internal_frag = result
        .blocks
        .iter()
        .filter(|b| b.status == BlockStatus::Allocated)
        .map(|b| b.internal_frag)
        .sum();
    let total_free: u64 = result
        .blocks
        .iter()
        .filter(|b| b.is_free())
        .map(|b| b.size)
        .sum();
    let largest_free_block = result
        .blocks
        .iter()
        .filter(|b| b.is_free())
        .map(|b| b.size)
        .max()
        .unwrap_or(0);

    RunMetrics {
        allocated_count: result.processes.len() - result.unallocated.len(),
        total_processes: result.processes.len(),
        total_internal_frag,
        total_free,
        largest_free_block,
        external_frag: total_free - largest_free_block,
    }
}

/// Map each run through [`summarize`], preserving input order
pub fn build_comparison(results: &[AllocationResult]) -> Vec<ComparisonRow> {
    results
        .iter()
        .map(|result| ComparisonRow {
            strategy: result.strategy,
            metrics: summarize(result),
        })
        .collect()
}
