//! # Memalyzer - Fixed-Partition Allocation Analyzer
//!
//! `memalyzer-rs` simulates contiguous fixed-partition memory allocation and
//! compares three placement strategies — First Fit, Best Fit, Worst Fit —
//! against the same block and process size lists:
//!
//! - **Deterministic placement**: strict input-order evaluation, stable
//!   tie-breaking, no lookahead or backtracking
//! - **Fragmentation metrics**: internal fragmentation per block, external
//!   fragmentation per run, cross-strategy comparison
//! - **Run isolation**: every strategy run owns a fresh block table
//! - **Report rendering**: aligned text tables, CSV and JSON export
//!
//! ## Quick Start
//!
//! ```rust
//! use memalyzer_rs::{build_comparison, run_all, Result};
//!
//! # fn main() -> Result<()> {
//! let results = run_all(&[100, 500, 200, 300, 600], &[212, 417, 112, 426])?;
//!
//! for row in build_comparison(&results) {
//!     println!(
//!         "{}: {}/{} allocated, {} KB internal frag",
//!         row.strategy,
//!         row.metrics.allocated_count,
//!         row.metrics.total_processes,
//!         row.metrics.total_internal_frag
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Advanced Usage
//!
//! ```rust
//! use memalyzer_rs::{AnalyzerBuilder, Result, Strategy};
//!
//! # fn main() -> Result<()> {
//! // Use the builder to run a single strategy
//! let analyzer = AnalyzerBuilder::new()
//!     .blocks([100, 500, 200, 300, 600])
//!     .processes([212, 417, 112, 426])
//!     .strategy(Strategy::BestFit)
//!     .build()?;
//!
//! let results = analyzer.run()?;
//! assert!(results[0].unallocated.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    build_comparison, parse_size_list, run, run_all, summarize, validate_inputs, AllocationResult,
    Block, BlockStatus, BlockTable, ComparisonRow, Process, RunMetrics, Strategy,
};
pub use crate::error::{AnalyzerError, Result};

use tracing::debug;

/// High-level analyzer API
///
/// Holds validated inputs and a strategy selection; each call to
/// [`Analyzer::run`] executes the configured strategies against independent
/// block tables, so an `Analyzer` can be reused freely.
///
/// # Examples
///
/// ```rust
/// use memalyzer_rs::{Analyzer, Result};
///
/// # fn main() -> Result<()> {
/// let analyzer = Analyzer::new(vec![100, 500, 200], vec![90, 450])?;
/// let comparison = analyzer.comparison()?;
/// assert_eq!(comparison.len(), 3);
/// # Ok(())
/// # }
/// ```
pub struct Analyzer {
    block_sizes: Vec<u64>,
    process_sizes: Vec<u64>,
    strategies: Vec<Strategy>,
}

impl Analyzer {
    /// Create an analyzer that compares all strategies
    pub fn new(block_sizes: Vec<u64>, process_sizes: Vec<u64>) -> Result<Self> {
        AnalyzerBuilder::new()
            .blocks(block_sizes)
            .processes(process_sizes)
            .build()
    }

    /// The strategies this analyzer runs, in execution order
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Total memory across all blocks, in KB
    pub fn total_memory(&self) -> u64 {
        self.block_sizes.iter().sum()
    }

    /// Execute the configured strategies against fresh block tables
    pub fn run(&self) -> Result<Vec<AllocationResult>> {
        self.strategies
            .iter()
            .map(|&strategy| crate::core::run(strategy, &self.block_sizes, &self.process_sizes))
            .collect()
    }

    /// Run and fold each result into a comparison row
    pub fn comparison(&self) -> Result<Vec<ComparisonRow>> {
        Ok(build_comparison(&self.run()?))
    }
}

/// Builder for configuring an [`Analyzer`]
///
/// # Examples
///
/// ```rust
/// use memalyzer_rs::{AnalyzerBuilder, Strategy};
///
/// # fn main() -> memalyzer_rs::Result<()> {
/// let analyzer = AnalyzerBuilder::new()
///     .blocks([100, 500])
///     .processes([80])
///     .strategy(Strategy::WorstFit)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct AnalyzerBuilder {
    block_sizes: Vec<u64>,
    process_sizes: Vec<u64>,
    strategies: Vec<Strategy>,
}

impl AnalyzerBuilder {
    /// Create a builder that defaults to comparing all strategies
    pub fn new() -> Self {
        AnalyzerBuilder {
            block_sizes: Vec::new(),
            process_sizes: Vec::new(),
            strategies: Strategy::ALL.to_vec(),
        }
    }

    /// Set the memory block sizes in KB
    pub fn blocks<I: IntoIterator<Item = u64>>(mut self, sizes: I) -> Self {
        self.block_sizes = sizes.into_iter().collect();
        self
    }

    /// Set the process sizes in KB
    pub fn processes<I: IntoIterator<Item = u64>>(mut self, sizes: I) -> Self {
        self.process_sizes = sizes.into_iter().collect();
        self
    }

    /// Run a single strategy instead of all three
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategies = vec![strategy];
        self
    }

    /// Compare all strategies in declaration order (the default)
    pub fn all_strategies(mut self) -> Self {
        self.strategies = Strategy::ALL.to_vec();
        self
    }

    /// Validate the inputs and build the analyzer
    ///
    /// # Errors
    ///
    /// Returns the invalid-input error class for an empty block list or any
    /// zero-valued size, before any allocation is attempted.
    pub fn build(self) -> Result<Analyzer> {
        validate_inputs(&self.block_sizes, &self.process_sizes)?;

        debug!(
            "analyzer configured: {} blocks, {} processes, {} strategies",
            self.block_sizes.len(),
            self.process_sizes.len(),
            self.strategies.len()
        );

        Ok(Analyzer {
            block_sizes: self.block_sizes,
            process_sizes: self.process_sizes,
            strategies: self.strategies,
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
