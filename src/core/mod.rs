//! Core allocation engine
//!
//! Everything in this module is deterministic and synchronous: a run takes
//! two validated size lists, walks the processes in input order against a
//! fresh block table, and hands back a structured result for the metrics
//! and report layers to consume.

pub mod allocator;
pub mod block;
pub mod metrics;
pub mod parse;
pub mod strategy;

pub use allocator::{run, run_all, validate_inputs, AllocationResult};
pub use block::{Block, BlockStatus, BlockTable, Process};
pub use metrics::{build_comparison, summarize, ComparisonRow, RunMetrics};
pub use parse::parse_size_list;
pub use strategy::Strategy;
