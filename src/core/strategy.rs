//! Placement strategies
//!
//! Each strategy is a pure decision function over the current block state:
//! it picks a target block id for a request, or `None` when nothing fits.
//! The allocator applies the decision; strategies never mutate.

use crate::core::block::Block;
use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// The closed set of placement rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    FirstFit,
    BestFit,
    WorstFit,
}

impl Strategy {
    /// All strategies, in declaration order
    pub const ALL: [Strategy; 3] = [Strategy::FirstFit, Strategy::BestFit, Strategy::WorstFit];

    /// Pick the target block for a request of `process_size` KB
    ///
    /// Scans the blocks in ascending id order. Ties on size resolve to the
    /// smallest id, i.e. the first extremal candidate encountered.
    pub fn select(&self, blocks: &[Block], process_size: u64) -> Option<usize> {
        let mut candidates = blocks.iter().filter(|b| b.fits(process_size));

        match self {
            Strategy::FirstFit => candidates.next().map(|b| b.id),
            Strategy::BestFit => candidates.min_by_key(|b| (b.size, b.id)).map(|b| b.id),
            Strategy::WorstFit => candidates
                .max_by_key(|b| (b.size, Reverse(b.id)))
                .map(|b| b.id),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::FirstFit => "First Fit",
            Strategy::BestFit => "Best Fit",
            Strategy::WorstFit => "Worst Fit",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Strategy {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "first" | "firstfit" | "ff" => Ok(Strategy::FirstFit),
            "best" | "bestfit" | "bf" => Ok(Strategy::BestFit),
            "worst" | "worstfit" | "wf" => Ok(Strategy::WorstFit),
            _ => Err(AnalyzerError::UnknownStrategy(s.to_string())),
        }
    }
}
