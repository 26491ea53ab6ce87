//! Memory partition state for a single strategy run
//!
//! A `BlockTable` holds the fixed partitions of one run in input order.
//! Blocks only ever move FREE -> ALLOCATED; nothing in this crate splits,
//! merges, or frees a block.

use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};

/// Allocation state of a memory block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockStatus {
    Free,
    Allocated,
}

/// A fixed-size contiguous memory partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// 0-based index, stable across the run
    pub id: usize,

    /// Partition size in KB, immutable once the run starts
    pub size: u64,

    pub status: BlockStatus,

    /// PID of the occupant process, if any
    pub occupant: Option<String>,

    /// Size the occupant requested, in KB
    pub requested: Option<u64>,

    /// Unused space inside the block while allocated; 0 while free
    pub internal_frag: u64,
}

impl Block {
    fn new(id: usize, size: u64) -> Self {
        Block {
            id,
            size,
            status: BlockStatus::Free,
            occupant: None,
            requested: None,
            internal_frag: 0,
        }
    }

    pub fn is_free(&self) -> bool {
        self.status == BlockStatus::Free
    }

    /// Whether a request of `size` KB fits into this block while it is free
    pub fn fits(&self, size: u64) -> bool {
        self.is_free() && self.size >= size
    }
}

/// A process requesting memory
///
/// PIDs are `P<k>` with k the 1-based position in the input sequence,
/// fixed at construction and independent of allocation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub pid: String,
    pub size: u64,
}

impl Process {
    pub fn new(index: usize, size: u64) -> Self {
        Process {
            pid: format!("P{}", index + 1),
            size,
        }
    }
}

/// Ordered set of memory partitions with mutable allocation state
///
/// Created fresh (all blocks free) at the start of each strategy run and
/// discarded after metrics extraction. Runs never share a table.
#[derive(Debug, Clone)]
pub struct BlockTable {
    blocks: Vec<Block>,
}

impl BlockTable {
    /// Build a table of free blocks from the given sizes, keyed 0..N-1
    pub fn new(sizes: &[u64]) -> Self {
        let blocks = sizes
            .iter()
            .enumerate()
            .map(|(id, &size)| Block::new(id, size))
            .collect();
        BlockTable { blocks }
    }

    /// Current block state in table order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, id: usize) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Iterate over the blocks still free
    pub fn free_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.is_free())
    }

    /// Total memory managed by this table, in KB
    pub fn total_memory(&self) -> u64 {
        self.blocks.iter().map(|b| b.size).sum()
    }

    /// Place a process into a free block
    ///
    /// Fails if the block does not exist, is already allocated, or is smaller
    /// than the request. Correct strategies never hand out such a block, so
    /// any of these failures indicates a strategy bug rather than bad input.
    pub fn allocate(&mut self, block_id: usize, process: &Process) -> Result<()> {
        let block = self
            .blocks
            .get_mut(block_id)
            .ok_or(AnalyzerError::UnknownBlock(block_id))?;

        if !block.is_free() {
            return Err(AnalyzerError::BlockNotFree(block_id));
        }
        if block.size < process.size {
            return Err(AnalyzerError::BlockTooSmall {
                block: block_id,
                size: block.size,
                requested: process.size,
            });
        }

        block.status = BlockStatus::Allocated;
        block.occupant = Some(process.pid.clone());
        block.requested = Some(process.size);
        block.internal_frag = block.size - process.size;
        Ok(())
    }

    /// Release the final block state into a run result
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}
