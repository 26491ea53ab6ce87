//! End-to-end allocation scenarios over the documented sample input
//!
//! Blocks [100, 500, 200, 300, 600], processes [212, 417, 112, 426] have
//! hand-computed outcomes for every strategy; these tests pin them exactly.

use memalyzer_rs::{
    build_comparison, run, run_all, summarize, AllocationResult, AnalyzerError, BlockStatus,
    Strategy,
};

const BLOCKS: [u64; 5] = [100, 500, 200, 300, 600];
const PROCESSES: [u64; 4] = [212, 417, 112, 426];

fn occupant(result: &AllocationResult, block_id: usize) -> Option<&str> {
    result.blocks[block_id].occupant.as_deref()
}

#[test]
fn test_first_fit_sample() {
    let result = run(Strategy::FirstFit, &BLOCKS, &PROCESSES).unwrap();

    assert_eq!(occupant(&result, 0), None);
    assert_eq!(occupant(&result, 1), Some("P1"));
    assert_eq!(occupant(&result, 2), Some("P3"));
    assert_eq!(occupant(&result, 3), None);
    assert_eq!(occupant(&result, 4), Some("P2"));

    assert_eq!(result.blocks[1].internal_frag, 288);
    assert_eq!(result.blocks[2].internal_frag, 88);
    assert_eq!(result.blocks[4].internal_frag, 183);
    assert_eq!(result.unallocated, vec!["P4".to_string()]);

    let metrics = summarize(&result);
    assert_eq!(metrics.allocated_count, 3);
    assert_eq!(metrics.total_processes, 4);
    assert_eq!(metrics.total_internal_frag, 559);
    assert_eq!(metrics.total_free, 400);
    assert_eq!(metrics.largest_free_block, 300);
    assert_eq!(metrics.external_frag, 100);
}

#[test]
fn test_best_fit_sample() {
    let result = run(Strategy::BestFit, &BLOCKS, &PROCESSES).unwrap();

    assert_eq!(occupant(&result, 0), None);
    assert_eq!(occupant(&result, 1), Some("P2"));
    assert_eq!(occupant(&result, 2), Some("P3"));
    assert_eq!(occupant(&result, 3), Some("P1"));
    assert_eq!(occupant(&result, 4), Some("P4"));

    assert_eq!(result.blocks[1].internal_frag, 83);
    assert_eq!(result.blocks[2].internal_frag, 88);
    assert_eq!(result.blocks[3].internal_frag, 88);
    assert_eq!(result.blocks[4].internal_frag, 174);
    assert!(result.unallocated.is_empty());

    let metrics = summarize(&result);
    assert_eq!(metrics.allocated_count, 4);
    assert_eq!(metrics.total_internal_frag, 433);
    assert_eq!(metrics.total_free, 100);
    assert_eq!(metrics.largest_free_block, 100);
    assert_eq!(metrics.external_frag, 0);
}

#[test]
fn test_worst_fit_sample() {
    let result = run(Strategy::WorstFit, &BLOCKS, &PROCESSES).unwrap();

    assert_eq!(occupant(&result, 0), None);
    assert_eq!(occupant(&result, 1), Some("P2"));
    assert_eq!(occupant(&result, 2), None);
    assert_eq!(occupant(&result, 3), Some("P3"));
    assert_eq!(occupant(&result, 4), Some("P1"));

    assert_eq!(result.blocks[1].internal_frag, 83);
    assert_eq!(result.blocks[3].internal_frag, 188);
    assert_eq!(result.blocks[4].internal_frag, 388);
    assert_eq!(result.unallocated, vec!["P4".to_string()]);

    let metrics = summarize(&result);
    assert_eq!(metrics.allocated_count, 3);
    assert_eq!(metrics.total_internal_frag, 659);
    assert_eq!(metrics.total_free, 300);
    assert_eq!(metrics.largest_free_block, 200);
    assert_eq!(metrics.external_frag, 100);
}

#[test]
fn test_comparison_covers_all_strategies_in_order() {
    let results = run_all(&BLOCKS, &PROCESSES).unwrap();
    let rows = build_comparison(&results);

    let order: Vec<Strategy> = rows.iter().map(|r| r.strategy).collect();
    assert_eq!(order, Strategy::ALL.to_vec());

    // Best Fit wins on this input: everything placed, no external frag
    assert_eq!(rows[1].metrics.allocated_count, 4);
    assert_eq!(rows[1].metrics.external_frag, 0);
}

#[test]
fn test_every_process_lands_in_exactly_one_place() {
    for result in run_all(&BLOCKS, &PROCESSES).unwrap() {
        for process in &result.processes {
            let occupied = result
                .blocks
                .iter()
                .filter(|b| b.occupant.as_deref() == Some(process.pid.as_str()))
                .count();
            let unallocated = result
                .unallocated
                .iter()
                .filter(|pid| **pid == process.pid)
                .count();
            assert_eq!(
                occupied + unallocated,
                1,
                "{} misplaced under {}",
                process.pid,
                result.strategy
            );
        }
    }
}

#[test]
fn test_empty_process_list_leaves_all_blocks_free() {
    let result = run(Strategy::FirstFit, &BLOCKS, &[]).unwrap();

    assert!(result.blocks.iter().all(|b| b.status == BlockStatus::Free));
    assert!(result.unallocated.is_empty());

    let metrics = summarize(&result);
    assert_eq!(metrics.allocated_count, 0);
    assert_eq!(metrics.total_processes, 0);
    assert_eq!(metrics.total_internal_frag, 0);
    assert_eq!(metrics.total_free, 1700);
    assert_eq!(metrics.largest_free_block, 600);
    assert_eq!(metrics.external_frag, 1100);
}

#[test]
fn test_invalid_inputs_fail_before_any_allocation() {
    assert!(matches!(
        run(Strategy::FirstFit, &[], &PROCESSES),
        Err(AnalyzerError::EmptyInput { .. })
    ));
    assert!(matches!(
        run(Strategy::BestFit, &[100, 0, 200], &PROCESSES),
        Err(AnalyzerError::ZeroSize { index: 1, .. })
    ));
    assert!(matches!(
        run(Strategy::WorstFit, &BLOCKS, &[212, 0]),
        Err(AnalyzerError::ZeroSize { index: 1, .. })
    ));
}

#[test]
fn test_single_block_single_process() {
    let fits = run(Strategy::BestFit, &[100], &[100]).unwrap();
    assert_eq!(occupant(&fits, 0), Some("P1"));
    assert_eq!(fits.blocks[0].internal_frag, 0);

    let too_big = run(Strategy::BestFit, &[100], &[101]).unwrap();
    assert_eq!(occupant(&too_big, 0), None);
    assert_eq!(too_big.unallocated, vec!["P1".to_string()]);
}
