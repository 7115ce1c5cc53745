//! Case-outcome rollup.
//!
//! Summarises a list of past cases into the counts and win rate shown
//! above a case history. All percentages round half up.

use directory::{CaseOutcome, CaseRecord};

/// Aggregate statistics over a case collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseRollup {
    pub total: usize,
    pub won: usize,
    pub lost: usize,
    pub settled: usize,
    /// `round(won / total * 100)`, 0 for an empty collection
    pub win_rate: u32,
    /// Cases flagged as precedent
    pub precedents: usize,
    /// Rounded mean relevance score, 0 for an empty collection
    pub average_relevance: u32,
}

impl CaseRollup {
    /// Count outcomes in one pass. The result does not depend on order.
    pub fn from_cases(cases: &[CaseRecord]) -> Self {
        let mut rollup = CaseRollup {
            total: cases.len(),
            ..Default::default()
        };
        let mut relevance_sum: u64 = 0;

        for case in cases {
            match case.outcome {
                CaseOutcome::Won => rollup.won += 1,
                CaseOutcome::Lost => rollup.lost += 1,
                CaseOutcome::Settled => rollup.settled += 1,
            }
            if case.precedent {
                rollup.precedents += 1;
            }
            relevance_sum += u64::from(case.relevance_score);
        }

        rollup.win_rate = percent_half_up(rollup.won as u64, rollup.total as u64);
        rollup.average_relevance = divide_half_up(relevance_sum, rollup.total as u64);
        rollup
    }
}

/// `round(part / whole * 100)` with halves rounded up, 0 when `whole` is 0
pub fn percent_half_up(part: u64, whole: u64) -> u32 {
    divide_half_up(part * 100, whole)
}

fn divide_half_up(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    ((2 * numerator + denominator) / (2 * denominator)) as u32
}
