use serde::Serialize;

use crate::analytics::extract::{all_holes, first_putts};
use crate::model::Round;

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct BasicStats {
    pub total_rounds: usize,
    pub total_holes: usize,
    pub total_putts: u32,
    pub average_putts_per_round: f64,
    pub average_putts_per_hole: f64,
}

/// Percentage of `hits` over `attempts`. An empty denominator is 0.0,
/// never NaN.
#[must_use]
pub fn rate_percentage(hits: usize, attempts: usize) -> f64 {
    if attempts == 0 {
        0.0
    } else {
        hits as f64 / attempts as f64 * 100.0
    }
}

#[must_use]
pub fn basic_stats(rounds: &[Round]) -> BasicStats {
    let total_rounds = rounds.len();
    let total_holes = all_holes(rounds).count();
    let total_putts = rounds
        .iter()
        .fold(0u32, |acc, round| acc.saturating_add(round.total_putts));

    let average_putts_per_round = if total_rounds == 0 {
        0.0
    } else {
        f64::from(total_putts) / total_rounds as f64
    };
    let average_putts_per_hole = if total_holes == 0 {
        0.0
    } else {
        f64::from(total_putts) / total_holes as f64
    };

    BasicStats {
        total_rounds,
        total_holes,
        total_putts,
        average_putts_per_round,
        average_putts_per_hole,
    }
}

/// Percentage of holes finished in exactly one putt.
#[must_use]
pub fn one_putt_rate(rounds: &[Round]) -> f64 {
    let mut holes = 0usize;
    let mut one_putts = 0usize;
    for hole in all_holes(rounds) {
        holes += 1;
        if hole.total_putts == 1 {
            one_putts += 1;
        }
    }
    rate_percentage(one_putts, holes)
}

/// Percentage of holes that took three putts or more.
#[must_use]
pub fn three_putt_rate(rounds: &[Round]) -> f64 {
    let mut holes = 0usize;
    let mut three_putts = 0usize;
    for hole in all_holes(rounds) {
        holes += 1;
        if hole.total_putts >= 3 {
            three_putts += 1;
        }
    }
    rate_percentage(three_putts, holes)
}

/// First-putt conversion: percentage of stroke-1 putts that dropped.
/// Holes with no recorded putts contribute nothing either way.
#[must_use]
pub fn cup_in_rate(rounds: &[Round]) -> f64 {
    let mut attempts = 0usize;
    let mut cup_ins = 0usize;
    for putt in first_putts(rounds) {
        attempts += 1;
        if putt.cup_in {
            cup_ins += 1;
        }
    }
    rate_percentage(cup_ins, attempts)
}
