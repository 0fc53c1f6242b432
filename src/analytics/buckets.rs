use serde::Serialize;

use crate::analytics::basic::rate_percentage;
use crate::analytics::extract::first_putts;
use crate::model::{MentalState, Round, SlopeUpDown};

/// Half-open bucket `[min, max)`.
#[derive(Clone, Copy, Debug)]
pub struct BucketRange {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl BucketRange {
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

pub const DISTANCE_RANGES: [BucketRange; 7] = [
    BucketRange { label: "0-1m", min: 0.0, max: 1.0 },
    BucketRange { label: "1-2m", min: 1.0, max: 2.0 },
    BucketRange { label: "2-3m", min: 2.0, max: 3.0 },
    BucketRange { label: "3-5m", min: 3.0, max: 5.0 },
    BucketRange { label: "5-7m", min: 5.0, max: 7.0 },
    BucketRange { label: "7-10m", min: 7.0, max: 10.0 },
    BucketRange { label: "10m+", min: 10.0, max: f64::INFINITY },
];

pub const SPEED_RANGES: [BucketRange; 5] = [
    BucketRange { label: "~8ft", min: 0.0, max: 8.0 },
    BucketRange { label: "8-9ft", min: 8.0, max: 9.0 },
    BucketRange { label: "9-10ft", min: 9.0, max: 10.0 },
    BucketRange { label: "10-11ft", min: 10.0, max: 11.0 },
    BucketRange { label: "11ft+", min: 11.0, max: f64::INFINITY },
];

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DistanceStats {
    pub range: &'static str,
    pub attempts: usize,
    pub cup_ins: usize,
    pub rate: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SlopeStats {
    pub slope: SlopeUpDown,
    pub attempts: usize,
    pub cup_ins: usize,
    pub rate: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GreenSpeedStats {
    pub speed_range: &'static str,
    pub rounds: usize,
    pub average_putts: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MentalStats {
    pub mental: MentalState,
    pub attempts: usize,
    pub cup_ins: usize,
    pub rate: f64,
}

fn bucket_index(ranges: &[BucketRange], value: f64) -> Option<usize> {
    ranges.iter().position(|range| range.contains(value))
}

/// Cup-in rate of first putts, bucketed by distance. Every bucket appears
/// in table order even when empty.
#[must_use]
pub fn distance_stats(rounds: &[Round]) -> Vec<DistanceStats> {
    let mut attempts = [0usize; DISTANCE_RANGES.len()];
    let mut cup_ins = [0usize; DISTANCE_RANGES.len()];

    for putt in first_putts(rounds) {
        if let Some(idx) = bucket_index(&DISTANCE_RANGES, putt.distance_meters) {
            attempts[idx] += 1;
            if putt.cup_in {
                cup_ins[idx] += 1;
            }
        }
    }

    DISTANCE_RANGES
        .iter()
        .enumerate()
        .map(|(idx, range)| DistanceStats {
            range: range.label,
            attempts: attempts[idx],
            cup_ins: cup_ins[idx],
            rate: rate_percentage(cup_ins[idx], attempts[idx]),
        })
        .collect()
}

fn slope_bucket(slope: SlopeUpDown) -> usize {
    match slope {
        SlopeUpDown::Flat => 0,
        SlopeUpDown::Uphill => 1,
        SlopeUpDown::Downhill => 2,
        SlopeUpDown::UpDown => 3,
        SlopeUpDown::DownUp => 4,
    }
}

#[must_use]
pub fn slope_stats(rounds: &[Round]) -> Vec<SlopeStats> {
    let mut attempts = [0usize; SlopeUpDown::ALL.len()];
    let mut cup_ins = [0usize; SlopeUpDown::ALL.len()];

    for putt in first_putts(rounds) {
        let idx = slope_bucket(putt.line_ud);
        attempts[idx] += 1;
        if putt.cup_in {
            cup_ins[idx] += 1;
        }
    }

    SlopeUpDown::ALL
        .iter()
        .enumerate()
        .map(|(idx, &slope)| SlopeStats {
            slope,
            attempts: attempts[idx],
            cup_ins: cup_ins[idx],
            rate: rate_percentage(cup_ins[idx], attempts[idx]),
        })
        .collect()
}

/// Average putts per hole, bucketed by stimpmeter reading. Buckets hold
/// rounds, not putts; the average divides the rounds' putt totals by
/// their hole counts.
#[must_use]
pub fn green_speed_stats(rounds: &[Round]) -> Vec<GreenSpeedStats> {
    let mut counts = [0usize; SPEED_RANGES.len()];
    let mut putt_totals = [0u64; SPEED_RANGES.len()];
    let mut hole_totals = [0u64; SPEED_RANGES.len()];

    for round in rounds {
        if let Some(idx) = bucket_index(&SPEED_RANGES, round.stimpmeter) {
            counts[idx] += 1;
            putt_totals[idx] += u64::from(round.total_putts);
            hole_totals[idx] += round.holes.len() as u64;
        }
    }

    SPEED_RANGES
        .iter()
        .enumerate()
        .map(|(idx, range)| GreenSpeedStats {
            speed_range: range.label,
            rounds: counts[idx],
            average_putts: if hole_totals[idx] == 0 {
                0.0
            } else {
                putt_totals[idx] as f64 / hole_totals[idx] as f64
            },
        })
        .collect()
}

fn mental_bucket(mental: MentalState) -> usize {
    match mental {
        MentalState::Positive => 0,
        MentalState::One => 1,
        MentalState::Two => 2,
        MentalState::Three => 3,
        MentalState::Four => 4,
        MentalState::Five => 5,
        MentalState::Negative => 6,
    }
}

#[must_use]
pub fn mental_stats(rounds: &[Round]) -> Vec<MentalStats> {
    let mut attempts = [0usize; MentalState::ALL.len()];
    let mut cup_ins = [0usize; MentalState::ALL.len()];

    for putt in first_putts(rounds) {
        let idx = mental_bucket(putt.mental);
        attempts[idx] += 1;
        if putt.cup_in {
            cup_ins[idx] += 1;
        }
    }

    MentalState::ALL
        .iter()
        .enumerate()
        .map(|(idx, &mental)| MentalStats {
            mental,
            attempts: attempts[idx],
            cup_ins: cup_ins[idx],
            rate: rate_percentage(cup_ins[idx], attempts[idx]),
        })
        .collect()
}
