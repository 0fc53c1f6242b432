use serde::Serialize;

use crate::analytics::basic::{BasicStats, basic_stats, cup_in_rate, one_putt_rate, three_putt_rate};
use crate::analytics::buckets::{
    DistanceStats, GreenSpeedStats, MentalStats, SlopeStats, distance_stats, green_speed_stats,
    mental_stats, slope_stats,
};
use crate::model::Round;

/// Everything the summary view and JSON API need, computed over one
/// already-filtered slice of rounds.
#[derive(Serialize, Clone, Debug)]
pub struct AnalyticsSummary {
    pub basic: BasicStats,
    pub one_putt_rate: f64,
    pub three_putt_rate: f64,
    pub cup_in_rate: f64,
    pub distance_stats: Vec<DistanceStats>,
    pub slope_stats: Vec<SlopeStats>,
    pub green_speed_stats: Vec<GreenSpeedStats>,
    pub mental_stats: Vec<MentalStats>,
}

#[must_use]
pub fn analytics_summary(rounds: &[Round]) -> AnalyticsSummary {
    AnalyticsSummary {
        basic: basic_stats(rounds),
        one_putt_rate: one_putt_rate(rounds),
        three_putt_rate: three_putt_rate(rounds),
        cup_in_rate: cup_in_rate(rounds),
        distance_stats: distance_stats(rounds),
        slope_stats: slope_stats(rounds),
        green_speed_stats: green_speed_stats(rounds),
        mental_stats: mental_stats(rounds),
    }
}
