use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::types::{
    CompetitionFormat, GrassType, GreenCondition, MentalState, RoundType, ScoreResult,
    SlopeLeftRight, SlopeUpDown, Weather, WindSpeed,
};

/// One stroke on the green. Only the first three putts of a hole get a
/// section on the card; anything optional was simply not written down.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PuttData {
    pub stroke_number: u8,
    #[serde(default)]
    pub cup_in: bool,
    /// Distance left over from the previous stroke, in yards.
    pub dist_prev: Option<f64>,
    /// On the first putt, the hole score marked on the card.
    pub result: Option<ScoreResult>,
    pub length_steps: Option<f64>,
    pub length_yards: Option<f64>,
    /// Canonical putt distance. Derived from paced steps at ingestion.
    pub distance_meters: f64,
    /// Clock-face direction of a miss.
    pub missed_direction: Option<u8>,
    pub touch: Option<u8>,
    pub line_ud: SlopeUpDown,
    pub line_lr: SlopeLeftRight,
    pub mental: MentalState,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HoleData {
    pub hole_number: u32,
    pub score_result: ScoreResult,
    #[serde(default)]
    pub total_putts: u32,
    pub putts: Vec<PuttData>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Round {
    #[serde(default)]
    pub id: String,
    pub date: DateTime<Utc>,
    pub weather: Weather,
    pub temperature: Option<f64>,
    pub wind_speed: WindSpeed,
    pub course_id: String,
    pub course_name: String,
    pub front_nine_green: String,
    pub back_nine_green: String,
    pub round_type: RoundType,
    pub competition_format: CompetitionFormat,
    pub grass_type: GrassType,
    /// Green speed in feet.
    pub stimpmeter: f64,
    /// Mowing height in millimeters.
    pub mowing_height: Option<f64>,
    pub compaction: Option<f64>,
    pub green_condition: GreenCondition,
    pub putter_id: String,
    pub putter_name: String,
    pub holes: Vec<HoleData>,
    #[serde(default)]
    pub total_putts: u32,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Round {
    /// Re-derives `total_putts` per hole and for the round, so the stored
    /// counts always agree with the recorded putts.
    pub fn recompute_totals(&mut self) {
        let mut round_total = 0u32;
        for hole in &mut self.holes {
            let count = u32::try_from(hole.putts.len()).unwrap_or(u32::MAX);
            hole.total_putts = count;
            round_total = round_total.saturating_add(count);
        }
        self.total_putts = round_total;
    }
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{MentalState, ScoreResult, SlopeLeftRight, SlopeUpDown};

    fn putt(stroke_number: u8) -> PuttData {
        PuttData {
            stroke_number,
            cup_in: false,
            dist_prev: None,
            result: None,
            length_steps: None,
            length_yards: None,
            distance_meters: 3.0,
            missed_direction: None,
            touch: None,
            line_ud: SlopeUpDown::Flat,
            line_lr: SlopeLeftRight::Straight,
            mental: MentalState::Three,
        }
    }

    #[test]
    fn recompute_totals_rederives_counts() {
        let mut round: Round = serde_json::from_value(serde_json::json!({
            "date": "2026-04-01T09:00:00Z",
            "weather": "sunny",
            "temperature": null,
            "wind_speed": "calm",
            "course_id": "c1",
            "course_name": "Riverside",
            "front_nine_green": "A",
            "back_nine_green": "B",
            "round_type": "practice",
            "competition_format": "stroke",
            "grass_type": "bent",
            "stimpmeter": 9.5,
            "mowing_height": null,
            "compaction": null,
            "green_condition": "good",
            "putter_id": "p1",
            "putter_name": "Blade",
            "holes": [],
            "total_putts": 99
        }))
        .unwrap();
        round.holes = vec![
            HoleData {
                hole_number: 1,
                score_result: ScoreResult::Par,
                total_putts: 0,
                putts: vec![putt(1), putt(2)],
            },
            HoleData {
                hole_number: 2,
                score_result: ScoreResult::Birdie,
                total_putts: 0,
                putts: vec![putt(1)],
            },
        ];

        round.recompute_totals();

        assert_eq!(round.holes[0].total_putts, 2);
        assert_eq!(round.holes[1].total_putts, 1);
        assert_eq!(round.total_putts, 3);
    }
}
