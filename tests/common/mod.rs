// Not every test binary uses every fixture.
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};

use putting_analyzer::model::{
    CompetitionFormat, GrassType, GreenCondition, HoleData, MentalState, PuttData, Round,
    RoundType, ScoreResult, SlopeLeftRight, SlopeUpDown, Weather, WindSpeed,
};

pub fn putt(stroke_number: u8, distance_meters: f64, cup_in: bool) -> PuttData {
    PuttData {
        stroke_number,
        cup_in,
        dist_prev: None,
        result: None,
        length_steps: None,
        length_yards: None,
        distance_meters,
        missed_direction: None,
        touch: None,
        line_ud: SlopeUpDown::Flat,
        line_lr: SlopeLeftRight::Straight,
        mental: MentalState::Three,
    }
}

pub fn hole(hole_number: u32, putts: Vec<PuttData>) -> HoleData {
    let total_putts = putts.len() as u32;
    HoleData {
        hole_number,
        score_result: ScoreResult::Par,
        total_putts,
        putts,
    }
}

/// Hole with a putt count but no per-putt detail, the way older rounds
/// were recorded.
pub fn hole_with_total(hole_number: u32, total_putts: u32) -> HoleData {
    HoleData {
        hole_number,
        score_result: ScoreResult::Par,
        total_putts,
        putts: vec![],
    }
}

pub fn round_on(date: DateTime<Utc>, holes: Vec<HoleData>) -> Round {
    let total_putts = holes.iter().map(|h| h.total_putts).sum();
    Round {
        id: "test-round".to_string(),
        date,
        weather: Weather::Sunny,
        temperature: None,
        wind_speed: WindSpeed::Calm,
        course_id: "course-1".to_string(),
        course_name: "Riverside GC".to_string(),
        front_nine_green: "A".to_string(),
        back_nine_green: "A".to_string(),
        round_type: RoundType::Practice,
        competition_format: CompetitionFormat::Stroke,
        grass_type: GrassType::Bent,
        stimpmeter: 9.5,
        mowing_height: None,
        compaction: None,
        green_condition: GreenCondition::Good,
        putter_id: "putter-1".to_string(),
        putter_name: "Test Putter".to_string(),
        holes,
        total_putts,
        created_at: date,
        updated_at: date,
    }
}

pub fn round(holes: Vec<HoleData>) -> Round {
    round_on(Utc::now() - Duration::days(1), holes)
}

/// One hole per putt; a holed putt counts one stroke, a miss two.
pub fn round_of_putts(putts: Vec<PuttData>) -> Round {
    let holes = putts
        .into_iter()
        .enumerate()
        .map(|(i, p)| HoleData {
            hole_number: i as u32 + 1,
            score_result: ScoreResult::Par,
            total_putts: if p.cup_in { 1 } else { 2 },
            putts: vec![p],
        })
        .collect();
    round(holes)
}
