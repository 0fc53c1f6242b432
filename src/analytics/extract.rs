use crate::model::{HoleData, PuttData, Round};

pub fn all_holes(rounds: &[Round]) -> impl Iterator<Item = &HoleData> {
    rounds.iter().flat_map(|round| round.holes.iter())
}

pub fn all_putts(rounds: &[Round]) -> impl Iterator<Item = &PuttData> {
    all_holes(rounds).flat_map(|hole| hole.putts.iter())
}

/// Putts recorded as stroke number 1. The bucketed success rates read
/// only these; follow-up strokes are excluded.
pub fn first_putts(rounds: &[Round]) -> impl Iterator<Item = &PuttData> {
    all_putts(rounds).filter(|putt| putt.stroke_number == 1)
}
