use serde::{Deserialize, Serialize};

use crate::model::{
    HoleData, MentalState, PuttData, ScoreResult, SlopeLeftRight, SlopeUpDown, distance_from_steps,
};

/// One putt section as the vision model reads it off the card. Everything
/// beyond the section number can come back null.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OcrPuttData {
    pub putt_number: u8,
    #[serde(default)]
    pub cup_in: bool,
    pub dist_prev: Option<f64>,
    /// Card code: E, Ba, P, Bo or D+.
    pub result: Option<String>,
    pub length_steps: Option<f64>,
    pub length_yards: Option<f64>,
    pub missed_direction: Option<u8>,
    pub touch: Option<u8>,
    #[serde(rename = "lineUD")]
    pub line_ud: Option<String>,
    #[serde(rename = "lineLR")]
    pub line_lr: Option<String>,
    pub mental: Option<MentalState>,
}

impl OcrPuttData {
    /// An untouched section on the card reads back as all-null/false.
    fn has_data(&self) -> bool {
        self.cup_in
            || self.dist_prev.is_some()
            || self.result.is_some()
            || self.length_steps.is_some()
            || self.length_yards.is_some()
            || self.missed_direction.is_some()
            || self.touch.is_some()
            || self.line_ud.is_some()
            || self.line_lr.is_some()
            || self.mental.is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OcrHoleData {
    pub hole: Option<u32>,
    pub date: Option<String>,
    pub course: Option<String>,
    #[serde(default)]
    pub putts: Vec<OcrPuttData>,
}

/// Empty putt sections convert to `None` and stay off the hole.
#[must_use]
pub fn convert_ocr_putt(ocr: &OcrPuttData, stride_length: f64) -> Option<PuttData> {
    if !ocr.has_data() {
        return None;
    }

    let steps = ocr.length_steps.unwrap_or(0.0);
    Some(PuttData {
        stroke_number: ocr.putt_number,
        cup_in: ocr.cup_in,
        dist_prev: ocr.dist_prev,
        result: ocr.result.as_deref().and_then(ScoreResult::from_card_code),
        length_steps: ocr.length_steps,
        length_yards: ocr.length_yards,
        distance_meters: distance_from_steps(steps, stride_length),
        missed_direction: ocr.missed_direction,
        touch: ocr.touch,
        line_ud: ocr
            .line_ud
            .as_deref()
            .and_then(SlopeUpDown::from_card_code)
            .unwrap_or(SlopeUpDown::Flat),
        line_lr: ocr
            .line_lr
            .as_deref()
            .and_then(SlopeLeftRight::from_card_code)
            .unwrap_or(SlopeLeftRight::Straight),
        mental: ocr.mental.unwrap_or(MentalState::Three),
    })
}

/// A hole needs a readable hole number; the score comes from the Result
/// mark in section 1, falling back to par.
#[must_use]
pub fn convert_ocr_hole(ocr: &OcrHoleData, stride_length: f64) -> Option<HoleData> {
    let hole_number = match ocr.hole {
        Some(n) if n > 0 => n,
        _ => return None,
    };

    let mut putts = Vec::new();
    let mut score_result = ScoreResult::Par;

    for ocr_putt in &ocr.putts {
        if let Some(putt) = convert_ocr_putt(ocr_putt, stride_length) {
            putts.push(putt);
        }
        if ocr_putt.putt_number == 1
            && let Some(result) = ocr_putt.result.as_deref().and_then(ScoreResult::from_card_code)
        {
            score_result = result;
        }
    }

    let total_putts = u32::try_from(putts.len()).unwrap_or(u32::MAX);
    Some(HoleData {
        hole_number,
        score_result,
        total_putts,
        putts,
    })
}

/// Converts a pile of scanned cards and orders the holes for saving.
#[must_use]
pub fn convert_ocr_batch(ocr_results: &[OcrHoleData], stride_length: f64) -> Vec<HoleData> {
    let mut holes: Vec<HoleData> = ocr_results
        .iter()
        .filter_map(|ocr| convert_ocr_hole(ocr, stride_length))
        .collect();
    holes.sort_by_key(|hole| hole.hole_number);
    holes
}
