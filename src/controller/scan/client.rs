use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::controller::scan::convert::OcrHoleData;
use crate::error::CoreError;

/// System prompt for the vision model. The JSON schema at the end is the
/// contract `OcrHoleData` deserializes; keep the two in sync.
pub const SCORECARD_PROMPT: &str = r#"You are an OCR system specialized in reading the "Stroke Gained Putting" paper scorecard for golf.

## Physical card layout
- Black square registration marks in all four corners
- Header: Hole number (two boxes), Date (MM/DD boxes), Course (handwritten text)
- Three putt sections: 1st Putt, 2nd Putt, 3rd Putt, all with the same structure

## Fields in each putt section
- "In": one checkbox; filled = true, blank = false
- "Dist(prev)": two handwritten digits, yards left after the previous putt
- "Length": handwritten digits, steps (two boxes) and yards (three boxes)
- "Result": exactly one filled circle among E / Ba / P / Bo / D+
- "Missed Direction": exactly one filled circle among 1-5
- "Touch": exactly one filled circle among 1-5 (1 soft, 5 firm)
- "Line (U/D)": exactly one filled circle among F / U / D / UD / DU
- "Line (L/R)": exactly one filled circle among St / L / R / LR / RL
- "Mental (P/N)": exactly one filled circle among P / 1 / 2 / 3 / 4 / 5 / N

## Mark reading rules
- A circle filled black or heavily ringed counts as selected; a blank circle does not
- A checkbox filled or check-marked is true; blank is false
- Read handwritten digits carefully (0 vs 6, 1 vs 7)
- A putt section with nothing written gets null for every field
- Any field you cannot read is null
- Each circle group has at most one selection

Answer with this JSON shape and nothing else:
{
  "hole": number | null,
  "date": "MM/DD" | null,
  "course": string | null,
  "putts": [
    {
      "puttNumber": 1,
      "cupIn": boolean,
      "distPrev": number | null,
      "result": "E" | "Ba" | "P" | "Bo" | "D+" | null,
      "lengthSteps": number | null,
      "lengthYards": number | null,
      "missedDirection": 1 | 2 | 3 | 4 | 5 | null,
      "touch": 1 | 2 | 3 | 4 | 5 | null,
      "lineUD": "F" | "U" | "D" | "UD" | "DU" | null,
      "lineLR": "St" | "L" | "R" | "LR" | "RL" | null,
      "mental": "P" | 1 | 2 | 3 | 4 | 5 | "N" | null
    },
    { "puttNumber": 2, ... },
    { "puttNumber": 3, ... }
  ]
}"#;

const USER_PROMPT: &str = "Read this scorecard image. Judge filled versus blank circles carefully, read the handwritten digits, and answer with JSON only.";

#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn analyze_scorecard(&self, image_url: &str) -> Result<OcrHoleData, CoreError>;
}

/// Wiring handed to the scan handlers. `client` stays `None` when no API
/// key was configured, and the endpoints answer 503.
#[derive(Clone)]
pub struct VisionState {
    pub client: Option<Arc<dyn VisionClient>>,
}

/// OpenAI-compatible chat-completions client.
pub struct LlmVisionClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl LlmVisionClient {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl VisionClient for LlmVisionClient {
    async fn analyze_scorecard(&self, image_url: &str) -> Result<OcrHoleData, CoreError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SCORECARD_PROMPT },
                { "role": "user", "content": [
                    { "type": "text", "text": USER_PROMPT },
                    { "type": "image_url", "image_url": { "url": image_url, "detail": "high" } }
                ]}
            ],
            "response_format": { "type": "json_object" }
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| CoreError::Parse("empty completion from vision model".to_string()))?;

        serde_json::from_str(content).map_err(CoreError::from)
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct BatchScanResult {
    pub image_url: String,
    pub success: bool,
    pub ocr: Option<OcrHoleData>,
    pub error: Option<String>,
}

/// Scans every image concurrently. Order follows the input; a failed
/// image becomes an error entry instead of sinking the batch.
pub async fn scan_batch(client: &dyn VisionClient, image_urls: &[String]) -> Vec<BatchScanResult> {
    let futures = image_urls.iter().map(|url| async move {
        match client.analyze_scorecard(url).await {
            Ok(ocr) => BatchScanResult {
                image_url: url.clone(),
                success: true,
                ocr: Some(ocr),
                error: None,
            },
            Err(err) => {
                log::warn!("scorecard scan failed for {url}: {err}");
                BatchScanResult {
                    image_url: url.clone(),
                    success: false,
                    ocr: None,
                    error: Some(err.to_string()),
                }
            }
        }
    });

    join_all(futures).await
}
