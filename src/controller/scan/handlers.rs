use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

use crate::controller::scan::client::{VisionClient, VisionState, scan_batch};
use crate::controller::scan::convert::{OcrHoleData, convert_ocr_batch, convert_ocr_hole};
use crate::model::DEFAULT_STRIDE_LENGTH;
use crate::storage::{SqliteStorage, Storage};

#[derive(Deserialize)]
pub struct ScanRequest {
    pub image_url: String,
}

#[derive(Deserialize)]
pub struct BatchScanRequest {
    pub image_urls: Vec<String>,
}

async fn stride_length(storage: &SqliteStorage) -> f64 {
    match storage.get_user_profile().await {
        Ok(Some(profile)) => profile.stride_length,
        Ok(None) => DEFAULT_STRIDE_LENGTH,
        Err(err) => {
            log::warn!("profile lookup failed, using default stride: {err}");
            DEFAULT_STRIDE_LENGTH
        }
    }
}

fn configured_client(state: &VisionState) -> Option<&dyn VisionClient> {
    state.client.as_deref()
}

fn unconfigured() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .json(json!({ "error": "scorecard scanning is not configured" }))
}

pub async fn scan_scorecard(
    body: web::Json<ScanRequest>,
    vision: web::Data<VisionState>,
    storage: web::Data<SqliteStorage>,
) -> HttpResponse {
    let client = match configured_client(&vision) {
        Some(client) => client,
        None => return unconfigured(),
    };

    match client.analyze_scorecard(&body.image_url).await {
        Ok(ocr) => {
            let stride = stride_length(&storage).await;
            let hole = convert_ocr_hole(&ocr, stride);
            HttpResponse::Ok().json(json!({ "ocr": ocr, "hole": hole }))
        }
        Err(err) => {
            log::warn!("scorecard scan failed for {}: {err}", body.image_url);
            HttpResponse::BadGateway().json(json!({ "error": err.to_string() }))
        }
    }
}

pub async fn scan_scorecard_batch(
    body: web::Json<BatchScanRequest>,
    vision: web::Data<VisionState>,
    storage: web::Data<SqliteStorage>,
) -> HttpResponse {
    let client = match configured_client(&vision) {
        Some(client) => client,
        None => return unconfigured(),
    };

    let results = scan_batch(client, &body.image_urls).await;
    let stride = stride_length(&storage).await;
    let ocr_holes: Vec<OcrHoleData> = results.iter().filter_map(|r| r.ocr.clone()).collect();
    let holes = convert_ocr_batch(&ocr_holes, stride);

    HttpResponse::Ok().json(json!({ "results": results, "holes": holes }))
}
