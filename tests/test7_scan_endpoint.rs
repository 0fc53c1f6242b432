use actix_web::{App, test, web};
use async_trait::async_trait;
use putting_analyzer::controller::scan::{
    OcrHoleData, OcrPuttData, VisionClient, VisionState, scan_scorecard, scan_scorecard_batch,
};
use putting_analyzer::error::CoreError;
use putting_analyzer::model::UserProfile;
use putting_analyzer::storage::{SqliteStorage, Storage};
use serde_json::Value;
use std::sync::Arc;

fn stub_card(hole: Option<u32>) -> OcrHoleData {
    OcrHoleData {
        hole,
        date: Some("04/12".to_string()),
        course: Some("Riverside GC".to_string()),
        putts: vec![OcrPuttData {
            putt_number: 1,
            cup_in: true,
            dist_prev: None,
            result: Some("P".to_string()),
            length_steps: Some(10.0),
            length_yards: None,
            missed_direction: None,
            touch: None,
            line_ud: Some("F".to_string()),
            line_lr: Some("St".to_string()),
            mental: None,
        }],
    }
}

struct StubVision;

#[async_trait]
impl VisionClient for StubVision {
    async fn analyze_scorecard(&self, image_url: &str) -> Result<OcrHoleData, CoreError> {
        if image_url.contains("broken") {
            return Err(CoreError::Network("image fetch failed".to_string()));
        }
        // Encode the hole number in the URL so batch order is checkable.
        let hole = image_url
            .rsplit('/')
            .next()
            .and_then(|name| name.trim_end_matches(".jpg").parse().ok());
        Ok(stub_card(hole))
    }
}

#[test]
async fn test7_scan_uses_profile_stride() -> Result<(), Box<dyn std::error::Error>> {
    let storage = SqliteStorage::in_memory()?;
    let profile = UserProfile {
        stride_length: 0.8,
        ..UserProfile::default_profile()
    };
    storage.save_user_profile(profile).await?;

    let vision = VisionState {
        client: Some(Arc::new(StubVision)),
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(vision))
            .route("/scan", web::post().to(scan_scorecard)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/scan")
        .set_json(serde_json::json!({ "image_url": "https://example.com/7.jpg" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ocr"]["hole"], 7);
    assert_eq!(body["hole"]["hole_number"], 7);
    // 10 steps at the saved 0.8 m stride.
    assert_eq!(body["hole"]["putts"][0]["distance_meters"], 8.0);

    Ok(())
}

#[test]
async fn test7_batch_keeps_order_and_reports_failures() -> Result<(), Box<dyn std::error::Error>>
{
    let storage = SqliteStorage::in_memory()?;
    let vision = VisionState {
        client: Some(Arc::new(StubVision)),
    };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(vision))
            .route("/scan/batch", web::post().to(scan_scorecard_batch)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/scan/batch")
        .set_json(serde_json::json!({ "image_urls": [
            "https://example.com/3.jpg",
            "https://example.com/broken.jpg",
            "https://example.com/1.jpg",
        ]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3, "one result per submitted image");
    assert_eq!(results[0]["success"], true);
    assert_eq!(results[1]["success"], false);
    assert!(results[1]["error"].is_string());
    assert_eq!(results[2]["success"], true);

    // Converted holes come back sorted by hole number.
    let holes = body["holes"].as_array().unwrap();
    assert_eq!(holes.len(), 2);
    assert_eq!(holes[0]["hole_number"], 1);
    assert_eq!(holes[1]["hole_number"], 3);

    Ok(())
}

#[test]
async fn test7_scan_without_client_is_unavailable() -> Result<(), Box<dyn std::error::Error>> {
    let storage = SqliteStorage::in_memory()?;
    let vision = VisionState { client: None };

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(vision))
            .route("/scan", web::post().to(scan_scorecard)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/scan")
        .set_json(serde_json::json!({ "image_url": "https://example.com/1.jpg" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::SERVICE_UNAVAILABLE
    );

    Ok(())
}
