use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::analytics::{
    Period, analytics_summary, distance_band_breakdown, distance_stats, filter_rounds_by_period,
    green_speed_stats, mental_stats, slope_stats,
};
use crate::error::CoreError;
use crate::model::Round;
use crate::storage::{SqliteStorage, Storage};
use crate::view;

#[derive(Debug, Clone, Copy)]
pub struct AnalyticsRequest {
    pub period: Period,
    pub want_json: bool,
}

/// Parse query parameters into an analytics request.
///
/// # Errors
/// Returns an error when the period parameter is not week, month, year or
/// all.
pub fn parse_analytics_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<AnalyticsRequest, CoreError> {
    let period = match query.get("period").map(|s| s.trim()) {
        None | Some("") => Period::All,
        Some(raw) => {
            Period::parse(raw).ok_or_else(|| CoreError::Parse(format!("unknown period: {raw}")))?
        }
    };
    let want_json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };
    Ok(AnalyticsRequest { period, want_json })
}

/// Loads every stored round and narrows it to the requested window. The
/// clock is read here, at the HTTP boundary, never in the engine.
pub async fn rounds_for_period(
    storage: &dyn Storage,
    period: Period,
) -> Result<Vec<Round>, CoreError> {
    let rounds = storage.get_rounds().await?;
    Ok(filter_rounds_by_period(rounds, period, Utc::now()))
}

pub async fn analytics(
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    let request = match parse_analytics_request(&query) {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    let rounds = match rounds_for_period(storage.get_ref(), request.period).await {
        Ok(rounds) => rounds,
        Err(e) => {
            return HttpResponse::InternalServerError().json(json!({"error": e.to_string()}));
        }
    };

    let summary = analytics_summary(&rounds);
    if request.want_json {
        HttpResponse::Ok().json(json!({
            "period": request.period.as_str(),
            "summary": summary,
        }))
    } else {
        let markup = view::analytics::render_analytics_template(&summary, request.period);
        HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string())
    }
}

pub async fn analytics_distance(
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    let request = match parse_analytics_request(&query) {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match rounds_for_period(storage.get_ref(), request.period).await {
        Ok(rounds) => {
            let markup = view::analytics::render_distance_section(
                &distance_stats(&rounds),
                &distance_band_breakdown(&rounds),
            );
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn analytics_conditions(
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    let request = match parse_analytics_request(&query) {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match rounds_for_period(storage.get_ref(), request.period).await {
        Ok(rounds) => {
            let markup = view::analytics::render_conditions_section(
                &slope_stats(&rounds),
                &green_speed_stats(&rounds),
            );
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn analytics_mental(
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    let request = match parse_analytics_request(&query) {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match rounds_for_period(storage.get_ref(), request.period).await {
        Ok(rounds) => {
            let markup = view::analytics::render_mental_section(&mental_stats(&rounds));
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}
