use actix_web::web::{self, Data, Path};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use crate::controller::analytics::{parse_analytics_request, rounds_for_period};
use crate::model::Round;
use crate::storage::{SqliteStorage, Storage};
use crate::view;

pub async fn rounds(
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    let request = match parse_analytics_request(&query) {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match rounds_for_period(storage.get_ref(), request.period).await {
        Ok(rounds) => {
            if request.want_json {
                HttpResponse::Ok().json(rounds)
            } else {
                let markup = view::rounds::render_round_list(&rounds, request.period);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn round_detail(
    path: Path<String>,
    query: web::Query<HashMap<String, String>>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    let id = path.into_inner();
    let want_json = matches!(query.get("json").map(String::as_str), Some("1" | "true"));

    match storage.get_round(&id).await {
        Ok(Some(round)) => {
            if want_json {
                HttpResponse::Ok().json(round)
            } else {
                let markup = view::rounds::render_round_detail(&round);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Ok(None) => HttpResponse::NotFound().json(json!({"error": format!("no round {id}")})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn create_round(body: web::Json<Round>, storage: Data<SqliteStorage>) -> impl Responder {
    match storage.save_round(body.into_inner()).await {
        Ok(saved) => HttpResponse::Created().json(saved),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn update_round(
    path: Path<String>,
    body: web::Json<Round>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    let id = path.into_inner();
    match storage.update_round(&id, body.into_inner()).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": format!("no round {id}")})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn delete_round(path: Path<String>, storage: Data<SqliteStorage>) -> impl Responder {
    let id = path.into_inner();
    match storage.delete_round(&id).await {
        Ok(true) => HttpResponse::Ok().json(json!({"deleted": true})),
        Ok(false) => HttpResponse::NotFound().json(json!({"error": format!("no round {id}")})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}
