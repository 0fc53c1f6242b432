use actix_web::web::{self, Data, Path};
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::model::{GolfCourse, Putter, UserProfile};
use crate::storage::{SqliteStorage, Storage};

pub async fn get_profile(storage: Data<SqliteStorage>) -> impl Responder {
    match storage.get_user_profile().await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::Ok().json(UserProfile::default_profile()),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn save_profile(
    body: web::Json<UserProfile>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    match storage.save_user_profile(body.into_inner()).await {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn putters(storage: Data<SqliteStorage>) -> impl Responder {
    match storage.get_putters().await {
        Ok(putters) => HttpResponse::Ok().json(putters),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn create_putter(
    body: web::Json<Putter>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    match storage.save_putter(body.into_inner()).await {
        Ok(saved) => HttpResponse::Created().json(saved),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn update_putter(
    path: Path<String>,
    body: web::Json<Putter>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    let id = path.into_inner();
    match storage.update_putter(&id, body.into_inner()).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(updated),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": format!("no putter {id}")})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn delete_putter(path: Path<String>, storage: Data<SqliteStorage>) -> impl Responder {
    let id = path.into_inner();
    match storage.delete_putter(&id).await {
        Ok(true) => HttpResponse::Ok().json(json!({"deleted": true})),
        Ok(false) => HttpResponse::NotFound().json(json!({"error": format!("no putter {id}")})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn courses(storage: Data<SqliteStorage>) -> impl Responder {
    match storage.get_courses().await {
        Ok(courses) => HttpResponse::Ok().json(courses),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn create_course(
    body: web::Json<GolfCourse>,
    storage: Data<SqliteStorage>,
) -> impl Responder {
    match storage.save_course(body.into_inner()).await {
        Ok(saved) => HttpResponse::Created().json(saved),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

pub async fn delete_course(path: Path<String>, storage: Data<SqliteStorage>) -> impl Responder {
    let id = path.into_inner();
    match storage.delete_course(&id).await {
        Ok(true) => HttpResponse::Ok().json(json!({"deleted": true})),
        Ok(false) => HttpResponse::NotFound().json(json!({"error": format!("no course {id}")})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}
