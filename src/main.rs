use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use std::path::Path;
use std::sync::Arc;

use putting_analyzer::args;
use putting_analyzer::controller::scan::{LlmVisionClient, VisionState};
use putting_analyzer::controller::{analytics, prefill, profile, rounds, scan};
use putting_analyzer::storage::SqliteStorage;
use putting_analyzer::view;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = args::args_checks();
    let args_for_web = args.clone();

    let storage = match SqliteStorage::new(Path::new(&args.db_name)) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Some(seed) = &args.db_populate_json {
        prefill::db_prefill(seed, &storage).await?;
    }

    let vision = match (&args.llm_base_url, &args.llm_api_key) {
        (Some(base_url), Some(api_key)) => VisionState {
            client: Some(Arc::new(LlmVisionClient::new(
                base_url.clone(),
                args.llm_model.clone(),
                api_key.clone(),
            ))),
        },
        _ => VisionState { client: None },
    };

    let bind = args.bind.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(storage.clone()))
            .app_data(Data::new(args_for_web.clone()))
            .app_data(Data::new(vision.clone()))
            .route("/", web::get().to(index))
            .route("/analytics", web::get().to(analytics::analytics))
            .route(
                "/analytics/distance",
                web::get().to(analytics::analytics_distance),
            )
            .route(
                "/analytics/conditions",
                web::get().to(analytics::analytics_conditions),
            )
            .route(
                "/analytics/mental",
                web::get().to(analytics::analytics_mental),
            )
            .route("/rounds", web::get().to(rounds::rounds))
            .route("/rounds/{id}", web::get().to(rounds::round_detail))
            .route("/api/rounds", web::post().to(rounds::create_round))
            .route("/api/rounds/{id}", web::put().to(rounds::update_round))
            .route("/api/rounds/{id}", web::delete().to(rounds::delete_round))
            .route("/api/profile", web::get().to(profile::get_profile))
            .route("/api/profile", web::post().to(profile::save_profile))
            .route("/api/putters", web::get().to(profile::putters))
            .route("/api/putters", web::post().to(profile::create_putter))
            .route("/api/putters/{id}", web::put().to(profile::update_putter))
            .route("/api/putters/{id}", web::delete().to(profile::delete_putter))
            .route("/api/courses", web::get().to(profile::courses))
            .route("/api/courses", web::post().to(profile::create_course))
            .route("/api/courses/{id}", web::delete().to(profile::delete_course))
            .route("/scan", web::post().to(scan::scan_scorecard))
            .route("/scan/batch", web::post().to(scan::scan_scorecard_batch))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await?;
    Ok(())
}

async fn index(args: Data<args::CleanArgs>) -> impl Responder {
    let markup = view::index::render_index_template(&args.title);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
