use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

use crate::web::handlers;
use crate::web::models::ErrorResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api")
                .route("/debate", web::post().to(handlers::debate))
                .route("/topic-knowledge", web::post().to(handlers::topic_knowledge))
                .route("/prep-materials", web::post().to(handlers::prep_materials))
                .route("/generate-speech", web::post().to(handlers::generate_speech))
                .route("/judge-speech", web::post().to(handlers::judge_speech))
                .route("/final-rfd", web::post().to(handlers::final_rfd)),
        )
        .route("/health", web::get().to(handlers::health_check));
}

/// Any origin may call the API.
pub fn cors() -> Cors {
    Cors::permissive()
}

// Reject unreadable bodies with the same `{ error }` shape as handler failures
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::new(format!("Invalid request body: {}", err)));
        InternalError::from_response(err, response).into()
    })
}
