use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // Generated API description
            .route("/openapi.json", web::get().to(openapi_json))
            .service(
                web::scope("/users")
                    .route("", web::get().to(handlers::list_users))
                    .route("", web::post().to(handlers::create_user))
                    .route("", web::put().to(handlers::update_user))
                    .route("", web::delete().to(handlers::delete_user))
                    .route("/{name}", web::get().to(handlers::get_user_by_name)),
            ),
    );
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
