//! HTTP handlers for the user CRUD endpoints.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::constants::{
    MSG_USERS_LISTED, MSG_USER_CREATED, MSG_USER_DELETED, MSG_USER_FOUND, MSG_USER_UPDATED,
};
use crate::errors::ApiError;
use crate::extractors::RequestParams;
use crate::models::{ApiResponse, CreateUserRequest, DeleteUserRequest, UpdateUserRequest};
use crate::services::UserService;

/// List all users (email is not included)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [crate::models::UserSummary]),
        (status = 500, description = "Storage failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USERS_LISTED, users)))
}

/// Get a user by exact name
#[utoipa::path(
    get,
    path = "/api/users/{name}",
    tag = "Users",
    params(
        ("name" = String, Path, description = "Exact user name")
    ),
    responses(
        (status = 200, description = "User found", body = crate::models::UserSummary),
        (status = 400, description = "No user with that name", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user_by_name(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = path.into_inner();
    debug!("Fetching user by name");

    let user = user_service.get_user_by_name(&name).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_FOUND, user)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = crate::models::CreatedUser),
        (status = 400, description = "Missing field or insert failed", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: RequestParams<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create_user(body.into_inner()).await?;
    info!("Successfully created user: {}", user.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_USER_CREATED, user)))
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/api/users",
    tag = "Users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = crate::models::UpdatedUser),
        (status = 400, description = "Missing field or unknown id", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    body: RequestParams<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.update_user(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_UPDATED, user)))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/api/users",
    tag = "Users",
    request_body = DeleteUserRequest,
    responses(
        (status = 200, description = "User deleted", body = crate::models::DeletedUser),
        (status = 400, description = "Missing id or unknown id", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    body: RequestParams<DeleteUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.delete_user(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_DELETED, user)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use crate::routes::configure_routes;
    use crate::services::testing::{service_with, FixedClock};

    macro_rules! app {
        () => {{
            let service = service_with(Arc::new(FixedClock::new(1_000))).await;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(service))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_crud_round_trip_over_http() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Alice", "email": "alice@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "user-1");
        assert_eq!(body["data"]["created_at"], 1_000);

        let req = test::TestRequest::get().uri("/api/users/Alice").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "Alice");
        assert!(body["data"]["updated_at"].is_null());
        assert!(body["data"].get("email").is_none());

        let req = test::TestRequest::put()
            .uri("/api/users")
            .set_json(json!({ "id": "user-1", "name": "Alicia", "email": "alicia@example.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "Alicia");
        assert!(body["data"].get("created_at").is_none());

        let req = test::TestRequest::delete()
            .uri("/api/users")
            .set_json(json!({ "id": "user-1" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], json!({ "id": "user-1" }));

        let req = test::TestRequest::get().uri("/api/users/Alicia").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_list_empty_table() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn test_create_missing_email_names_field() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_ARGUMENT");
        assert_eq!(body["message"], "email is empty");
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_write_failure() {
        let app = app!();
        let req = test::TestRequest::delete()
            .uri("/api/users")
            .set_json(json!({ "id": "nobody" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "WRITE_FAILED");
        assert_eq!(body["message"], "Delete row failed");
    }

    #[actix_web::test]
    async fn test_delete_without_body_names_missing_id() {
        let app = app!();
        let req = test::TestRequest::delete().uri("/api/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "INVALID_ARGUMENT");
        assert_eq!(body["message"], "id is empty");
    }

    #[actix_web::test]
    async fn test_wrongly_typed_field_is_structured_error() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": 5, "email": "five@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "MALFORMED_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("invalid type"));
    }

    #[actix_web::test]
    async fn test_query_parameters_without_body() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/users?name=Query&email=query%40example.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::delete()
            .uri("/api/users?id=user-1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["id"], "user-1");
    }

    #[actix_web::test]
    async fn test_health_and_openapi() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "OK");

        let req = test::TestRequest::get().uri("/api/openapi.json").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["paths"].get("/api/users").is_some());
        assert!(body["paths"].get("/api/users/{name}").is_some());
    }
}
