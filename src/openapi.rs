use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, CreatedUser, DeleteUserRequest, DeletedUser, ErrorResponse,
    HealthResponse, UpdateUserRequest, UpdatedUser, UserSummary,
};

/// OpenAPI documentation for the user directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory API",
        version = "0.1.0",
        description = "List, fetch, create, update and delete users stored in a single relational table.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::handlers::list_users,
        crate::handlers::get_user_by_name,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            DeleteUserRequest,
            UserSummary,
            CreatedUser,
            UpdatedUser,
            DeletedUser,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
