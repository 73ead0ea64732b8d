use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteDetailDto,
        user::UserDto,
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// Static greeting used as a liveness check
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Greeting", body = MessageDto)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            msg: "Hello, this is your GET /user response".to_string(),
        }),
    )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).list_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List the current user's favorites with their planet or character embedded
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Favorites of the current user", body = Vec<FavoriteDetailDto>),
        (status = 404, description = "No users exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).get_favorites().await?;

    Ok((StatusCode::OK, Json(favorites)))
}
