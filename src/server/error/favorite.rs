use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::favorite::{FavoriteExistsDto, FavoriteTargetDto},
    server::model::{db::FavoriteModel, favorite::FavoriteTarget},
};

#[derive(Error, Debug)]
pub enum FavoriteError {
    /// Reported as 400 Bad Request, not 409 Conflict
    #[error("Favorite already exists")]
    AlreadyExists(FavoriteModel),
    #[error("Favorite not found for this user")]
    NotFound(FavoriteTarget),
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyExists(favorite) => {
                tracing::debug!(favorite_id = %favorite.id, "Favorite already exists");

                (
                    StatusCode::BAD_REQUEST,
                    Json(FavoriteExistsDto {
                        msg: "Favorite already exists".to_string(),
                        favorite: favorite.into(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(target) => {
                tracing::debug!("Favorite not found for {}", target);

                let (planet_id, character_id) = match target {
                    FavoriteTarget::Planet(id) => (Some(id), None),
                    FavoriteTarget::Character(id) => (None, Some(id)),
                };

                (
                    StatusCode::NOT_FOUND,
                    Json(FavoriteTargetDto {
                        msg: "Favorite not found for this user".to_string(),
                        planet_id,
                        character_id,
                    }),
                )
                    .into_response()
            }
        }
    }
}
