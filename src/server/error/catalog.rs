use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::NotFoundDto;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Planet not found")]
    PlanetNotFound(i32),
    #[error("Character not found")]
    CharacterNotFound(i32),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let id = match self {
            Self::PlanetNotFound(id) | Self::CharacterNotFound(id) => id,
        };

        tracing::debug!(id = %id, "{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(NotFoundDto {
                msg: self.to_string(),
                id,
            }),
        )
            .into_response()
    }
}
