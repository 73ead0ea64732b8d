use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum UserError {
    /// The user table is empty so there is no current user to act as
    #[error("No users found. Create a user via Flask Admin first.")]
    NoCurrentUser,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(MessageDto {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}
