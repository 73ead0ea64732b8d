//! Error types for the Holonet server application.
//!
//! Domain errors (catalog lookups, current user resolution, favorites) each implement
//! `IntoResponse` with the exact status code and body their endpoints promise. Everything
//! else is logged and reported as a generic 500 Internal Server Error.

pub mod api;
pub mod catalog;
pub mod config;
pub mod favorite;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        api::ApiError, catalog::CatalogError, config::ConfigError, favorite::FavoriteError,
        user::UserError,
    },
};

/// Main error type for the Holonet server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type so handlers and services can use `?` throughout.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Requested planet or character does not exist.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Current user could not be resolved.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Favorite already exists or could not be found.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Structured error carrying its own message and status code.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Duplicate favorite, malformed path parameters
/// - 404 Not Found - Missing planet, character, favorite or current user
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::ApiError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
