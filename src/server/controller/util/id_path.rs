use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::server::error::{api::ApiError, Error};

/// Extracts the integer `{id}` segment of a route.
///
/// Unlike a bare `Path<i32>`, a segment that is not an integer is rejected with the
/// application's `{ "message": ... }` error body.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                Err(ApiError::new(rejection.body_text(), rejection.status()).into())
            }
        }
    }
}
