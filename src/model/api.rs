use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// A plain message response
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

/// The response when a requested record does not exist
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotFoundDto {
    pub msg: String,
    /// ID that was requested
    pub id: i32,
}
