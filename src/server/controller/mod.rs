//! HTTP controller endpoints for the Holonet web API.
//!
//! Controllers extract path parameters, call into services, and return the status code
//! and JSON body each endpoint documents. Every handler is annotated for utoipa so it
//! appears in the OpenAPI document, the Swagger UI and the sitemap.

pub mod catalog;
pub mod favorite;
pub mod sitemap;
pub mod user;
pub mod util;
