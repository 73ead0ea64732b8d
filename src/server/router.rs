//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. Swagger UI
//! is served at `/api/docs` and the root path lists every route as a sitemap.
//!
//! A trailing slash on an API path is ignored. The Swagger UI routes are matched first and
//! exactly, since the UI redirects `/api/docs` to `/api/docs/`.

use axum::{response::Html, routing::get, Router};
use tower_http::normalize_path::NormalizePath;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

pub static DOCS_PATH: &str = "/api/docs";
pub static OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of the endpoints below
/// - `GET /user` - Static greeting
/// - `GET /people`, `GET /people/{id}` - Characters
/// - `GET /planets`, `GET /planets/{id}` - Planets
/// - `GET /users` - Users
/// - `GET /users/favorites` - Favorites of the current user
/// - `POST|DELETE /favorite/planet/{id}` - Add or remove a favorite planet
/// - `POST|DELETE /favorite/people/{id}` - Add or remove a favorite character
///
/// `/people/` and `/people` reach the same handler, the slash is trimmed before routing.
///
/// # Returns
/// A `Router` with the state applied, ready for middleware layers.
pub fn routes(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet Star Wars catalog API"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Characters and planets"),
        (name = controller::user::USER_TAG, description = "Users and their favorites"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite planets and characters"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::hello))
        .routes(routes!(controller::catalog::list_people))
        .routes(routes!(controller::catalog::get_person))
        .routes(routes!(controller::catalog::list_planets))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(controller::user::list_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::delete_favorite_person
        ))
        .split_for_parts();

    let sitemap = controller::sitemap::render_sitemap(&api, DOCS_PATH);

    let api_routes = routes
        .route("/", get(move || async move { Html(sitemap) }))
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, api))
        .fallback_service(NormalizePath::trim_trailing_slash(api_routes))
}
