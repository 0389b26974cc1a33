pub mod categories;
pub mod extract;
pub mod questions;
pub mod quizzes;

use crate::AppState;
use crate::error::ApiError;
use axum::Router;
use http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

const ALLOWED_HEADERS: &str = "Content-Type,Authorization,true";
const ALLOWED_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS";

// the api router, where features are composed
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(categories::categories_router())
        .merge(questions::questions_router())
        .merge(quizzes::quizzes_router())
        .fallback(fallback_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(cors_layer())
        // outermost, so preflight responses get the same headers as everything else
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// tower-http refuses credentials together with a wildcard origin, so the credentials header is
// set separately above
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("true"),
        ])
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed
}
