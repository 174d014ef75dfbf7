pub mod clock;
pub mod error;
pub mod messages;
pub mod model;
pub mod presence;
pub mod sanitize;
pub mod store;
pub mod validate;

use axum::{Router, extract::FromRef, http::HeaderMap};
use tower_http::cors::CorsLayer;

pub use error::{ApiError, AppResult};
use store::Store;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Store,
}

/// The whole route table, split out of `main` so tests can drive the
/// router in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(presence::router())
        .merge(messages::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Client identity is whatever the `user` header says, stripped of markup
/// like every other caller-supplied string so it compares equal to stored
/// names. Blank and unreadable values count as absent.
pub fn user_header(headers: &HeaderMap) -> Option<String> {
    let name = sanitize::strip_markup(headers.get("user")?.to_str().ok()?);
    (!name.is_empty()).then_some(name)
}
