//! Posting, listing, editing and deleting messages.

mod list;
mod modify;
mod send;

use axum::http::HeaderMap;
use axum::{Router, routing::post, routing::put};

use crate::store::Store;
use crate::{ApiError, AppState, user_header};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", post(send::send).get(list::list))
        .route("/messages/{id}", put(modify::edit).delete(modify::remove))
}

/// Mutating message calls only make sense from someone who is currently in
/// the room; a missing header and an evicted sender fail the same way.
pub(crate) async fn live_sender(store: &Store, headers: &HeaderMap) -> Result<String, ApiError> {
    let Some(name) = user_header(headers) else {
        return Err(ApiError::Invalid(vec![
            "\"user\" header must name a participant in the room".to_string(),
        ]));
    };
    if store.participant(&name).await?.is_none() {
        return Err(ApiError::Invalid(vec![format!(
            "\"{name}\" is not in the room"
        )]));
    }
    Ok(name)
}
