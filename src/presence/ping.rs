use axum::{debug_handler, extract::State, http::HeaderMap, http::StatusCode};

use crate::store::Store;
use crate::{ApiError, AppResult, clock, user_header};

/// Liveness ping. A name we never registered and a request with no `user`
/// header look the same to the caller: there is nobody to refresh.
#[debug_handler(state = crate::AppState)]
pub(crate) async fn ping(State(store): State<Store>, headers: HeaderMap) -> AppResult<StatusCode> {
    let Some(name) = user_header(&headers) else {
        return Err(ApiError::NotFound);
    };
    if !store.touch_participant(&name, clock::now_millis()).await? {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::OK)
}
