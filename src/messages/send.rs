use axum::{Json, debug_handler, extract::State, http::HeaderMap, http::StatusCode};
use serde::Deserialize;

use crate::store::Store;
use crate::{ApiError, AppResult, clock, sanitize, validate};

#[derive(Deserialize)]
pub(crate) struct SendBody {
    to: Option<String>,
    text: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn send(
    State(store): State<Store>,
    headers: HeaderMap,
    Json(SendBody { to, text, kind }): Json<SendBody>,
) -> AppResult<StatusCode> {
    let to = to.as_deref().map(sanitize::strip_markup);
    let text = text.as_deref().map(sanitize::strip_markup);
    let kind = kind.as_deref().map(sanitize::strip_markup);

    let errors = validate::new_message(to.as_deref(), text.as_deref(), kind.as_deref());
    if !errors.is_empty() {
        return Err(ApiError::Invalid(errors));
    }

    let sender = super::live_sender(&store, &headers).await?;
    store
        .insert_message(
            &sender,
            &to.unwrap_or_default(),
            &text.unwrap_or_default(),
            &kind.unwrap_or_default(),
            &clock::wall_clock(),
        )
        .await?;
    Ok(StatusCode::CREATED)
}
