use axum::{
    Json, debug_handler,
    extract::{Path, State},
    http::HeaderMap,
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::model::Message;
use crate::store::Store;
use crate::{ApiError, AppResult, clock, sanitize, user_header, validate};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn remove(
    State(store): State<Store>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let requester = user_header(&headers).unwrap_or_default();
    let message = owned_message(&store, &id, &requester).await?;
    store.delete_message(&message.id).await?;
    Ok(StatusCode::OK)
}

#[derive(Deserialize)]
pub(crate) struct EditBody {
    to: Option<String>,
    text: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn edit(
    State(store): State<Store>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(EditBody { to, text, kind }): Json<EditBody>,
) -> AppResult<StatusCode> {
    let to = to.as_deref().map(sanitize::strip_markup);
    let text = text.as_deref().map(sanitize::strip_markup);
    let kind = kind.as_deref().map(sanitize::strip_markup);

    let errors = validate::message_patch(to.as_deref(), text.as_deref(), kind.as_deref());
    if !errors.is_empty() {
        return Err(ApiError::Invalid(errors));
    }

    let editor = super::live_sender(&store, &headers).await?;
    let message = owned_message(&store, &id, &editor).await?;

    // `from` is re-asserted to the editor; `time` moves to the edit.
    store
        .update_message(
            &message.id,
            &editor,
            to.as_deref().unwrap_or(&message.recipient),
            text.as_deref().unwrap_or(&message.text),
            kind.as_deref().unwrap_or(&message.kind),
            &clock::wall_clock(),
        )
        .await?;
    Ok(StatusCode::OK)
}

/// Ids come from the URL; anything that does not parse as one of ours is
/// simply unknown. Ownership is the sender name, nothing more.
async fn owned_message(store: &Store, id: &str, requester: &str) -> Result<Message, ApiError> {
    let Ok(id) = Uuid::parse_str(id) else {
        return Err(ApiError::NotFound);
    };
    let Some(message) = store.message(&id.to_string()).await? else {
        return Err(ApiError::NotFound);
    };
    if message.sender != requester {
        return Err(ApiError::Unauthorized);
    }
    Ok(message)
}
