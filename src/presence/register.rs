use axum::{Json, debug_handler, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::model::{JOIN_TEXT, Participant};
use crate::store::Store;
use crate::{ApiError, AppResult, clock, sanitize, validate};

#[derive(Deserialize)]
pub(crate) struct RegisterBody {
    name: Option<String>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn register(
    State(store): State<Store>,
    Json(RegisterBody { name }): Json<RegisterBody>,
) -> AppResult<StatusCode> {
    let name = name.as_deref().map(sanitize::strip_markup);

    let errors = validate::registration(name.as_deref());
    if !errors.is_empty() {
        return Err(ApiError::Invalid(errors));
    }
    let name = name.unwrap_or_default();

    if !store.insert_participant(&name, clock::now_millis()).await? {
        return Err(ApiError::Conflict);
    }

    super::announce(&store, &name, JOIN_TEXT).await;
    Ok(StatusCode::CREATED)
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn list(State(store): State<Store>) -> AppResult<Json<Vec<Participant>>> {
    Ok(Json(store.participants().await?))
}
