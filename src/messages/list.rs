use axum::{
    Json, debug_handler,
    extract::{Query, State},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::model::Message;
use crate::store::Store;
use crate::{ApiError, AppResult, user_header, validate};

#[derive(Deserialize)]
pub(crate) struct ListQuery {
    limit: Option<String>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn list(
    State(store): State<Store>,
    headers: HeaderMap,
    Query(ListQuery { limit }): Query<ListQuery>,
) -> AppResult<Json<Vec<Message>>> {
    let limit = validate::limit(limit.as_deref()).map_err(ApiError::Invalid)?;
    let Some(viewer) = user_header(&headers) else {
        return Err(ApiError::Invalid(vec![
            "\"user\" header is required".to_string(),
        ]));
    };
    Ok(Json(store.visible_to(&viewer, limit).await?))
}
