use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub type AppResult<T> = Result<T, ApiError>;

/// Everything a handler can fail with, mapped onto the wire in one place.
#[derive(Debug)]
pub enum ApiError {
    /// Field-level validation failures, all of them at once.
    Invalid(Vec<String>),
    Conflict,
    Unauthorized,
    NotFound,
    Store(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Invalid(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            ApiError::Conflict => StatusCode::CONFLICT.into_response(),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Store(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

macro_rules! store_err_impl {
    ($E:ty) => {
        impl From<$E> for ApiError {
            fn from(err: $E) -> Self {
                Self::Store(anyhow::Error::from(err))
            }
        }
    };
}

store_err_impl!(sqlx::Error);
store_err_impl!(anyhow::Error);
