use axum::{Json, http::StatusCode, response::IntoResponse};
use roster_common::views::ApiErrorResponse;
use roster_db::storage::StoreError;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "Something went wrong on our end. Please try again later.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(se) => match se {
                StoreError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
                StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                StoreError::Conflict { .. } => StatusCode::CONFLICT,
                StoreError::MongoDB(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(err: ApiError) -> Self {
        let (code, message) = match &err {
            ApiError::Storage(se) => match se {
                StoreError::Unavailable => ("ServiceUnavailable", se.to_string()),
                StoreError::NotFound { .. } => ("NotFound", se.to_string()),
                StoreError::Conflict { .. } => ("Conflict", se.to_string()),
                StoreError::MongoDB(_) => ("InternalError", INTERNAL_MESSAGE.into()),
            },
        };

        ApiErrorResponse {
            code: Some(code.into()),
            message,

            #[cfg(debug_assertions)]
            details: Some(err.to_string()),

            #[cfg(not(debug_assertions))]
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("Error returned by handler: {self}");

        let status_code = self.status_code();
        (status_code, Json(Into::<ApiErrorResponse>::into(self))).into_response()
    }
}
