use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use finscore_core::errors::{DatabaseError, Error as CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    NotFound(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Core(ValidationError::InvalidInput(rejection.body_text()).into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use finscore_sheets::SheetsError;

    #[test]
    fn test_status_mapping() {
        let unavailable = ApiError::from(CoreError::from(SheetsError::Timeout {
            sheet: "Zscore".to_string(),
        }));
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

        let commit = ApiError::from(CoreError::Database(DatabaseError::TransactionFailed(
            "locked".to_string(),
        )));
        assert_eq!(commit.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let missing = ApiError::NotFound("nope".to_string());
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let invalid = ApiError::from(CoreError::from(ValidationError::InvalidInput(
            "refresh".to_string(),
        )));
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    }
}
