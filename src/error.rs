use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use tracing::error;

/// Every failure a handler can answer with.
///
/// The response body is always `{"detail": <Display text>}`.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display(fmt = "Email already registered")]
    EmailTaken,

    #[display(fmt = "Employee not found")]
    EmployeeNotFound,

    #[display(fmt = "{}", _0)]
    Validation(String),

    // storage failures never leak their cause to the client
    #[display(fmt = "Internal Server Error")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmailTaken => StatusCode::BAD_REQUEST,
            ApiError::EmployeeNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(e) = self {
            error!(error = %e, "Database operation failed");
        }

        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: ApiError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn conflict_and_not_found_bodies() {
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(ApiError::EmailTaken).await,
            json!({"detail": "Email already registered"})
        );

        assert_eq!(ApiError::EmployeeNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(ApiError::EmployeeNotFound).await,
            json!({"detail": "Employee not found"})
        );
    }

    #[actix_web::test]
    async fn database_errors_are_opaque() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(err).await, json!({"detail": "Internal Server Error"}));
    }

    #[test]
    fn validation_carries_reason() {
        let err = ApiError::Validation("email must look like name@domain".into());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "email must look like name@domain");
    }
}
