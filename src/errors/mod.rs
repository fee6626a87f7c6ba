//! Backend API errors. Each kind has a fixed HTTP status, and every error is
//! turned into a wire response by the single [`IntoResponse`] impl below, so
//! handlers just return `Result<_, ApiError>`.

use crate::verification::MessageBody;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    /// Authenticated caller is not allowed to perform the operation.
    Unauthorized,
    NotFound,
    Internal,
}

impl ApiErrorKind {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::BadRequest, message)
    }

    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, message)
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Internal, message)
    }

    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.kind.status().as_u16()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status();
        if self.kind == ApiErrorKind::Internal {
            error!("Failed to handle request: {}", self.message);
        } else {
            debug!(status = status.as_u16(), "request rejected: {}", self.message);
        }

        let message = if self.message.trim().is_empty() {
            status.canonical_reason().unwrap_or("Error").to_string()
        } else {
            self.message
        };

        (status, Json(MessageBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn translate(err: ApiError) -> Result<(StatusCode, MessageBody)> {
        let app = Router::new().route(
            "/",
            get(move || {
                let err = err.clone();
                async move { Err::<(), ApiError>(err) }
            }),
        );
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty())?)
            .await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    #[test]
    fn unauthorized_is_forbidden() {
        let err = ApiError::unauthorized("Access denied");
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.message(), "Access denied");
        assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
        assert_eq!(err.to_string(), "Access denied");
    }

    #[test]
    fn status_is_fixed_per_kind_regardless_of_message() {
        for message in ["", "Access denied", "Not Found"] {
            assert_eq!(ApiError::unauthorized(message).status_code(), 403);
            assert_eq!(ApiError::bad_request(message).status_code(), 400);
            assert_eq!(ApiError::not_found(message).status_code(), 404);
            assert_eq!(ApiError::internal(message).status_code(), 500);
        }
    }

    #[tokio::test]
    async fn translation_writes_status_and_message_body() -> Result<()> {
        let cases = [
            (ApiError::unauthorized("Access denied"), StatusCode::FORBIDDEN),
            (ApiError::bad_request("Invalid code"), StatusCode::BAD_REQUEST),
            (ApiError::not_found("No such user"), StatusCode::NOT_FOUND),
            (
                ApiError::internal("database unavailable"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let message = err.message().to_string();
            let (status, body) = translate(err).await?;
            assert_eq!(status, expected);
            assert_eq!(body, MessageBody::new(message));
        }
        Ok(())
    }

    #[tokio::test]
    async fn translation_falls_back_to_reason_phrase() -> Result<()> {
        let (status, body) = translate(ApiError::unauthorized("  ")).await?;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.message, "Forbidden");
        Ok(())
    }
}
