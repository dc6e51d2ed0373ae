//! Axum integration
//!
//! Presentations can be returned from handlers as-is. Errors map onto
//! `{ "error", "code" }` JSON bodies.

use crate::core::PresentError;
use crate::dispatch::Presentation;
use crate::pagination::PaginationEnvelope;
use crate::presenter::{Presented, PresentedCollection, Presenter};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl PresentError {
    /// HTTP status and stable machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            PresentError::InvalidPresenter(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "invalid_presenter")
            }
            PresentError::InvalidArgument(_) => (StatusCode::UNPROCESSABLE_ENTITY, "input_error"),
            PresentError::UndefinedKey(_) => (StatusCode::INTERNAL_SERVER_ERROR, "undefined_key"),
            PresentError::UndefinedMethod { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "undefined_method")
            }
            PresentError::Serialization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "serialization_error")
            }
        }
    }
}

impl IntoResponse for PresentError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl<P: Presenter> IntoResponse for Presented<P> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl<P: Presenter> IntoResponse for PresentedCollection<P> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl<P: Presenter> IntoResponse for PaginationEnvelope<P> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl<P: Presenter> IntoResponse for Presentation<P> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_unprocessable_entity() {
        let (status, code) = PresentError::InvalidArgument("bad".into()).status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "input_error");
    }

    #[test]
    fn error_response_carries_status() {
        let response = PresentError::InvalidPresenter("summary".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
