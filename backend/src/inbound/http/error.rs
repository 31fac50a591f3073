//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code, ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        redacted.trace_id = error.trace_id.clone();
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_web::body::to_bytes;
    use serde_json::json;

    use super::*;

    async fn response_payload(error: Error) -> (StatusCode, Error) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        let payload = serde_json::from_slice(&bytes).expect("error payload deserialises");
        (status, payload)
    }

    #[test]
    fn status_codes_match_error_codes() {
        let cases = [
            (Error::invalid_request("bad"), StatusCode::BAD_REQUEST),
            (Error::not_found("missing"), StatusCode::NOT_FOUND),
            (
                Error::service_unavailable("down"),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let error = Error::internal("secret backend detail")
            .with_trace_id("abc")
            .with_details(json!({ "secret": "x" }));

        let (status, payload) = response_payload(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(payload.message, "Internal server error");
        assert!(payload.details.is_none());
        assert_eq!(payload.trace_id.as_deref(), Some("abc"));
    }

    #[actix_web::test]
    async fn validation_errors_expose_details() {
        let error = Error::invalid_request("bad").with_details(json!({ "field": "title" }));

        let (status, payload) = response_payload(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload.message, "bad");
        assert_eq!(payload.details, Some(json!({ "field": "title" })));
    }

    #[actix_web::test]
    async fn trace_id_is_echoed_as_header() {
        let error = Error::not_found("missing").with_trace_id("abc");
        let response = error.error_response();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header present")
            .to_str()
            .expect("header is ascii");
        assert_eq!(header, "abc");
    }
}
