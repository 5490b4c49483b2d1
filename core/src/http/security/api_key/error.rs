//! API Key extraction error types.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::{Display, Error};

/// Errors that can occur while extracting an API key from a request.
///
/// Both kinds answer with `401 Unauthorized`. Match on the variant, not on
/// the message.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiKeyError {
    /// The Authorization header is missing or empty.
    #[display("no authorization header included")]
    NoAuthHeader,

    /// The Authorization header does not read as `<scheme> <key>`.
    #[display("malformed authorization header")]
    MalformedHeader,
}

impl ResponseError for ApiKeyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiKeyError::NoAuthHeader | ApiKeyError::MalformedHeader => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = status.canonical_reason().unwrap_or("Error");
        let message = self.to_string();
        let body = format!(r#"{{"error":"{}","message":"{}"}}"#, error, message);

        HttpResponse::build(status)
            .content_type("application/json")
            .body(body)
    }
}
