//! Stable error codes shared by every error type that reaches a client.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use client::net::types::ApiErrorBody;

/// Machine-readable classification for an error surfaced over HTTP.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Serialise any [`ErrorCode`] into the JSON body returned by API routes.
pub fn error_body(err: &(impl ErrorCode + ?Sized)) -> ApiErrorBody {
    ApiErrorBody { code: err.error_code().to_owned(), message: err.to_string(), retryable: err.retryable() }
}
