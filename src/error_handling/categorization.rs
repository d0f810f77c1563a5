//! Error categorization.
//!
//! This module maps fetch failures onto `ErrorType` categories.

use reqwest::StatusCode;

use super::types::{ErrorType, FetchError};

/// Categorizes an HTTP status code into an `ErrorType`.
pub fn categorize_status(status: StatusCode) -> ErrorType {
    match status.as_u16() {
        400 => ErrorType::HttpRequestBadRequest,
        404 => ErrorType::HttpRequestNotFound,
        429 => ErrorType::HttpRequestTooManyRequests,
        500 => ErrorType::HttpRequestInternalServerError,
        502 => ErrorType::HttpRequestBadGateway,
        503 => ErrorType::HttpRequestServiceUnavailable,
        504 => ErrorType::HttpRequestGatewayTimeout,
        _ => ErrorType::HttpRequestOtherError,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status codes are checked first, then the transport-level error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status);
    }

    if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_decode() {
        ErrorType::ResponseDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a `FetchError` into an `ErrorType`.
pub fn categorize_fetch_error(error: &FetchError) -> ErrorType {
    match error {
        FetchError::InvalidUrl(_) => ErrorType::InvalidUrlError,
        FetchError::Request { source, .. } => categorize_reqwest_error(source),
        FetchError::Status { status, .. } => categorize_status(*status),
        FetchError::Decode { .. } => ErrorType::ResponseDecodeError,
    }
}

impl FetchError {
    /// Category this error is counted under.
    pub fn kind(&self) -> ErrorType {
        categorize_fetch_error(self)
    }
}
