use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use utoipa::ToSchema;

pub(crate) const SERVER_ERROR: &str = "Server error";

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> http::StatusCode;
}

/// Body of every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: Cow<'static, str>,
}

impl ErrorBody {
    pub fn new<A: Into<Cow<'static, str>>>(error: A) -> Self {
        Self { error: error.into() }
    }
}

pub(crate) trait ErrorDataProvider {
    /// What the caller gets to see.
    fn error_data(&self) -> ErrorBody;
}

/// Server side failures are logged with their cause before the body is sent.
pub(crate) fn error_to_axum_response<T>(error: T) -> Response
where
    T: GetStatusCode + ErrorDataProvider + Error + 'static,
{
    let status_code = error.status_code();
    if status_code.is_server_error() {
        tracing::error!(error = &error as &dyn Error, "request failed");
    } else {
        tracing::debug!(error = %error, %status_code, "request rejected");
    }
    (status_code, Json(error.error_data())).into_response()
}
