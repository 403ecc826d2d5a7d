use crate::routes::error::{ErrorBody, ErrorDataProvider, GetStatusCode, SERVER_ERROR, error_to_axum_response};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use practica_core::identity::IdentityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum UserError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl GetStatusCode for UserError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Identity(IdentityError::NameRequired) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Identity(IdentityError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorDataProvider for UserError {
    fn error_data(&self) -> ErrorBody {
        match self {
            Self::Identity(IdentityError::Database(_)) => ErrorBody::new(SERVER_ERROR),
            Self::InvalidBody(rejection) => ErrorBody::new(rejection.body_text()),
            Self::Identity(error) => ErrorBody::new(error.to_string()),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
