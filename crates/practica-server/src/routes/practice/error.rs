use crate::routes::error::{ErrorBody, ErrorDataProvider, GetStatusCode, SERVER_ERROR, error_to_axum_response};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use practica_core::practice::error::PracticeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum PracticeRouteError {
    #[error(transparent)]
    Practice(#[from] PracticeError),

    #[error("userId and courseId required")]
    MissingIds,

    #[error("userId required")]
    MissingUserId,

    #[error("Invalid userId")]
    InvalidUserId,

    #[error("answer required")]
    MissingAnswer,

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl GetStatusCode for PracticeRouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Practice(
                PracticeError::UserNotFound
                | PracticeError::CourseNotFound
                | PracticeError::NoVersions
                | PracticeError::SessionNotFound,
            ) => StatusCode::NOT_FOUND,
            Self::Practice(
                PracticeError::Validation(_) | PracticeError::SessionCompleted | PracticeError::NoQuestionLeft,
            )
            | Self::MissingIds
            | Self::MissingUserId
            | Self::InvalidUserId
            | Self::MissingAnswer
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Practice(PracticeError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorDataProvider for PracticeRouteError {
    fn error_data(&self) -> ErrorBody {
        match self {
            Self::Practice(PracticeError::Database(_)) => ErrorBody::new(SERVER_ERROR),
            Self::InvalidBody(rejection) => ErrorBody::new(rejection.body_text()),
            error => ErrorBody::new(error.to_string()),
        }
    }
}

impl IntoResponse for PracticeRouteError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
