use crate::routes::error::{ErrorBody, ErrorDataProvider, GetStatusCode, SERVER_ERROR, error_to_axum_response};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use practica_core::course::error::CourseError;
use practica_core::generate::error::GenerateError;
use practica_model::course::question::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum CoursesError {
    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("courseVersionId required")]
    MissingVersionId,

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl GetStatusCode for CoursesError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Course(CourseError::Validation(_))
            | Self::Generate(GenerateError::Validation(_))
            | Self::Validation(_)
            | Self::MissingVersionId
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Course(CourseError::CourseNotFound | CourseError::VersionNotFound) => StatusCode::NOT_FOUND,
            Self::Course(CourseError::Database(_)) | Self::Generate(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorDataProvider for CoursesError {
    fn error_data(&self) -> ErrorBody {
        match self {
            Self::Course(CourseError::Database(_)) | Self::Generate(GenerateError::Database(_)) => {
                ErrorBody::new(SERVER_ERROR)
            }
            Self::InvalidBody(rejection) => ErrorBody::new(rejection.body_text()),
            error => ErrorBody::new(error.to_string()),
        }
    }
}

impl IntoResponse for CoursesError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use practica_core::openai::error::OpenAiError;
    use sea_orm::DbErr;

    #[test]
    fn test_status_codes() {
        let cases = [
            (CoursesError::from(ValidationError::MissingField("answer")), StatusCode::BAD_REQUEST),
            (CoursesError::MissingVersionId, StatusCode::BAD_REQUEST),
            (CourseError::VersionNotFound.into(), StatusCode::NOT_FOUND),
            (CourseError::CourseNotFound.into(), StatusCode::NOT_FOUND),
            (GenerateError::MissingApiKey.into(), StatusCode::INTERNAL_SERVER_ERROR),
            (
                GenerateError::Validation(ValidationError::MissingField("topic")).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                CourseError::Database(DbErr::Custom("disk".to_owned())).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status_code) in cases {
            assert_eq!(error.status_code(), status_code, "{error}");
        }
    }

    #[test]
    fn test_messages() {
        let hidden = CoursesError::from(CourseError::Database(DbErr::Custom("disk".to_owned())));
        assert_eq!(hidden.error_data().error, SERVER_ERROR);

        let provider = CoursesError::from(GenerateError::Provider(OpenAiError::EmptyResponse));
        assert_eq!(provider.error_data().error, OpenAiError::EmptyResponse.to_string());

        let key = CoursesError::from(GenerateError::MissingApiKey);
        assert_eq!(key.error_data().error, "Missing OPENROUTER_API_KEY");
    }
}
