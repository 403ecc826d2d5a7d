use practica_model::course::question::ValidationError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PracticeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User not found")]
    UserNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Course has no versions")]
    NoVersions,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Session is already completed")]
    SessionCompleted,

    #[error("No question left to answer")]
    NoQuestionLeft,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
