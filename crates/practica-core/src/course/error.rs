use practica_model::course::question::ValidationError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Course not found")]
    CourseNotFound,

    #[error("Version not found for this course")]
    VersionNotFound,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl CourseError {
    /// Translates a missing record into `not_found`, keeping every other error.
    pub(crate) fn or_not_found(not_found: Self) -> impl FnOnce(DbErr) -> Self {
        move |err| match err {
            DbErr::RecordNotFound(_) => not_found,
            err => Self::Database(err),
        }
    }
}
