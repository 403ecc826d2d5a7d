use practica_model::course::question::ValidationError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::openai::error::OpenAiError;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request itself is incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Missing OPENROUTER_API_KEY")]
    MissingApiKey,

    #[error("Model did not return structured function output")]
    NoFunctionCall,

    #[error("No questions produced")]
    NoQuestions,

    /// A generated question breaks the authoring rules; the whole batch is dropped.
    #[error("{0}")]
    InvalidQuestion(ValidationError),

    #[error("{0}")]
    Provider(OpenAiError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
