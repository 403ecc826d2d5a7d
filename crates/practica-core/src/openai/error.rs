use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAiError {
    #[error(transparent)]
    Api(#[from] async_openai::error::OpenAIError),

    #[error(transparent)]
    FunctionCall(#[from] FunctionCallError),

    #[error("No response from the model provider")]
    EmptyResponse,

    #[error(transparent)]
    HttpClientBuild(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum FunctionCallError {
    #[error("Model returned the wrong function")]
    WrongFunction,

    #[error("Syntax returned by the model is invalid")]
    InvalidSyntax,

    #[error("No function call in the model response even though one was expected")]
    Missing,
}
