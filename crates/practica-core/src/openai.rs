use crate::llm_config::LlmConfig;
use crate::openai::error::{FunctionCallError, OpenAiError};
use crate::openai::tools::ToolChoice;
use async_openai::Client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionTool, ChatCompletionToolType, CreateChatCompletionRequestArgs,
    CreateChatCompletionResponse, FunctionObject,
};
use backoff::ExponentialBackoffBuilder;
use std::error::Error;
use std::time::Duration;
use tracing::instrument;
use typed_builder::TypedBuilder;

pub mod error;
pub mod tools;

#[derive(TypedBuilder, Debug, Clone)]
pub struct CallConfig {
    total_timeout: Duration,
    iteration_timeout: Duration,
    #[builder(default = Duration::from_millis(100))]
    min_retry_interval: Duration,
    #[builder(default = Duration::from_secs(2))]
    max_retry_interval: Duration,
    #[builder(default, setter(strip_option))]
    temperature: Option<f32>,
}

/// Arguments of a function the model is forced to call.
pub trait FunctionResponse: serde::de::DeserializeOwned {
    /// Input the parameter schema depends on.
    type Parameters;

    fn function_name() -> &'static str;
    fn function_description() -> &'static str;

    fn function_definition(parameters: &Self::Parameters) -> serde_json::Value;
}

#[instrument(skip(llm_config, messages, parameters))]
pub async fn openai_call_function_with_timeout<T: FunctionResponse>(
    llm_config: &LlmConfig,
    config: CallConfig,
    messages: Vec<ChatCompletionRequestMessage>,
    parameters: &T::Parameters,
) -> Result<T, OpenAiError> {
    let name = T::function_name();

    let mut request = CreateChatCompletionRequestArgs::default();
    request
        .model(llm_config.model())
        .messages(messages)
        .tools(vec![ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: name.to_string(),
                description: Some(T::function_description().to_string()),
                parameters: Some(T::function_definition(parameters)),
                strict: None,
            },
        }])
        .tool_choice(ToolChoice::Named(name.to_string()));
    if let Some(temperature) = config.temperature {
        request.temperature(temperature);
    }
    let request = request.build()?;

    let http_client = reqwest::Client::builder()
        .timeout(config.iteration_timeout)
        .default_headers(llm_config.default_headers())
        .build()
        .map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "failed to build http client for openai");
            OpenAiError::HttpClientBuild(error)
        })?;

    let mut backoff_builder = ExponentialBackoffBuilder::default();
    backoff_builder
        .with_max_interval(config.max_retry_interval)
        .with_initial_interval(config.min_retry_interval)
        .with_max_elapsed_time(Some(config.total_timeout));

    let backoff = backoff_builder.build();

    let client = Client::with_config(llm_config.openai_config())
        .with_http_client(http_client)
        .with_backoff(backoff);

    tracing::debug!(model = llm_config.model(), "sending openai request");
    let res = client.chat().create(request).await;
    let chat_completion = res.map_err(|error| {
        tracing::warn!(error = &error as &dyn Error, "open AI call failed");
        OpenAiError::Api(error)
    })?;

    check_function_call(&chat_completion)
}

#[instrument(skip_all)]
fn check_function_call<T: FunctionResponse>(chat_completion: &CreateChatCompletionResponse) -> Result<T, OpenAiError> {
    let choice = chat_completion.choices.first().ok_or(OpenAiError::EmptyResponse)?;
    let message = &choice.message;

    let function_call = message
        .tool_calls
        .as_ref()
        .ok_or(FunctionCallError::Missing)?
        .first()
        .ok_or(FunctionCallError::Missing)?;

    if function_call.function.name != T::function_name() {
        tracing::warn!(
            expected_function = T::function_name(),
            called_function = &function_call.function.name,
            "assistant tried to call the wrong function"
        );
        return Err(FunctionCallError::WrongFunction.into());
    }

    serde_json::from_str(&function_call.function.arguments).map_err(|error| {
        tracing::warn!(
            error = &error as &dyn Error,
            arguments = function_call.function.arguments,
            "failed to parse function call arguments"
        );
        FunctionCallError::InvalidSyntax.into()
    })
}
