use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage, ChatCompletionRequestSystemMessageContent,
    ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
};
use async_trait::async_trait;
use practica_db::course::course;
use practica_db::course::course::mutation::CourseData;
use practica_model::course::course::GeneratedCourse;
use practica_model::course::question::{NewQuestion, QuestionOptions, ValidationError};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::course::question_data;
use crate::generate::error::GenerateError;
use crate::llm_config::LlmConfig;
use crate::openai::error::{FunctionCallError, OpenAiError};
use crate::openai::tools::OpenApiField;
use crate::openai::{CallConfig, FunctionResponse, openai_call_function_with_timeout};

pub mod error;

pub const MAX_QUESTIONS: usize = 50;
pub const MAX_COURSE_NAME_CHARS: usize = 200;
pub const MAX_CREATOR_CHARS: usize = 100;
pub const DEFAULT_CREATOR: &str = "AI";

const TEMPERATURE: f32 = 0.3;

const SYSTEM_PROMPT: &str = r#"You generate study courses as structured data for a database.
You MUST return data ONLY via the provided function (tool) with VALID JSON arguments.
Constraints for each question:
- Use key "questionSentence" (not "question").
- questionType must be one of: TRUE_FALSE | MULTI_SELECT | SHORT_ANSWER.
- For TRUE_FALSE, answer must be "True" or "False" (string).
- For MULTI_SELECT, include "options" (array of 3-6 concise strings) and set "answer" to EXACTLY ONE of those options (string, not array).
- For SHORT_ANSWER, "answer" is a concise string (<= 80 chars).
Use beginner-friendly wording; keep everything concise."#;

/// What the user asked to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    /// Between 1 and [`MAX_QUESTIONS`]
    pub count: usize,
    pub course_name: Option<String>,
    pub course_creator: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        topic: Option<&str>,
        count: Option<i64>,
        course_name: Option<&str>,
        course_creator: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let topic = topic
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .ok_or(ValidationError::MissingField("topic"))?;
        let count = count
            .filter(|count| *count >= 1)
            .ok_or(ValidationError::MissingField("count"))?;
        let count = usize::try_from(count).map_or(MAX_QUESTIONS, |count| count.min(MAX_QUESTIONS));

        Ok(Self {
            topic: topic.to_owned(),
            count,
            course_name: non_blank(course_name),
            course_creator: non_blank(course_creator),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|value| !value.is_empty()).map(str::to_owned)
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question_sentence: String,
    pub question_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
}

/// Arguments of the `createCourse` function call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCoursePayload {
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub questions: Vec<GeneratedQuestion>,
}

impl FunctionResponse for GeneratedCoursePayload {
    /// Number of questions requested
    type Parameters = usize;

    fn function_name() -> &'static str {
        "createCourse"
    }

    fn function_description() -> &'static str {
        "Structured course payload for insertion into the database."
    }

    fn function_definition(count: &usize) -> serde_json::Value {
        let count = (*count).clamp(1, MAX_QUESTIONS);
        let question = OpenApiField::object()
            .properties([
                ("questionSentence", OpenApiField::string()),
                (
                    "questionType",
                    OpenApiField::string().r#enum(["TRUE_FALSE", "MULTI_SELECT", "SHORT_ANSWER"]),
                ),
                (
                    "options",
                    OpenApiField::array(OpenApiField::string())
                        .description("MULTI_SELECT only. No option may contain ';'."),
                ),
                (
                    "answer",
                    OpenApiField::string()
                        .description("'True' or 'False' for TRUE_FALSE, one of options verbatim for MULTI_SELECT."),
                ),
            ])
            .required(["questionSentence", "questionType", "answer"]);
        let course = OpenApiField::object()
            .properties([
                ("courseName", OpenApiField::string()),
                ("creator", OpenApiField::string()),
                (
                    "questions",
                    OpenApiField::array(question).min_items(count).max_items(count),
                ),
            ])
            .required(["questions"]);

        serde_json::to_value(course).unwrap_or_default()
    }
}

/// Source of generated course content.
#[async_trait]
pub trait CourseGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedCoursePayload, GenerateError>;
}

/// Asks an OpenAI compatible endpoint (OpenRouter by default) for a forced `createCourse` call.
#[derive(Debug, Clone)]
pub struct OpenRouterGenerator {
    llm_config: LlmConfig,
}

impl OpenRouterGenerator {
    #[must_use]
    pub fn new(llm_config: LlmConfig) -> Self {
        Self { llm_config }
    }

    fn messages(request: &GenerationRequest) -> Vec<ChatCompletionRequestMessage> {
        let mut messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(SYSTEM_PROMPT.to_owned()),
                name: None,
            }),
            user_message(format!(
                "Create a course on \"{}\" with exactly {} questions.",
                request.topic, request.count
            )),
        ];
        if let Some(course_name) = &request.course_name {
            messages.push(user_message(format!("Use courseName exactly as: {course_name}")));
        }
        if let Some(course_creator) = &request.course_creator {
            messages.push(user_message(format!("Use creator exactly as: {course_creator}")));
        }
        messages
    }
}

fn user_message(text: String) -> ChatCompletionRequestMessage {
    ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
        content: ChatCompletionRequestUserMessageContent::Text(text),
        name: None,
    })
}

#[async_trait]
impl CourseGenerator for OpenRouterGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedCoursePayload, GenerateError> {
        if self.llm_config.api_key().is_none() {
            return Err(GenerateError::MissingApiKey);
        }

        let timeout = self.llm_config.timeout();
        let config = CallConfig::builder()
            .total_timeout(timeout)
            .iteration_timeout(timeout)
            .max_retry_interval(Duration::from_secs(5))
            .temperature(TEMPERATURE)
            .build();

        openai_call_function_with_timeout::<GeneratedCoursePayload>(
            &self.llm_config,
            config,
            Self::messages(request),
            &request.count,
        )
        .await
        .map_err(|err| match err {
            OpenAiError::EmptyResponse
            | OpenAiError::FunctionCall(FunctionCallError::Missing | FunctionCallError::WrongFunction) => {
                GenerateError::NoFunctionCall
            }
            err => GenerateError::Provider(err),
        })
    }
}

/// Generates a course and stores it as version 1. Nothing is stored unless every generated
/// question passes validation.
pub async fn generate_course(
    conn: &DatabaseConnection,
    generator: &dyn CourseGenerator,
    request: GenerationRequest,
) -> Result<GeneratedCourse, GenerateError> {
    let payload = generator.generate(&request).await?;
    if payload.questions.is_empty() {
        return Err(GenerateError::NoQuestions);
    }
    if payload.questions.len() != request.count {
        tracing::debug!(requested = request.count, produced = payload.questions.len(), "question count differs");
    }

    let questions = payload
        .questions
        .into_iter()
        .take(request.count)
        .map(|question| {
            NewQuestion::from_fields(
                Some(question.question_sentence.as_str()),
                Some(question.question_type.as_str()),
                question.options.map(QuestionOptions::List),
                Some(question.answer.as_str()),
            )
            .map(question_data)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            tracing::warn!(error = %err, topic = %request.topic, "generated question failed validation");
            GenerateError::InvalidQuestion(err)
        })?;

    let course_name = request
        .course_name
        .or_else(|| non_blank(payload.course_name.as_deref()))
        .unwrap_or_else(|| format!("{} — Basics", request.topic));
    let course_creator = request
        .course_creator
        .or_else(|| non_blank(payload.creator.as_deref()))
        .unwrap_or_else(|| DEFAULT_CREATOR.to_owned());
    let course_creator = truncate_chars(&course_creator, MAX_CREATOR_CHARS);

    let data = CourseData {
        course_name: truncate_chars(&course_name, MAX_COURSE_NAME_CHARS),
        created_by: course_creator.clone(),
        course_creator,
    };
    let (course, version) = course::Mutation::create_course_with_questions(conn, data, questions).await?;
    tracing::info!(course_id = %course.id, topic = %request.topic, "generated course");

    Ok(GeneratedCourse {
        course_id: course.id,
        new_version_number: version.version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        assert_eq!(
            GenerationRequest::new(Some("  "), Some(3), None, None),
            Err(ValidationError::MissingField("topic"))
        );
        assert_eq!(
            GenerationRequest::new(Some("Testing"), Some(0), None, None),
            Err(ValidationError::MissingField("count"))
        );
        assert_eq!(
            GenerationRequest::new(Some("Testing"), None, None, None),
            Err(ValidationError::MissingField("count"))
        );

        let request = GenerationRequest::new(Some(" Testing "), Some(500), Some(""), Some(" Ada ")).unwrap();
        assert_eq!(request.topic, "Testing");
        assert_eq!(request.count, MAX_QUESTIONS);
        assert_eq!(request.course_name, None);
        assert_eq!(request.course_creator.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_function_definition_bounds_items() {
        let definition = GeneratedCoursePayload::function_definition(&3);
        let questions = &definition["properties"]["questions"];
        assert_eq!(questions["minItems"], 3);
        assert_eq!(questions["maxItems"], 3);
        assert_eq!(questions["items"]["properties"]["questionType"]["enum"][1], "MULTI_SELECT");
        assert_eq!(definition["required"][0], "questions");
        let options = &questions["items"]["properties"]["options"];
        assert_eq!(options["type"], "array");
        assert!(options["description"].as_str().unwrap().contains("';'"));

        let definition = GeneratedCoursePayload::function_definition(&80);
        assert_eq!(definition["properties"]["questions"]["maxItems"], MAX_QUESTIONS);
    }

    #[test]
    fn test_payload_tolerates_missing_fields() {
        let payload: GeneratedCoursePayload = serde_json::from_str(
            r#"{"questions": [{"questionSentence": "Is Rust fast?", "questionType": "TRUE_FALSE", "answer": "True"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.course_name, None);
        assert_eq!(payload.questions[0].options, None);
    }

    #[test]
    fn test_messages_include_overrides() {
        let request = GenerationRequest::new(Some("Testing"), Some(2), Some("QA 101"), None).unwrap();
        let messages = OpenRouterGenerator::messages(&request);
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("äöü", 2), "äö");
        assert_eq!(truncate_chars("ab", 5), "ab");
    }
}
