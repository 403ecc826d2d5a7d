use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSession {
    pub session_id: Uuid,
    pub current_index: i32,
    pub correct_count: i32,
    pub total_questions: i32,
    pub status: SessionStatus,
    /// Version number the session is bound to
    pub course_version: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionProgress {
    pub session_id: Uuid,
    pub current_index: i32,
    pub correct_count: i32,
    pub status: SessionStatus,
}

/// Outcome of grading one answer inside a session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub session_id: Uuid,
    pub correct: bool,
    pub correct_answer: String,
    pub current_index: i32,
    pub correct_count: i32,
    pub status: SessionStatus,
}
