use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::practice::session::SessionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl From<SessionStatus> for CourseStatus {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::InProgress => Self::InProgress,
            SessionStatus::Completed => Self::Completed,
        }
    }
}

/// A user's standing in one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course_id: Uuid,
    pub status: CourseStatus,
    pub current_index: i32,
    pub total_questions: i32,
}

impl CourseProgress {
    #[must_use]
    pub fn not_started(course_id: Uuid, total_questions: i32) -> Self {
        Self {
            course_id,
            status: CourseStatus::NotStarted,
            current_index: 0,
            total_questions,
        }
    }
}
