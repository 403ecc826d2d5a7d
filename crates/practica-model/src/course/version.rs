use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseVersion {
    pub course_version_id: Uuid,
    pub version: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendedQuestion {
    pub new_version_number: i32,
    pub course_version_id: Uuid,
    pub course_question_id: Uuid,
    pub question_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachedQuestion {
    pub course_question_id: Uuid,
    pub question_id: Uuid,
}
