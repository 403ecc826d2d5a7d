use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::course::question::CourseQuestion;
use crate::course::version::CourseVersion;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub course_id: Uuid,
    pub course_name: String,
    pub course_creator: String,
    pub created_at: chrono::NaiveDateTime,
    pub latest_version: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    pub course_id: Uuid,
    pub course_name: String,
    pub course_creator: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// A course as seen through one of its versions.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    pub course: CourseInfo,
    /// Newest first
    pub versions: Vec<CourseVersion>,
    pub selected_version: Option<i32>,
    pub current_version: Option<i32>,
    /// Questions of `selected_version` in display order
    pub questions: Vec<CourseQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCourse {
    pub course_id: Uuid,
    pub course_version_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCourse {
    pub course_id: Uuid,
    pub new_version_number: i32,
}
