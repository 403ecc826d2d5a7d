use futures::try_join;
use practica_db::course::course::mutation::CourseData;
use practica_db::course::question::mutation::QuestionData;
use practica_db::course::{course, course_question, course_version};
use practica_model::course::course::{CourseDetail, CourseSummary, CreatedCourse};
use practica_model::course::question::{CourseQuestion, NewQuestion, ValidationError};
use practica_model::course::version::{AppendedQuestion, AttachedQuestion, CourseVersion};
use practica_model_tools::convert::{IntoDbModel, IntoModel};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::course::error::CourseError;

pub mod error;

/// Author input for a new course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    course_name: String,
    course_creator: String,
    created_by: String,
}

impl NewCourse {
    /// `created_by` defaults to the creator.
    pub fn new(
        course_name: Option<&str>,
        course_creator: Option<&str>,
        created_by: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let course_name = required(course_name, "courseName")?;
        let course_creator = required(course_creator, "courseCreator")?;
        let created_by = created_by
            .map(str::trim)
            .filter(|created_by| !created_by.is_empty())
            .map_or_else(|| course_creator.clone(), str::to_owned);

        Ok(Self {
            course_name,
            course_creator,
            created_by,
        })
    }
}

impl From<NewCourse> for CourseData {
    fn from(course: NewCourse) -> Self {
        Self {
            course_name: course.course_name,
            course_creator: course.course_creator,
            created_by: course.created_by,
        }
    }
}

fn required(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .ok_or(ValidationError::MissingField(field))
}

pub(crate) fn question_data(question: NewQuestion) -> QuestionData {
    QuestionData {
        options: question.joined_options(),
        question_sentence: question.question_sentence().to_owned(),
        question_type: question.question_type().into_db_model(),
        answer: question.answer().to_owned(),
    }
}

pub async fn list_courses(conn: &DatabaseConnection) -> Result<Vec<CourseSummary>, CourseError> {
    let courses = course::Query::get_courses_with_latest_version(conn).await?;
    Ok(courses.into_iter().map(IntoModel::into_model).collect())
}

pub async fn create_course(conn: &DatabaseConnection, course: NewCourse) -> Result<CreatedCourse, CourseError> {
    let (course, version) = course::Mutation::create_course(conn, course.into()).await?;
    tracing::info!(course_id = %course.id, "created course");

    Ok(CreatedCourse {
        course_id: course.id,
        course_version_id: version.id,
    })
}

/// Resolves the version to show: the requested number if the course has it, else the current
/// version, else the highest one.
pub async fn get_course_detail(
    conn: &DatabaseConnection,
    course_id: Uuid,
    requested_version: Option<i32>,
) -> Result<CourseDetail, CourseError> {
    let (course, versions) = try_join!(
        course::Query::find_course_by_id(conn, course_id),
        course_version::Query::get_versions(conn, course_id),
    )?;
    let course = course.ok_or(CourseError::CourseNotFound)?;

    let current = course
        .current_version_id
        .and_then(|current_version_id| versions.iter().find(|version| version.id == current_version_id));
    let selected = requested_version
        .and_then(|requested| versions.iter().find(|version| version.version == requested))
        .or(current)
        .or(versions.first());

    let questions: Vec<CourseQuestion> = match selected {
        Some(selected) => course_question::Query::get_questions(conn, selected.id)
            .await?
            .into_iter()
            .map(IntoModel::into_model)
            .collect(),
        None => Vec::new(),
    };

    let selected_version = selected.map(|version| version.version);
    let current_version = current.map(|version| version.version);

    Ok(CourseDetail {
        course: course.into_model(),
        versions: versions.into_iter().map(IntoModel::into_model).collect::<Vec<CourseVersion>>(),
        selected_version,
        current_version,
        questions,
    })
}

/// Adds a question to an existing version without publishing a new one.
pub async fn attach_question(
    conn: &DatabaseConnection,
    course_id: Uuid,
    course_version_id: Uuid,
    question: NewQuestion,
) -> Result<AttachedQuestion, CourseError> {
    let (link, question) =
        course_question::Mutation::attach_question(conn, course_id, course_version_id, question_data(question))
            .await
            .map_err(CourseError::or_not_found(CourseError::VersionNotFound))?;

    Ok(AttachedQuestion {
        course_question_id: link.id,
        question_id: question.id,
    })
}

pub async fn append_question(
    conn: &DatabaseConnection,
    course_id: Uuid,
    question: NewQuestion,
) -> Result<AppendedQuestion, CourseError> {
    let appended = course_version::Mutation::append_question(conn, course_id, question_data(question))
        .await
        .map_err(CourseError::or_not_found(CourseError::CourseNotFound))?;
    tracing::info!(%course_id, version = appended.version.version, "published new course version");

    Ok(AppendedQuestion {
        new_version_number: appended.version.version,
        course_version_id: appended.version.id,
        course_question_id: appended.course_question.id,
        question_id: appended.question.id,
    })
}

pub async fn set_current_version(
    conn: &DatabaseConnection,
    course_id: Uuid,
    course_version_id: Uuid,
) -> Result<(), CourseError> {
    course::Mutation::set_current_version(conn, course_id, course_version_id)
        .await
        .map_err(CourseError::or_not_found(CourseError::VersionNotFound))?;
    Ok(())
}

pub async fn publish_course(conn: &DatabaseConnection, course_id: Uuid) -> Result<(), CourseError> {
    course::Mutation::mark_published(conn, course_id)
        .await
        .map_err(CourseError::or_not_found(CourseError::CourseNotFound))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use practica_entity::course::question::QuestionType as QuestionTypeModel;
    use practica_model::course::question::QuestionType;

    #[test]
    fn test_new_course_defaults_created_by() {
        let course = NewCourse::new(Some(" SQL Basics "), Some("Ada"), None).unwrap();
        assert_eq!(CourseData::from(course).created_by, "Ada");

        let course = NewCourse::new(Some("SQL Basics"), Some("Ada"), Some("Grace")).unwrap();
        assert_eq!(CourseData::from(course).created_by, "Grace");
    }

    #[test]
    fn test_new_course_requires_fields() {
        assert_eq!(
            NewCourse::new(Some(""), Some("Ada"), None),
            Err(ValidationError::MissingField("courseName"))
        );
        assert_eq!(
            NewCourse::new(Some("SQL"), None, None),
            Err(ValidationError::MissingField("courseCreator"))
        );
    }

    #[test]
    fn test_question_data() {
        let question = NewQuestion::new(
            "Pick one",
            QuestionType::MultiSelect,
            vec!["a".to_owned(), "b".to_owned()],
            "b",
        )
        .unwrap();
        let data = question_data(question);

        assert_eq!(data.options.as_deref(), Some("a;b"));
        assert_eq!(data.question_type, QuestionTypeModel::MultiSelect);
    }
}
