use std::collections::HashMap;

use practica_db::course::{course, course_question, course_version};
use practica_db::practice::practice_session;
use practica_db::practice::practice_session::mutation::Progress;
use practica_db::user;
use practica_entity::practice::practice_session::SessionStatus as SessionStatusModel;
use practica_model::course::question::CourseQuestion;
use practica_model::practice::session::{AnswerResult, PracticeSession, SessionProgress, SessionStatus};
use practica_model::practice::status::{CourseProgress, CourseStatus};
use practica_model_tools::convert::{FromDbModel, IntoModel};
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::practice::error::PracticeError;

pub mod error;

/// Fields of a client side progress write. Only a `Completed` status has an effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub current_index: Option<i32>,
    pub correct_count: Option<i32>,
    pub status: Option<SessionStatus>,
}

fn question_count(count: u64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Resumes the user's running session on the course's effective version, or starts a new one.
pub async fn ensure_session(
    conn: &DatabaseConnection,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<PracticeSession, PracticeError> {
    user::Query::find_user_by_id(conn, user_id)
        .await?
        .ok_or(PracticeError::UserNotFound)?;
    let course = course::Query::find_course_by_id(conn, course_id)
        .await?
        .ok_or(PracticeError::CourseNotFound)?;
    let version = course_version::Query::find_effective_version(conn, &course)
        .await?
        .ok_or(PracticeError::NoVersions)?;

    let total_questions = question_count(course_question::Query::count_questions(conn, version.id).await?);
    let session =
        practice_session::Mutation::ensure_session(conn, user_id, course_id, version.id, total_questions).await?;
    tracing::debug!(session_id = %session.id, %course_id, version = version.version, "ensured practice session");

    Ok((session, version).into_model())
}

/// Stores progress computed by the client. Values are not range checked.
pub async fn update_progress(
    conn: &DatabaseConnection,
    session_id: Uuid,
    update: ProgressUpdate,
) -> Result<SessionProgress, PracticeError> {
    let progress = Progress {
        current_index: update.current_index,
        correct_count: update.correct_count,
        complete: update.status == Some(SessionStatus::Completed),
    };

    let session = practice_session::Mutation::update_progress(conn, session_id, progress)
        .await
        .map_err(|err| match err {
            DbErr::RecordNotFound(_) => PracticeError::SessionNotFound,
            err => err.into(),
        })?;

    Ok(session.into_model())
}

/// Grades `answer` against the question the session points at and advances the session.
pub async fn submit_answer(
    conn: &DatabaseConnection,
    session_id: Uuid,
    answer: &str,
) -> Result<AnswerResult, PracticeError> {
    let session = practice_session::Query::find_session_by_id(conn, session_id)
        .await?
        .ok_or(PracticeError::SessionNotFound)?;
    if session.status == SessionStatusModel::Completed {
        return Err(PracticeError::SessionCompleted);
    }
    if session.current_index >= session.total_questions {
        return Err(PracticeError::NoQuestionLeft);
    }
    let index = u64::try_from(session.current_index).map_err(|_| PracticeError::NoQuestionLeft)?;

    let question: CourseQuestion = course_question::Query::find_question_at(conn, session.course_version_id, index)
        .await?
        .ok_or(PracticeError::NoQuestionLeft)?
        .into_model();
    let correct = question.is_correct(answer);

    let current_index = session.current_index + 1;
    let progress = Progress {
        current_index: Some(current_index),
        correct_count: Some(session.correct_count + i32::from(correct)),
        complete: current_index >= session.total_questions,
    };
    let session = practice_session::Mutation::update_progress(conn, session_id, progress).await?;

    Ok(AnswerResult {
        session_id,
        correct,
        correct_answer: question.answer,
        current_index: session.current_index,
        correct_count: session.correct_count,
        status: SessionStatus::from_db_model(session.status),
    })
}

/// Per course standing of the user. The most recently updated session of a course wins, no
/// matter which version it was started on. Courses without any version are left out.
pub async fn status_for_user(conn: &DatabaseConnection, user_id: Uuid) -> Result<Vec<CourseProgress>, PracticeError> {
    let courses = course::Query::get_courses(conn).await?;

    let mut latest = HashMap::new();
    for session in practice_session::Query::get_sessions_for_user(conn, user_id).await? {
        latest.entry(session.course_id).or_insert(session);
    }

    let mut progress = Vec::with_capacity(courses.len());
    for course in courses {
        let Some(version) = course_version::Query::find_effective_version(conn, &course).await? else {
            continue;
        };

        let entry = match latest.remove(&course.id) {
            Some(session) => CourseProgress {
                course_id: course.id,
                status: CourseStatus::from(SessionStatus::from_db_model(session.status)),
                current_index: session.current_index,
                total_questions: session.total_questions,
            },
            None => {
                let total_questions = question_count(course_question::Query::count_questions(conn, version.id).await?);
                CourseProgress::not_started(course.id, total_questions)
            }
        };
        progress.push(entry);
    }

    Ok(progress)
}
