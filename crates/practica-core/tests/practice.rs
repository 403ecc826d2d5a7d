mod common;

use crate::common::{connect, create_course, multi_select, short_answer, true_false};
use practica_core::course;
use practica_core::identity::{IdentityProvider, NameIdentityProvider};
use practica_core::practice::error::PracticeError;
use practica_core::practice::{self, ProgressUpdate};
use practica_model::practice::session::SessionStatus;
use practica_model::practice::status::CourseStatus;
use sea_orm::DatabaseConnection;
use test_log::test;
use uuid::Uuid;

async fn user(db: &DatabaseConnection) -> Uuid {
    NameIdentityProvider.ensure_user(db, "Grace").await.unwrap().user_id
}

async fn quiz(db: &DatabaseConnection) -> Uuid {
    let course_id = create_course(db, "SQL Basics").await;
    course::append_question(db, course_id, true_false("SQL is a language.", "True"))
        .await
        .unwrap();
    course::append_question(db, course_id, multi_select("Pick the key", &["Primary", "Secondary"], "Primary"))
        .await
        .unwrap();
    course::append_question(db, course_id, short_answer("What does FK stand for?", "Foreign Key"))
        .await
        .unwrap();
    course_id
}

#[test(tokio::test)]
async fn test_ensure_session_resumes_running_session() {
    let db = &connect().await;
    let user_id = user(db).await;
    let course_id = quiz(db).await;

    let first = practice::ensure_session(db, user_id, course_id).await.unwrap();
    let second = practice::ensure_session(db, user_id, course_id).await.unwrap();

    assert_eq!(first.session_id, second.session_id);
    assert_eq!(first.course_version, 4);
    assert_eq!(first.total_questions, 3);
    assert_eq!(first.status, SessionStatus::InProgress);
}

#[test(tokio::test)]
async fn test_completed_session_starts_fresh() {
    let db = &connect().await;
    let user_id = user(db).await;
    let course_id = quiz(db).await;

    let first = practice::ensure_session(db, user_id, course_id).await.unwrap();
    let update = ProgressUpdate {
        current_index: Some(3),
        correct_count: Some(2),
        status: Some(SessionStatus::Completed),
    };
    let progress = practice::update_progress(db, first.session_id, update).await.unwrap();
    assert_eq!(progress.status, SessionStatus::Completed);
    assert_eq!(progress.correct_count, 2);

    let reopened = ProgressUpdate {
        status: Some(SessionStatus::InProgress),
        ..ProgressUpdate::default()
    };
    let progress = practice::update_progress(db, first.session_id, reopened).await.unwrap();
    assert_eq!(progress.status, SessionStatus::Completed);

    let second = practice::ensure_session(db, user_id, course_id).await.unwrap();
    assert_ne!(first.session_id, second.session_id);
    assert_eq!((second.current_index, second.correct_count), (0, 0));
}

#[test(tokio::test)]
async fn test_ensure_session_errors() {
    let db = &connect().await;
    let user_id = user(db).await;
    let course_id = quiz(db).await;

    let err = practice::ensure_session(db, Uuid::new_v4(), course_id).await.unwrap_err();
    assert!(matches!(err, PracticeError::UserNotFound));

    let err = practice::ensure_session(db, user_id, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, PracticeError::CourseNotFound));

    let err = practice::update_progress(db, Uuid::new_v4(), ProgressUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PracticeError::SessionNotFound));
}

#[test(tokio::test)]
async fn test_submit_answer_grades_and_completes() {
    let db = &connect().await;
    let user_id = user(db).await;
    let course_id = quiz(db).await;
    let session = practice::ensure_session(db, user_id, course_id).await.unwrap();

    let result = practice::submit_answer(db, session.session_id, " true ").await.unwrap();
    assert!(result.correct);
    assert_eq!(result.correct_answer, "True");
    assert_eq!((result.current_index, result.correct_count), (1, 1));

    let result = practice::submit_answer(db, session.session_id, "Tertiary").await.unwrap();
    assert!(!result.correct);
    assert_eq!(result.status, SessionStatus::InProgress);

    let result = practice::submit_answer(db, session.session_id, "foreign key").await.unwrap();
    assert!(result.correct);
    assert_eq!((result.current_index, result.correct_count), (3, 2));
    assert_eq!(result.status, SessionStatus::Completed);

    let err = practice::submit_answer(db, session.session_id, "True").await.unwrap_err();
    assert!(matches!(err, PracticeError::SessionCompleted));
}

#[test(tokio::test)]
async fn test_status_for_user() {
    let db = &connect().await;
    let user_id = user(db).await;
    let started = quiz(db).await;
    let untouched = create_course(db, "Rust Basics").await;

    let session = practice::ensure_session(db, user_id, started).await.unwrap();
    practice::submit_answer(db, session.session_id, "True").await.unwrap();

    let status = practice::status_for_user(db, user_id).await.unwrap();
    assert_eq!(status.len(), 2);

    let started_status = status.iter().find(|progress| progress.course_id == started).unwrap();
    assert_eq!(started_status.status, CourseStatus::InProgress);
    assert_eq!(started_status.current_index, 1);
    assert_eq!(started_status.total_questions, 3);

    let untouched_status = status.iter().find(|progress| progress.course_id == untouched).unwrap();
    assert_eq!(untouched_status.status, CourseStatus::NotStarted);
    assert_eq!(untouched_status.total_questions, 0);
}

#[test(tokio::test)]
async fn test_status_keeps_session_of_older_version() {
    let db = &connect().await;
    let user_id = user(db).await;
    let course_id = quiz(db).await;

    let session = practice::ensure_session(db, user_id, course_id).await.unwrap();
    let update = ProgressUpdate {
        current_index: Some(3),
        correct_count: Some(3),
        status: Some(SessionStatus::Completed),
    };
    practice::update_progress(db, session.session_id, update).await.unwrap();
    course::append_question(db, course_id, short_answer("What is SQL?", "A language"))
        .await
        .unwrap();

    let status = practice::status_for_user(db, user_id).await.unwrap();
    assert_eq!(status[0].status, CourseStatus::Completed);
    assert_eq!(status[0].total_questions, 3);
}
