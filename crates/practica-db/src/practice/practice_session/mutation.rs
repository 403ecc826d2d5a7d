use chrono::Utc;
use practica_entity::practice::practice_session::{ActiveModel, Model, SessionStatus};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

use crate::practice::practice_session::Query;
use crate::util::{RequireRecord, is_unique_violation};

/// Fields a progress update may touch. `None` leaves the stored value as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub current_index: Option<i32>,
    pub correct_count: Option<i32>,
    pub complete: bool,
}

pub struct Mutation;

impl Mutation {
    /// Returns the running session of the user for this version, or starts one.
    pub async fn ensure_session<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
        course_version_id: Uuid,
        total_questions: i32,
    ) -> Result<Model, DbErr> {
        if let Some(session) = Query::find_in_progress(conn, user_id, course_id, course_version_id).await? {
            return Ok(session);
        }
        Self::start_session(conn, user_id, course_id, course_version_id, total_questions).await
    }

    /// Inserts a fresh running session. If another caller started one for the same version in
    /// the meantime, the unique index rejects the insert and that session is returned instead.
    pub async fn start_session<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
        course_version_id: Uuid,
        total_questions: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now().naive_utc();
        let session = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            course_id: Set(course_id),
            course_version_id: Set(course_version_id),
            current_index: Set(0),
            correct_count: Set(0),
            total_questions: Set(total_questions),
            status: Set(SessionStatus::InProgress),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match session.insert(conn).await {
            Ok(session) => Ok(session),
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(%user_id, %course_version_id, "lost session creation race, resuming");
                Query::find_in_progress(conn, user_id, course_id, course_version_id)
                    .await
                    .require()
            }
            Err(err) => {
                tracing::error!(error = &err as &dyn Error, %user_id, %course_id, "failed to create session");
                Err(err)
            }
        }
    }

    /// Applies a partial update. The status only ever moves to completed.
    pub async fn update_progress<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
        progress: Progress,
    ) -> Result<Model, DbErr> {
        let session = Query::find_session_by_id(conn, session_id).await.require()?;

        let mut session: ActiveModel = session.into();
        if let Some(current_index) = progress.current_index {
            session.current_index = Set(current_index);
        }
        if let Some(correct_count) = progress.correct_count {
            session.correct_count = Set(correct_count);
        }
        if progress.complete {
            session.status = Set(SessionStatus::Completed);
        }
        session.updated_at = Set(Utc::now().naive_utc());

        session.update(conn).await
    }
}
