use practica_entity::practice::practice_session::{Column, Entity, Model, SessionStatus};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_session_by_id<C: ConnectionTrait>(conn: &C, session_id: Uuid) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(session_id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %session_id, "failed to load session"))
    }

    pub async fn find_in_progress<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        course_id: Uuid,
        course_version_id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::CourseVersionId.eq(course_version_id))
            .filter(Column::Status.eq(SessionStatus::InProgress))
            .one(conn)
            .await
    }

    /// Every session of the user, most recently updated first.
    pub async fn get_sessions_for_user<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %user_id, "failed to load sessions"))
    }
}
