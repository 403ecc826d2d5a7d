use practica_entity::course::course;
use practica_entity::course::course_version::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Versions of the course, highest first.
    pub async fn get_versions<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::Version)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %course_id, "failed to load versions"))
    }

    pub async fn find_latest_version<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_desc(Column::Version)
            .one(conn)
            .await
    }

    /// The version with this id, if it belongs to the course.
    pub async fn find_version_of_course<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        course_version_id: Uuid,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(course_version_id)
            .filter(Column::CourseId.eq(course_id))
            .one(conn)
            .await
    }

    /// The version practice and detail views default to: the current one, else the highest.
    pub async fn find_effective_version<C: ConnectionTrait>(
        conn: &C,
        course: &course::Model,
    ) -> Result<Option<Model>, DbErr> {
        if let Some(current_version_id) = course.current_version_id {
            if let Some(version) = Self::find_version_of_course(conn, course.id, current_version_id).await? {
                return Ok(Some(version));
            }
            tracing::warn!(course_id = %course.id, %current_version_id, "current version does not belong to course");
        }
        Self::find_latest_version(conn, course.id).await
    }
}
