use std::collections::HashMap;
use std::error::Error;

use practica_entity::course::course::{Column, Entity, Model};
use practica_entity::course::course_version;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_course_by_id<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(course_id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %course_id, "failed to load course"))
    }

    /// All courses, newest first.
    pub async fn get_courses<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load courses"))
    }

    /// All courses, newest first, each with its highest version number.
    pub async fn get_courses_with_latest_version<C: ConnectionTrait>(
        conn: &C,
    ) -> Result<Vec<(Model, Option<i32>)>, DbErr> {
        let courses = Self::get_courses(conn).await?;

        let latest: HashMap<Uuid, i32> = course_version::Entity::find()
            .select_only()
            .column(course_version::Column::CourseId)
            .column_as(course_version::Column::Version.max(), "latest_version")
            .group_by(course_version::Column::CourseId)
            .into_tuple::<(Uuid, i32)>()
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load latest versions"))?
            .into_iter()
            .collect();

        Ok(courses
            .into_iter()
            .map(|course| {
                let latest_version = latest.get(&course.id).copied();
                (course, latest_version)
            })
            .collect())
    }
}
