use practica_entity::course::course_question::{Column, Entity, Model};
use practica_entity::course::question;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

fn links_of_version(course_version_id: Uuid) -> Select<Entity> {
    Entity::find()
        .filter(Column::CourseVersionId.eq(course_version_id))
        .order_by_asc(Column::Position)
        .order_by_asc(Column::Id)
}

impl Query {
    pub async fn get_links<C: ConnectionTrait>(conn: &C, course_version_id: Uuid) -> Result<Vec<Model>, DbErr> {
        links_of_version(course_version_id).all(conn).await
    }

    /// The version's questions in display order.
    pub async fn get_questions<C: ConnectionTrait>(
        conn: &C,
        course_version_id: Uuid,
    ) -> Result<Vec<(Model, question::Model)>, DbErr> {
        let rows = links_of_version(course_version_id)
            .find_also_related(question::Entity)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %course_version_id, "failed to load questions");
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, question)| question.map(|question| (link, question)))
            .collect())
    }

    /// The question a session pointer at `index` refers to.
    pub async fn find_question_at<C: ConnectionTrait>(
        conn: &C,
        course_version_id: Uuid,
        index: u64,
    ) -> Result<Option<(Model, question::Model)>, DbErr> {
        let row = links_of_version(course_version_id)
            .offset(index)
            .limit(1)
            .find_also_related(question::Entity)
            .one(conn)
            .await?;

        Ok(row.and_then(|(link, question)| question.map(|question| (link, question))))
    }

    pub async fn count_questions<C: ConnectionTrait>(conn: &C, course_version_id: Uuid) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::CourseVersionId.eq(course_version_id))
            .count(conn)
            .await
    }

    /// Position for a question added to the end of the version.
    pub async fn next_position<C: ConnectionTrait>(conn: &C, course_version_id: Uuid) -> Result<i32, DbErr> {
        let max = Entity::find()
            .select_only()
            .column_as(Column::Position.max(), "max_position")
            .filter(Column::CourseVersionId.eq(course_version_id))
            .into_tuple::<Option<i32>>()
            .one(conn)
            .await?;

        Ok(max.flatten().map_or(0, |max| max + 1))
    }
}
