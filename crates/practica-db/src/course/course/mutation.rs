use chrono::Utc;
use practica_entity::course::course::{ActiveModel, Model};
use practica_entity::course::course_version;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, TransactionTrait};
use std::error::Error;
use uuid::Uuid;

use crate::course::question::mutation::QuestionData;
use crate::course::{course, course_question, course_version as version, question};
use crate::util::{FlattenTransactionResultExt, RequireRecord};

pub const SYSTEM_ACTOR: &str = "system";

/// Author fields of a new course.
#[derive(Debug, Clone)]
pub struct CourseData {
    pub course_name: String,
    pub course_creator: String,
    pub created_by: String,
}

pub struct Mutation;

impl Mutation {
    /// Creates the course together with its empty first version, which becomes current.
    pub async fn create_course<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        data: CourseData,
    ) -> Result<(Model, course_version::Model), DbErr> {
        conn.transaction::<_, _, DbErr>(|txn| Box::pin(async move { Self::insert_with_first_version(txn, data).await }))
            .await
            .flatten_res()
    }

    /// Like [`Self::create_course`], with `questions` linked into version 1 in order. Nothing is
    /// written unless every question is.
    pub async fn create_course_with_questions<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        data: CourseData,
        questions: Vec<QuestionData>,
    ) -> Result<(Model, course_version::Model), DbErr> {
        conn.transaction::<_, _, DbErr>(|txn| {
            Box::pin(async move {
                let (course, version) = Self::insert_with_first_version(txn, data).await?;

                for (position, data) in (0..).zip(questions) {
                    let question = question::Mutation::create_question(txn, data).await?;
                    course_question::Mutation::create_link(txn, course.id, version.id, question.id, position).await?;
                }

                Ok((course, version))
            })
        })
        .await
        .flatten_res()
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create course with questions"))
    }

    async fn insert_with_first_version<C: ConnectionTrait>(
        conn: &C,
        data: CourseData,
    ) -> Result<(Model, course_version::Model), DbErr> {
        let now = Utc::now().naive_utc();
        let course = ActiveModel {
            id: Set(Uuid::new_v4()),
            course_name: Set(data.course_name),
            course_creator: Set(data.course_creator),
            updated_by: Set(data.created_by.clone()),
            created_by: Set(data.created_by),
            current_version_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await?;

        let version = version::Mutation::create_version(conn, course.id, 1).await?;
        let course = Self::point_to_version(conn, course, version.id).await?;

        Ok((course, version))
    }

    /// Moves the current version pointer. Fails with [`DbErr::RecordNotFound`] if the version
    /// is not one of the course's own.
    pub async fn set_current_version<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        course_version_id: Uuid,
    ) -> Result<Model, DbErr> {
        let course = course::Query::find_course_by_id(conn, course_id).await.require()?;
        let version = version::Query::find_version_of_course(conn, course_id, course_version_id)
            .await
            .require()?;

        Self::point_to_version(conn, course, version.id).await
    }

    pub(crate) async fn point_to_version<C: ConnectionTrait>(
        conn: &C,
        course: Model,
        course_version_id: Uuid,
    ) -> Result<Model, DbErr> {
        let mut course: ActiveModel = course.into();
        course.current_version_id = Set(Some(course_version_id));
        course.updated_at = Set(Utc::now().naive_utc());
        course.update(conn).await
    }

    pub async fn mark_published<C: ConnectionTrait>(conn: &C, course_id: Uuid) -> Result<Model, DbErr> {
        let course = course::Query::find_course_by_id(conn, course_id).await.require()?;

        let mut course: ActiveModel = course.into();
        course.updated_by = Set(SYSTEM_ACTOR.to_owned());
        course.updated_at = Set(Utc::now().naive_utc());
        course.update(conn).await
    }
}
