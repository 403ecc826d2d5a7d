use practica_entity::course::course_question::{ActiveModel, Entity, Model};
use practica_entity::course::question;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, TransactionTrait};
use std::error::Error;
use uuid::Uuid;

use crate::course::question::mutation::QuestionData;
use crate::course::{course_question, course_version, question as question_db};
use crate::util::{FlattenTransactionResultExt, RequireRecord};

pub struct Mutation;

impl Mutation {
    pub async fn create_link<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        course_version_id: Uuid,
        question_id: Uuid,
        position: i32,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            course_version_id: Set(course_version_id),
            question_id: Set(question_id),
            position: Set(position),
        }
        .insert(conn)
        .await
    }

    /// Links every question of one version into another, keeping positions. Returns the number
    /// of links written.
    pub async fn copy_links<C: ConnectionTrait>(
        conn: &C,
        from_version_id: Uuid,
        to_version_id: Uuid,
    ) -> Result<u64, DbErr> {
        let links = course_question::Query::get_links(conn, from_version_id).await?;
        if links.is_empty() {
            return Ok(0);
        }

        let copies = links.into_iter().map(|link| ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(link.course_id),
            course_version_id: Set(to_version_id),
            question_id: Set(link.question_id),
            position: Set(link.position),
        });

        Entity::insert_many(copies).exec_without_returning(conn).await
    }

    /// Adds a new question to the end of an existing version of the course.
    pub async fn attach_question<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        course_id: Uuid,
        course_version_id: Uuid,
        data: QuestionData,
    ) -> Result<(Model, question::Model), DbErr> {
        conn.transaction::<_, _, DbErr>(|txn| {
            Box::pin(async move {
                course_version::Query::find_version_of_course(txn, course_id, course_version_id)
                    .await
                    .require()?;

                let question = question_db::Mutation::create_question(txn, data).await?;
                let position = course_question::Query::next_position(txn, course_version_id).await?;
                let link = Self::create_link(txn, course_id, course_version_id, question.id, position).await?;

                Ok((link, question))
            })
        })
        .await
        .flatten_res()
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %course_id, %course_version_id, "failed to attach question");
        })
    }
}
