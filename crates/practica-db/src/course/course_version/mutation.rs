use chrono::Utc;
use practica_entity::course::course_version::{ActiveModel, Model};
use practica_entity::course::{course_question as course_question_entity, question as question_entity};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, TransactionTrait};
use std::error::Error;
use uuid::Uuid;

use crate::course::question::mutation::QuestionData;
use crate::course::{course, course_question, course_version, question};
use crate::util::{FlattenTransactionResultExt, InspectTransactionError, RequireRecord};

/// Everything written by [`Mutation::append_question`].
#[derive(Debug, Clone)]
pub struct AppendedVersion {
    pub version: Model,
    pub question: question_entity::Model,
    pub course_question: course_question_entity::Model,
}

pub struct Mutation;

impl Mutation {
    pub async fn create_version<C: ConnectionTrait>(conn: &C, course_id: Uuid, version: i32) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            course_id: Set(course_id),
            version: Set(version),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(conn)
        .await
    }

    /// Publishes a new version holding every question of the latest version plus `data`, and
    /// makes it current. Runs in one transaction, so on failure the course is left as it was.
    pub async fn append_question<C: ConnectionTrait + TransactionTrait>(
        conn: &C,
        course_id: Uuid,
        data: QuestionData,
    ) -> Result<AppendedVersion, DbErr> {
        conn.transaction::<_, _, DbErr>(|txn| {
            Box::pin(async move {
                let course = course::Query::find_course_by_id(txn, course_id).await.require()?;
                let latest = course_version::Query::find_latest_version(txn, course_id).await?;
                let next = latest.as_ref().map_or(1, |latest| latest.version + 1);

                let version = Self::create_version(txn, course_id, next).await?;
                if let Some(latest) = latest {
                    let copied = course_question::Mutation::copy_links(txn, latest.id, version.id).await?;
                    tracing::debug!(%course_id, from = latest.version, to = next, copied, "copied questions forward");
                }

                let question = question::Mutation::create_question(txn, data).await?;
                let position = course_question::Query::next_position(txn, version.id).await?;
                let course_question =
                    course_question::Mutation::create_link(txn, course_id, version.id, question.id, position).await?;

                course::Mutation::point_to_version(txn, course, version.id).await?;

                Ok(AppendedVersion {
                    version,
                    question,
                    course_question,
                })
            })
        })
        .await
        .inspect_transaction_err(|error| {
            tracing::error!(error = error as &dyn Error, %course_id, "failed to append question as new version");
        })
        .flatten_res()
    }
}
