use chrono::Utc;
use practica_entity::course::question::{ActiveModel, Model, QuestionType};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr};
use uuid::Uuid;

/// Validated question content, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionData {
    pub question_sentence: String,
    pub question_type: QuestionType,
    pub options: Option<String>,
    pub answer: String,
}

pub struct Mutation;

impl Mutation {
    pub async fn create_question<C: ConnectionTrait>(conn: &C, data: QuestionData) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            question_sentence: Set(data.question_sentence),
            question_type: Set(data.question_type),
            options: Set(data.options),
            answer: Set(data.answer),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(conn)
        .await
    }
}
