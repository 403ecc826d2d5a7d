use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum QuestionType {
    #[sea_orm(string_value = "TRUE_FALSE")]
    TrueFalse,
    #[sea_orm(string_value = "MULTI_SELECT")]
    MultiSelect,
    #[sea_orm(string_value = "SHORT_ANSWER")]
    ShortAnswer,
}

/// Question content. Rows are never updated once written; versions share them through
/// [`super::course_question`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub question_sentence: String,
    pub question_type: QuestionType,
    /// `;` delimited, only set for [`QuestionType::MultiSelect`]
    pub options: Option<String>,
    pub answer: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_question::Entity")]
    CourseQuestion,
}

impl Related<super::course_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
