use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub course_name: String,
    pub course_creator: String,
    pub created_by: String,
    pub updated_by: String,
    pub current_version_id: Option<Uuid>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_version::Entity")]
    Versions,
    #[sea_orm(
        belongs_to = "super::course_version::Entity",
        from = "Column::CurrentVersionId",
        to = "super::course_version::Column::Id"
    )]
    CurrentVersion,
    #[sea_orm(has_many = "super::course_question::Entity")]
    CourseQuestion,
    #[sea_orm(has_many = "crate::practice::practice_session::Entity")]
    PracticeSession,
}

impl Related<super::course_version::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Versions.def()
    }
}

impl Related<super::course_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseQuestion.def()
    }
}

impl Related<crate::practice::practice_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PracticeSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
