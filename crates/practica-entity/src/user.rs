use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::practice::practice_session::Entity")]
    PracticeSession,
}

impl Related<crate::practice::practice_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PracticeSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
