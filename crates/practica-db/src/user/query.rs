use practica_entity::user::{Column, Entity, Model};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_user_by_id<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(user_id).one(conn).await
    }

    pub async fn find_user_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Name.eq(name))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user by name"))
    }
}
