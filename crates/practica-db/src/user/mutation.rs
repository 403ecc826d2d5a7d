use chrono::Utc;
use practica_entity::user::{ActiveModel, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::user::Query;
use crate::util::{RequireRecord, is_unique_violation};

pub struct Mutation;

impl Mutation {
    /// Returns the user with this name, creating it first if needed. `name` has to be trimmed
    /// already.
    pub async fn upsert_user_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Model, DbErr> {
        if let Some(user) = Query::find_user_by_name(conn, name).await? {
            return Ok(user);
        }

        let user = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_owned()),
            created_at: Set(Utc::now().naive_utc()),
        };

        match user.insert(conn).await {
            Ok(user) => Ok(user),
            // someone else created it in between
            Err(err) if is_unique_violation(&err) => Query::find_user_by_name(conn, name).await.require(),
            Err(err) => Err(err),
        }
    }
}
