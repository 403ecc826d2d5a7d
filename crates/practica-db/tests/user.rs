mod common;

use crate::common::connect;
use practica_db::user;
use practica_entity::user::Entity as User;
use sea_orm::EntityTrait;
use test_log::test;

#[test(tokio::test)]
async fn test_upsert_user_by_name() {
    let db = &connect().await;

    let first = user::Mutation::upsert_user_by_name(db, "Ada").await.unwrap();
    let second = user::Mutation::upsert_user_by_name(db, "Ada").await.unwrap();
    let other = user::Mutation::upsert_user_by_name(db, "Grace").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_ne!(first.id, other.id);
    assert_eq!(User::find().all(db).await.unwrap().len(), 2);

    let found = user::Query::find_user_by_id(db, first.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Ada");
}
