use chrono::Utc;
use practica_db::course::course;
use practica_entity::course::course::Model as CourseModel;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_find_course_by_id_query() {
    let now = Utc::now().naive_utc();
    let course_id = Uuid::new_v4();
    let model = CourseModel {
        id: course_id,
        course_name: "SQL Basics".to_owned(),
        course_creator: "Ada".to_owned(),
        created_by: "Ada".to_owned(),
        updated_by: "Ada".to_owned(),
        current_version_id: None,
        created_at: now,
        updated_at: now,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();

    let found = course::Query::find_course_by_id(&db, course_id).await.unwrap();
    assert_eq!(found, Some(model));

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let sql = &log[0].statements()[0].sql;
    assert!(sql.contains(r#"FROM "course" WHERE "course"."id" = $1"#), "{sql}");
}

#[test(tokio::test)]
async fn test_find_course_by_id_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_owned())])
        .into_connection();

    let err = course::Query::find_course_by_id(&db, Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err, DbErr::Custom("connection reset".to_owned()));
}
