use sea_orm::{ConnectionTrait, DbConn, DbErr};

/// Creates all tables on a fresh connection, mirroring the server migrations.
pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    let schema = match db.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => include_str!("../schema/postgres.sql"),
        sea_orm::DatabaseBackend::Sqlite => include_str!("../schema/sqlite.sql"),
        #[allow(clippy::unimplemented)]
        sea_orm::DatabaseBackend::MySql => unimplemented!(),
    };

    db.execute_unprepared(schema).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{Database, Statement};
    use test_log::test;

    #[test(tokio::test)]
    async fn test_setup_schema() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        setup_schema(&db).await.unwrap();

        let tables = db
            .query_all(Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
            ))
            .await
            .unwrap();
        let tables: Vec<String> = tables
            .into_iter()
            .map(|row| row.try_get::<String>("", "name").unwrap())
            .collect();
        assert_eq!(
            tables,
            ["course", "course_question", "course_version", "practice_session", "question", "users"]
        );
    }
}
