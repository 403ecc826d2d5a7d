use super::MIGRATIONS;

use crate::db::error::DbError;
use diesel::migration::MigrationVersion;
use diesel::prelude::*;
use diesel::sql_query;
use diesel_migrations::MigrationHarness;

use practica_test_helpers::{SqliteDb, TestDb};

use crate::db;
use test_log::test;
use url::Url;

pub(crate) fn revert_all_migrations(conn: &'_ mut SqliteConnection) -> Result<Vec<MigrationVersion<'_>>, DbError> {
    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|err| DbError::MigrationFailed(format! {"{err}"}))
}

#[test]
fn test_migrations() {
    let db = SqliteDb::new().unwrap();
    let mut conn = SqliteConnection::establish(db.path()).unwrap();
    // Twice, so reverting leaves nothing behind
    for _ in 0..2 {
        let migrations = db::run_migrations(&mut conn, MIGRATIONS).unwrap();

        let query = sql_query("SELECT id FROM course WHERE course_name = 'test'");
        query.clone().execute(&mut conn).unwrap();

        let mut reverted_migrations = revert_all_migrations(&mut conn).unwrap();
        reverted_migrations.reverse();
        assert_eq!(migrations, reverted_migrations);

        query.execute(&mut conn).unwrap_err();
    }
}

#[test]
fn test_migration_by_url() {
    let db = SqliteDb::new().unwrap();
    let url = Url::parse(&db.db_uri()).unwrap();

    let applied = db::migration(&url).unwrap();
    assert_eq!(applied.len(), 1);
    assert!(db::migration(&url).unwrap().is_empty());
}

#[test]
fn test_unknown_scheme() {
    let url = Url::parse("mysql://localhost/practica").unwrap();
    assert!(matches!(db::migration(&url), Err(DbError::UnknownDbType(db_type)) if db_type == "mysql"));
}
