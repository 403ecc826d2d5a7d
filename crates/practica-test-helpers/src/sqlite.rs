use crate::TestDb;
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// A file backed sqlite database that lives as long as this value.
pub struct SqliteDb {
    // We keep this around so it does not get dropped early
    #[allow(dead_code)]
    temp_dir: TempDir,
    path: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("practica-sqlite-db")?;
        let path = temp_dir
            .path()
            .join("db.sqlite")
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?
            .to_owned();

        tracing::info!(path = ?path, "created sqlite db path");
        Ok(Self { temp_dir, path })
    }

    /// Plain file path, as diesel expects it.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        format!("sqlite://{}?mode=rwc", self.path).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_start_stop() {
        let db = SqliteDb::new().unwrap();
        assert!(db.db_uri().starts_with("sqlite://"));
        assert!(db.path().ends_with("db.sqlite"));
        drop(db);
    }
}
