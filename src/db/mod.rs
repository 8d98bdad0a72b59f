pub mod models;
pub mod repository;
pub mod schema;

// Re-export for convenience
pub use models::*;

use directories::ProjectDirs;
use rusqlite::{Connection, Transaction};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::error::{Result, TrainPlanError};

/// Handle to the training-plan store.
///
/// Holds only the store location; every top-level operation opens its own
/// connection and releases it when done. Constructing one with an explicit
/// path (`open_at`) gives tests an isolated ephemeral store.
pub struct Database {
    db_path: PathBuf,
}

impl Database {
    /// Open the store at the platform user-data directory, creating the
    /// schema if needed. Failure here is fatal at startup.
    pub fn new() -> Result<Self> {
        Self::open_at(default_database_path()?)
    }

    /// Open the store at an explicit location, creating parent directories
    /// and the schema if needed.
    pub fn open_at(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let db = Self { db_path };

        // Initialize schema (creates tables if they don't exist)
        let conn = db.connect()?;
        schema::init_database(&conn).map_err(|e| TrainPlanError::schema(e.to_string()))?;

        Ok(db)
    }

    pub fn path(&self) -> &std::path::Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        // Foreign keys are off by default in SQLite and are per-connection
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Scoped read: open a connection, run the closure, release the
    /// connection on every exit path.
    pub fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.connect()?;
        f(&conn)
    }

    /// Scoped write transaction: begin, run the closure, commit on success.
    /// On failure roll back and re-raise the closure's error; a rollback
    /// failure is logged and swallowed so it never masks the real one.
    pub fn with_transaction<T>(&self, f: impl FnOnce(&Transaction) -> Result<T>) -> Result<T> {
        let mut conn = self.connect()?;
        let tx = conn.transaction().map_err(TrainPlanError::from)?;

        match f(&tx) {
            Ok(value) => {
                tx.commit().map_err(TrainPlanError::from)?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!("rollback failed after write error: {rollback_err}");
                }
                Err(err)
            }
        }
    }
}

fn default_database_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "krona", "trainplan")
        .ok_or_else(|| TrainPlanError::schema("Failed to determine project directories"))?;

    Ok(proj_dirs.data_dir().join("training-plans.db"))
}

/// Create a file-backed database in a temp directory for testing.
///
/// The store must be file-backed because every operation opens a fresh
/// connection; an in-memory store would vanish between calls.
#[cfg(test)]
pub(crate) fn create_test_database() -> (Database, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db = Database::open_at(dir.path().join("trainplan-test.db"))
        .expect("Failed to initialize test database");
    (db, dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    #[test]
    fn test_open_at_creates_schema() {
        let (db, _dir) = create_test_database();
        let count: i64 = db
            .with_connection(|conn| {
                conn.query_row("SELECT COUNT(*) FROM plans", [], |row| row.get(0))
                    .map_err(Into::into)
            })
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_transaction_commits_on_success() {
        let (db, _dir) = create_test_database();
        db.with_transaction(|tx| {
            tx.execute(
                "INSERT INTO plans (name, client_name, duration_weeks, workouts_per_week)
                 VALUES (?1, ?2, ?3, ?4)",
                params!["Cut", "Jane", 4, 3],
            )?;
            Ok(())
        })
        .unwrap();

        let count: i64 = db
            .with_connection(|conn| {
                conn.query_row("SELECT COUNT(*) FROM plans", [], |row| row.get(0))
                    .map_err(Into::into)
            })
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_transaction_rolls_back_on_failure() {
        let (db, _dir) = create_test_database();
        let result: Result<()> = db.with_transaction(|tx| {
            tx.execute(
                "INSERT INTO plans (name, client_name, duration_weeks, workouts_per_week)
                 VALUES (?1, ?2, ?3, ?4)",
                params!["Cut", "Jane", 4, 3],
            )?;
            Err(TrainPlanError::General("simulated mid-write failure".into()))
        });
        assert!(result.is_err());

        // No partial row from the failed call is observable
        let count: i64 = db
            .with_connection(|conn| {
                conn.query_row("SELECT COUNT(*) FROM plans", [], |row| row.get(0))
                    .map_err(Into::into)
            })
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_original_error_surfaces_not_rollback() {
        let (db, _dir) = create_test_database();
        let result: Result<()> =
            db.with_transaction(|_tx| Err(TrainPlanError::General("the real failure".into())));
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "the real failure");
    }
}
