use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::db::migration_runner::MigrationRunner;
use crate::error::{JournalError, Result};

/// Handle to the journal's backing store. All reads and writes go through the
/// single connection; every mutation is a synchronous write-through.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL keeps readers from blocking the write-through updates
        conn.pragma_update(None, "journal_mode", "WAL")?;

        let runner = MigrationRunner::new();
        let applied = runner.run_pending_migrations(&conn)?;
        if applied > 0 {
            log::info!("Applied {} schema migrations", applied);
        }
        runner.verify_migrations(&conn)?;

        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| JournalError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_schema_and_reopens_cleanly() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("journal.db");

        {
            let db = Database::open(&path).expect("first open");
            db.set("probe", &vec![1, 2, 3]).unwrap();
        }

        // Second open must find the schema current and the data intact.
        let db = Database::open(&path).expect("reopen");
        let probe: Vec<i32> = db.get("probe").unwrap();
        assert_eq!(probe, vec![1, 2, 3]);
    }
}
