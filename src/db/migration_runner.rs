use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use sha2::{Digest, Sha256};

use crate::error::{JournalError, Result};

#[derive(Debug, Clone)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

impl Migration {
    pub fn new(version: u32, name: &'static str, sql: &'static str) -> Self {
        Self { version, name, sql }
    }

    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.sql.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

pub struct MigrationRunner {
    migrations: Vec<Migration>,
}

impl MigrationRunner {
    pub fn new() -> Self {
        Self {
            migrations: Self::collect_migrations(),
        }
    }

    fn collect_migrations() -> Vec<Migration> {
        vec![
            Migration::new(0, "bootstrap", include_str!("migrations/000_bootstrap.sql")),
            Migration::new(
                1,
                "journal_store",
                include_str!("migrations/001_journal_store.sql"),
            ),
        ]
    }

    pub fn get_current_version(&self, conn: &Connection) -> Result<Option<u32>> {
        if !Self::version_table_exists(conn)? {
            return Ok(None);
        }
        let version = conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get::<_, Option<u32>>(0)
        })?;
        Ok(version)
    }

    fn version_table_exists(conn: &Connection) -> Result<bool> {
        let found: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn run_pending_migrations(&self, conn: &Connection) -> Result<usize> {
        let current = self.get_current_version(conn)?;
        let mut applied = 0;

        for migration in &self.migrations {
            if current.is_some_and(|v| migration.version <= v) {
                continue;
            }

            log::info!("Applying migration {} ({})", migration.version, migration.name);
            conn.execute_batch(migration.sql)?;
            conn.execute(
                "INSERT INTO schema_migrations (version, name, checksum, applied_at) VALUES (?1, ?2, ?3, ?4)",
                params![
                    migration.version,
                    migration.name,
                    migration.checksum(),
                    Utc::now().timestamp()
                ],
            )?;
            applied += 1;
        }

        Ok(applied)
    }

    /// Compare recorded checksums against the embedded SQL. A mismatch means
    /// an already-applied migration was edited, which leaves the on-disk
    /// schema unverifiable.
    pub fn verify_migrations(&self, conn: &Connection) -> Result<()> {
        for migration in &self.migrations {
            let recorded: Option<String> = conn
                .query_row(
                    "SELECT checksum FROM schema_migrations WHERE version = ?1",
                    [migration.version],
                    |row| row.get(0),
                )
                .optional()?;

            if let Some(checksum) = recorded {
                if checksum != migration.checksum() {
                    log::error!(
                        "Migration {} ({}) checksum mismatch",
                        migration.version,
                        migration.name
                    );
                    return Err(JournalError::MigrationChecksum(migration.version));
                }
            }
        }
        Ok(())
    }
}

impl Default for MigrationRunner {
    fn default() -> Self {
        Self::new()
    }
}
