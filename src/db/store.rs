//! Generic JSON key/value accessors over the `journal_store` table.
//!
//! `get` never fails on corrupted data: an unparseable value is logged and
//! replaced by the type's default, so one bad record cannot take the journal
//! down. Database-level failures are real errors and do propagate.

use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::db::Database;
use crate::error::Result;

impl Database {
    pub(crate) fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let raw = conn
            .query_row(
                "SELECT value FROM journal_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(raw)
    }

    /// Read and deserialize the value stored under `key`. An absent key or a
    /// corrupted value yields `T::default()`; corruption is logged, never
    /// surfaced.
    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.read_raw(key)? {
            None => Ok(T::default()),
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(value),
                Err(e) => {
                    log::error!("Corrupted value under key '{key}', using default: {e}");
                    Ok(T::default())
                }
            },
        }
    }

    /// Serialize `value` and upsert it under `key`. The write is synchronous;
    /// once this returns, a subsequent read observes the new value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO journal_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, text, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    /// Delete the value under `key`. Idempotent.
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM journal_store WHERE key = ?1", [key])?;
        Ok(())
    }

    /// All keys starting with `prefix`, sorted. Used by the history scan.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let pattern = format!("{}%", escape_like(prefix));
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT key FROM journal_store WHERE key LIKE ?1 ESCAPE '\\' ORDER BY key")?;
        let rows = stmt.query_map([pattern], |row| row.get(0))?;
        let keys = rows.collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(keys)
    }
}

// % and _ are LIKE wildcards, and emails routinely contain _.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
