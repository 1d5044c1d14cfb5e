//! Record book schema, versioned through `PRAGMA user_version`.
//!
//! # Invariants
//! - Version `n` is reached by running the first `n` entries of `SCHEMA_STEPS`.
//! - A data file with a higher version than `supported_schema_version` is
//!   refused before any row is read.

use super::{StorageError, StorageResult};
use log::info;
use rusqlite::Connection;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA_STEPS: &[&str] = &[include_str!("sql/0001_records.sql")];

/// Highest record book schema version this build reads and writes.
pub fn supported_schema_version() -> u32 {
    u32::try_from(SCHEMA_STEPS.len()).unwrap_or(u32::MAX)
}

/// Configures `conn` and upgrades its record tables to the supported version.
pub(super) fn prepare(conn: &mut Connection) -> StorageResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(BUSY_TIMEOUT)?;

    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let supported = supported_schema_version();
    if found > supported {
        return Err(StorageError::NewerSchema { found, supported });
    }

    let pending: Vec<(u32, &str)> = (1..)
        .zip(SCHEMA_STEPS.iter().copied())
        .skip_while(|(version, _)| *version <= found)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for &(version, sql) in &pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;
    info!(
        "event=schema_upgrade module=storage status=ok from_version={found} to_version={supported}"
    );
    Ok(())
}
