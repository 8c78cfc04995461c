//! Database access layer for foodpick-api
//!
//! The venue table is filled by an external loader. This service opens it
//! read-only and never writes.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

mod store;
pub use store::{CategoryField, RecordOrder, SqliteVenueStore, VenueStore};

/// Pool size for the read-only venue pool
const MAX_CONNECTIONS: u32 = 8;

/// Open the venue database read-only
///
/// The file must already exist. The loader may refresh it while the service
/// runs: readers take shared locks, so each query sees a consistent snapshot.
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.is_file() {
        anyhow::bail!("Venue database not found: {}", db_path.display());
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open venue database {}", db_path.display()))?;

    // Debug builds prove the pool cannot write
    #[cfg(debug_assertions)]
    if sqlx::query("CREATE TABLE _write_probe (id INTEGER)")
        .execute(&pool)
        .await
        .is_ok()
    {
        anyhow::bail!("Venue database {} accepted a write", db_path.display());
    }

    Ok(pool)
}
