//! Venue table schema
//!
//! Single source of truth for the `venues` table layout. The table is filled
//! by an external loader; this crate only reads it, but fixtures and loaders
//! create it from the same definition.

/// Table holding one row per venue
pub const VENUES_TABLE: &str = "venues";

/// DDL for the venues table
///
/// - `reviews_average` NULL means the venue has no rating
/// - `reviews_count` NULL is read as 0
pub const CREATE_VENUES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS venues (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    address TEXT NOT NULL DEFAULT '',
    district TEXT NOT NULL,
    food_type TEXT NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    reviews_average REAL
        CHECK (reviews_average IS NULL OR (reviews_average >= 0 AND reviews_average <= 5)),
    reviews_count INTEGER CHECK (reviews_count IS NULL OR reviews_count >= 0),
    phone_number TEXT,
    website TEXT,
    created_at TEXT
)
"#;

/// Lookup indexes for the filter and sort columns
pub const CREATE_VENUE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS idx_venues_district ON venues(district)",
    "CREATE INDEX IF NOT EXISTS idx_venues_food_type ON venues(food_type)",
    "CREATE INDEX IF NOT EXISTS idx_venues_rating ON venues(reviews_average DESC)",
];

/// Columns selected for a full venue record, in row-mapping order
pub const VENUE_COLUMNS: &str = "id, name, address, district, food_type, latitude, longitude, \
     reviews_average, reviews_count, phone_number, website";

/// Create the venues table and indexes (idempotent)
///
/// Used by data loaders and test fixtures; the API service itself opens the
/// database read-only and never calls this.
#[cfg(feature = "sqlx")]
pub async fn create_venues_table(pool: &sqlx::SqlitePool) -> crate::Result<()> {
    sqlx::query(CREATE_VENUES_TABLE).execute(pool).await?;
    for index in CREATE_VENUE_INDEXES {
        sqlx::query(index).execute(pool).await?;
    }
    Ok(())
}
