//! Venue record store
//!
//! [`VenueStore`] is the seam between the query services and the storage
//! engine: filtered find, distinct-value enumeration and grouped aggregation
//! over the venue collection. [`SqliteVenueStore`] binds it to the `venues`
//! table through sqlx.

use async_trait::async_trait;
use foodpick_common::schema::{VENUES_TABLE, VENUE_COLUMNS};
use foodpick_common::venue::normalize_rating;
use foodpick_common::{GroupCount, Result, VenueCriteria, VenueRecord, VenueSummary};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use tracing::debug;

/// Categorical venue field usable for distinct/group queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    District,
    FoodType,
}

impl CategoryField {
    fn column(self) -> &'static str {
        match self {
            CategoryField::District => "district",
            CategoryField::FoodType => "food_type",
        }
    }
}

/// Result ordering for [`VenueStore::find`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOrder {
    /// No ordering contract
    Unordered,
    /// Rating average descending, id ascending on ties
    RatingDesc,
}

/// Read-only access to the venue collection
#[async_trait]
pub trait VenueStore: Send + Sync {
    /// Venues matching `criteria`, optionally ordered and limited
    async fn find(
        &self,
        criteria: &VenueCriteria,
        order: RecordOrder,
        limit: Option<usize>,
    ) -> Result<Vec<VenueRecord>>;

    /// Distinct non-empty values of a categorical field, ascending
    async fn distinct(&self, field: CategoryField) -> Result<Vec<String>>;

    /// Total number of venues
    async fn count(&self) -> Result<u64>;

    /// Venue count per value of a categorical field, count descending
    async fn group_count(&self, field: CategoryField) -> Result<Vec<GroupCount>>;

    /// Arithmetic mean of stored ratings
    ///
    /// Absent ratings are skipped; explicit zeros count unless
    /// `exclude_unrated` is set. An empty collection yields 0.
    async fn mean_rating(&self, exclude_unrated: bool) -> Result<f64>;

    /// Highest-rated venues with a rating above zero
    async fn top_rated(&self, limit: usize) -> Result<Vec<VenueSummary>>;
}

/// [`VenueStore`] over the SQLite `venues` table
#[derive(Debug, Clone)]
pub struct SqliteVenueStore {
    pool: SqlitePool,
}

impl SqliteVenueStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueStore for SqliteVenueStore {
    async fn find(
        &self,
        criteria: &VenueCriteria,
        order: RecordOrder,
        limit: Option<usize>,
    ) -> Result<Vec<VenueRecord>> {
        let mut query =
            QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM {}", VENUE_COLUMNS, VENUES_TABLE));
        push_criteria(&mut query, criteria);

        if order == RecordOrder::RatingDesc {
            query.push(" ORDER BY COALESCE(reviews_average, 0) DESC, id ASC");
        }
        if let Some(limit) = limit {
            query.push(" LIMIT ").push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows = query.build().fetch_all(&self.pool).await?;
        debug!("find {:?} {:?} -> {} rows", criteria, order, rows.len());

        rows.iter().map(venue_from_row).collect()
    }

    async fn distinct(&self, field: CategoryField) -> Result<Vec<String>> {
        let column = field.column();
        let values = sqlx::query_scalar::<_, String>(&format!(
            "SELECT DISTINCT {column} FROM {VENUES_TABLE}
             WHERE {column} IS NOT NULL AND {column} != ''
             ORDER BY {column} ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(values)
    }

    async fn count(&self) -> Result<u64> {
        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {VENUES_TABLE}"))
            .fetch_one(&self.pool)
            .await?;

        Ok(total.max(0) as u64)
    }

    async fn group_count(&self, field: CategoryField) -> Result<Vec<GroupCount>> {
        let column = field.column();
        let rows = sqlx::query_as::<_, (String, i64)>(&format!(
            "SELECT {column} AS group_key, COUNT(*) AS group_count FROM {VENUES_TABLE}
             GROUP BY {column}
             ORDER BY group_count DESC, group_key ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(key, count)| GroupCount {
                key,
                count: count.max(0) as u64,
            })
            .collect())
    }

    async fn mean_rating(&self, exclude_unrated: bool) -> Result<f64> {
        let mut sql = format!("SELECT AVG(reviews_average) FROM {VENUES_TABLE}");
        if exclude_unrated {
            sql.push_str(" WHERE reviews_average > 0");
        }

        let mean: Option<f64> = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(mean.unwrap_or(0.0))
    }

    async fn top_rated(&self, limit: usize) -> Result<Vec<VenueSummary>> {
        let rows = sqlx::query(&format!(
            "SELECT id, name, district, food_type, reviews_average, address
             FROM {VENUES_TABLE}
             WHERE reviews_average > 0
             ORDER BY reviews_average DESC, id ASC
             LIMIT ?"
        ))
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<VenueSummary> {
                Ok(VenueSummary {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    district: row.try_get("district")?,
                    food_type: row.try_get("food_type")?,
                    reviews_average: normalize_rating(row.try_get("reviews_average")?),
                    address: row.try_get("address")?,
                })
            })
            .collect()
    }
}

/// Render criteria as a parameterized WHERE clause
fn push_criteria(query: &mut QueryBuilder<'_, Sqlite>, criteria: &VenueCriteria) {
    let mut separator = " WHERE ";

    if let Some(district) = &criteria.district {
        query.push(separator).push("district = ").push_bind(district.clone());
        separator = " AND ";
    }
    if let Some(food_type) = &criteria.food_type {
        query.push(separator).push("food_type = ").push_bind(food_type.clone());
        separator = " AND ";
    }
    if let Some(min_rating) = criteria.min_rating {
        // Absent ratings read as 0, same as VenueCriteria::matches
        query
            .push(separator)
            .push("COALESCE(reviews_average, 0) >= ")
            .push_bind(min_rating);
    }
}

fn venue_from_row(row: &SqliteRow) -> Result<VenueRecord> {
    let reviews_count: Option<i64> = row.try_get("reviews_count")?;

    Ok(VenueRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        district: row.try_get("district")?,
        food_type: row.try_get("food_type")?,
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        reviews_average: normalize_rating(row.try_get("reviews_average")?),
        reviews_count: reviews_count.unwrap_or(0).max(0) as u64,
        phone_number: non_empty(row.try_get("phone_number")?),
        website: non_empty(row.try_get("website")?),
    })
}

/// The loader stores "" for missing contact details
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
