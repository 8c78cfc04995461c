//! Summary statistics over the full venue collection
//!
//! Filters never apply here. The mean includes explicit zero ratings unless
//! [`StatsOptions::exclude_unrated_from_mean`] is set; the top-rated list
//! never contains a venue rated 0.

use foodpick_common::config::{ServiceSettings, DEFAULT_TOP_LIMIT};
use foodpick_common::{GroupCount, Result, VenueSummary};

use crate::db::{CategoryField, VenueStore};

/// Knobs for [`compute_stats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    pub exclude_unrated_from_mean: bool,
    pub top_limit: usize,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            exclude_unrated_from_mean: false,
            top_limit: DEFAULT_TOP_LIMIT,
        }
    }
}

impl From<&ServiceSettings> for StatsOptions {
    fn from(settings: &ServiceSettings) -> Self {
        Self {
            exclude_unrated_from_mean: settings.exclude_unrated_from_mean,
            top_limit: settings.top_limit,
        }
    }
}

/// Aggregate view of the venue collection
#[derive(Debug, Clone, PartialEq)]
pub struct VenueStats {
    pub total: u64,
    pub by_district: Vec<GroupCount>,
    pub by_food_type: Vec<GroupCount>,
    pub avg_rating: f64,
    pub top_rated: Vec<VenueSummary>,
}

/// Compute all statistics; the store queries run concurrently
pub async fn compute_stats(store: &dyn VenueStore, options: StatsOptions) -> Result<VenueStats> {
    let (total, by_district, by_food_type, avg_rating, top_rated) = tokio::try_join!(
        store.count(),
        store.group_count(CategoryField::District),
        store.group_count(CategoryField::FoodType),
        store.mean_rating(options.exclude_unrated_from_mean),
        store.top_rated(options.top_limit),
    )?;

    Ok(VenueStats {
        total,
        by_district,
        by_food_type,
        avg_rating,
        top_rated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteVenueStore;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn store_with_ratings(ratings: &[Option<f64>]) -> SqliteVenueStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        foodpick_common::schema::create_venues_table(&pool).await.unwrap();

        for (i, rating) in ratings.iter().enumerate() {
            let district = if i % 3 == 0 { "Quận 1" } else { "Quận 7" };
            sqlx::query(
                "INSERT INTO venues
                     (id, name, district, food_type, latitude, longitude, reviews_average)
                 VALUES (?, ?, ?, 'hủ tiếu', 10.73, 106.72, ?)",
            )
            .bind(format!("v{i:02}"))
            .bind(format!("Quán {i}"))
            .bind(district)
            .bind(*rating)
            .execute(&pool)
            .await
            .unwrap();
        }

        SqliteVenueStore::new(pool)
    }

    #[tokio::test]
    async fn test_stats_mean_includes_zero() {
        let store = store_with_ratings(&[Some(5.0), Some(4.0), Some(0.0), Some(3.0)]).await;
        let stats = compute_stats(&store, StatsOptions::default()).await.unwrap();

        assert_eq!(stats.total, 4);
        assert!((stats.avg_rating - 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_stats_mean_can_exclude_unrated() {
        let store = store_with_ratings(&[Some(5.0), Some(4.0), Some(0.0), Some(3.0)]).await;
        let options = StatsOptions {
            exclude_unrated_from_mean: true,
            ..StatsOptions::default()
        };
        let stats = compute_stats(&store, options).await.unwrap();

        assert!((stats.avg_rating - 4.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_top_rated_excludes_zero_even_when_short() {
        let store = store_with_ratings(&[Some(4.5), Some(0.0), None, Some(4.9), Some(0.0)]).await;
        let stats = compute_stats(&store, StatsOptions::default()).await.unwrap();

        let ratings: Vec<f64> = stats.top_rated.iter().map(|v| v.reviews_average).collect();
        assert_eq!(ratings, vec![4.9, 4.5]);
    }

    #[tokio::test]
    async fn test_top_rated_capped_at_limit() {
        let ratings: Vec<Option<f64>> = (0..25).map(|i| Some(1.0 + i as f64 * 0.1)).collect();
        let store = store_with_ratings(&ratings).await;
        let stats = compute_stats(&store, StatsOptions::default()).await.unwrap();

        assert_eq!(stats.top_rated.len(), 10);
        assert!(stats
            .top_rated
            .windows(2)
            .all(|w| w[0].reviews_average >= w[1].reviews_average));
    }

    #[tokio::test]
    async fn test_group_counts_sum_to_total() {
        let ratings: Vec<Option<f64>> = (0..9).map(|_| Some(4.0)).collect();
        let store = store_with_ratings(&ratings).await;
        let stats = compute_stats(&store, StatsOptions::default()).await.unwrap();

        assert_eq!(stats.by_district[0].key, "Quận 7");
        assert_eq!(stats.by_district[0].count, 6);
        assert_eq!(stats.by_district.iter().map(|g| g.count).sum::<u64>(), stats.total);
        assert_eq!(stats.by_food_type.len(), 1);
    }
}
