//! Statistics endpoint

use axum::{extract::State, Json};
use foodpick_common::{GroupCount, VenueSummary};
use serde::Serialize;

use crate::services::{compute_stats, StatsOptions, VenueStats};
use crate::{api::ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub data: StatsData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub total: u64,
    pub by_district: Vec<DistrictCount>,
    pub by_food_type: Vec<FoodTypeCount>,
    pub avg_rating: f64,
    pub top_rated: Vec<VenueSummary>,
}

#[derive(Debug, Serialize)]
pub struct DistrictCount {
    pub district: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTypeCount {
    pub food_type: String,
    pub count: u64,
}

impl From<VenueStats> for StatsData {
    fn from(stats: VenueStats) -> Self {
        Self {
            total: stats.total,
            by_district: stats
                .by_district
                .into_iter()
                .map(|GroupCount { key, count }| DistrictCount {
                    district: key,
                    count,
                })
                .collect(),
            by_food_type: stats
                .by_food_type
                .into_iter()
                .map(|GroupCount { key, count }| FoodTypeCount {
                    food_type: key,
                    count,
                })
                .collect(),
            avg_rating: stats.avg_rating,
            top_rated: stats.top_rated,
        }
    }
}

/// GET /api/stats
///
/// Totals, per-district and per-category counts, mean rating and the
/// top-rated venues, computed over the whole collection.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let options = StatsOptions::from(&state.settings);
    let stats = compute_stats(state.store()?, options)
        .await
        .map_err(ApiError::unavailable("Failed to load statistics"))?;

    Ok(Json(StatsResponse {
        success: true,
        data: stats.into(),
    }))
}
