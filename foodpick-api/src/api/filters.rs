//! Filter vocabularies
//!
//! District and food-category values exist only in the venue data, so the
//! choices offered to users come from a distinct-value scan.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::db::CategoryField;
use crate::{api::ApiError, AppState};

/// GET /api/filters/districts response
#[derive(Debug, Serialize)]
pub struct DistrictsResponse {
    pub success: bool,
    pub districts: Vec<String>,
}

/// GET /api/filters/food-types response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTypesResponse {
    pub success: bool,
    pub food_types: Vec<String>,
}

/// GET /api/filters/districts
///
/// Sorted, non-empty district names.
pub async fn list_districts(
    State(state): State<AppState>,
) -> Result<Json<DistrictsResponse>, ApiError> {
    let districts = state
        .store()?
        .distinct(CategoryField::District)
        .await
        .map_err(ApiError::unavailable("Failed to load districts"))?;

    Ok(Json(DistrictsResponse {
        success: true,
        districts,
    }))
}

/// GET /api/filters/food-types
///
/// Sorted, non-empty food categories.
pub async fn list_food_types(
    State(state): State<AppState>,
) -> Result<Json<FoodTypesResponse>, ApiError> {
    let food_types = state
        .store()?
        .distinct(CategoryField::FoodType)
        .await
        .map_err(ApiError::unavailable("Failed to load food types"))?;

    Ok(Json(FoodTypesResponse {
        success: true,
        food_types,
    }))
}
