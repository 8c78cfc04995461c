//! Venue listing, explore view and random pick endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use foodpick_common::view::{derive_view, paginate, FilterState, SortKey};
use foodpick_common::{VenueCriteria, VenueRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::services::{self, Pick};
use crate::{api::ApiError, AppState};

/// `{success: true, data: [...]}` venue list
#[derive(Debug, Serialize)]
pub struct VenueListResponse {
    pub success: bool,
    pub data: Vec<VenueRecord>,
}

/// GET /api/explore
///
/// All venues, highest-rated first, capped to bound the response size.
pub async fn list_venues(
    State(state): State<AppState>,
) -> Result<Json<VenueListResponse>, ApiError> {
    let data = services::list_venues(state.store()?, state.settings.list_cap)
        .await
        .map_err(ApiError::unavailable("Failed to load venues"))?;

    Ok(Json(VenueListResponse {
        success: true,
        data,
    }))
}

/// Query parameters for the random pick
///
/// Kept as raw strings: malformed values are ignored rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    pub district: Option<String>,
    pub food_type: Option<String>,
    pub min_rating: Option<String>,
    pub top_rated: Option<String>,
}

impl RandomQuery {
    fn criteria(&self) -> VenueCriteria {
        VenueCriteria::from_params(
            self.district.as_deref(),
            self.food_type.as_deref(),
            self.min_rating.as_deref(),
        )
    }

    fn top_rated(&self) -> bool {
        self.top_rated
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}

/// Random pick outcome: a venue, or `success: false` with a message
#[derive(Debug, Serialize)]
pub struct RandomResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<VenueRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Message for a filter combination that matches nothing
pub const NO_MATCH_MESSAGE: &str = "No matching venue found";

/// GET /api/random?district=&food_type=&min_rating=&top_rated=
///
/// Draws one venue uniformly at random from those matching the filters.
/// With `top_rated=true` the draw is restricted to the best-rated slice.
/// No match is a normal 200 response with `success: false`.
pub async fn random_venue(
    State(state): State<AppState>,
    Query(query): Query<RandomQuery>,
) -> Result<Json<RandomResponse>, ApiError> {
    let criteria = query.criteria();
    let top_rated = query.top_rated();
    let mut rng = StdRng::from_entropy();

    let pick = services::random_pick(state.store()?, &criteria, top_rated, &mut rng)
        .await
        .map_err(ApiError::unavailable("Failed to pick a venue"))?;

    let response = match pick {
        Pick::Found(venue) => {
            debug!("Random pick {} for {:?} (top_rated={})", venue.id, criteria, top_rated);
            RandomResponse {
                success: true,
                data: Some(venue),
                message: None,
            }
        }
        Pick::NoMatch => {
            debug!("Random pick found no match for {:?} (top_rated={})", criteria, top_rated);
            RandomResponse {
                success: false,
                data: None,
                message: Some(NO_MATCH_MESSAGE.to_string()),
            }
        }
    };

    Ok(Json(response))
}

/// Query parameters for the explore view
#[derive(Debug, Default, Deserialize)]
pub struct ExploreQuery {
    /// Free-text search over name and address
    pub q: Option<String>,
    pub district: Option<String>,
    pub food_type: Option<String>,
    pub min_rating: Option<String>,
    /// `name`, `rating` (default) or `district`
    pub sort: Option<String>,
    /// Page number (1-indexed)
    pub page: Option<String>,
}

impl ExploreQuery {
    fn filter_state(&self) -> FilterState {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        FilterState {
            search: text(&self.q),
            district: text(&self.district),
            food_type: text(&self.food_type),
            min_rating: self
                .min_rating
                .as_deref()
                .and_then(|r| r.trim().parse::<f64>().ok())
                .filter(|r| r.is_finite())
                .unwrap_or(0.0),
            sort: SortKey::parse_or_default(self.sort.as_deref()),
        }
    }

    fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1)
    }
}

/// One page of the explore view with pagination metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExploreViewResponse {
    pub success: bool,
    pub data: Vec<VenueRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_results: usize,
}

/// GET /api/explore/view?q=&district=&food_type=&min_rating=&sort=&page=
///
/// Server-side rendition of the explore page: filters, sorts and paginates
/// the capped venue list in one pass. Out-of-range pages clamp.
pub async fn explore_view(
    State(state): State<AppState>,
    Query(query): Query<ExploreQuery>,
) -> Result<Json<ExploreViewResponse>, ApiError> {
    let all = services::list_venues(state.store()?, state.settings.list_cap)
        .await
        .map_err(ApiError::unavailable("Failed to load venues"))?;

    let page_size = state.settings.page_size;
    let visible = derive_view(&all, &query.filter_state());
    let page = paginate(&visible, query.page(), page_size);

    Ok(Json(ExploreViewResponse {
        success: true,
        data: page.items.iter().map(|v| (*v).clone()).collect(),
        page: page.pagination.page,
        page_size,
        total_pages: page.pagination.total_pages,
        total_results: page.total_results,
    }))
}
