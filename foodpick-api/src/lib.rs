//! foodpick-api library - restaurant discovery query service
//!
//! Read-only HTTP API over a venue collection: capped listing, filter
//! vocabularies, filtered random pick, and summary statistics.

use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use foodpick_common::config::ServiceSettings;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod services;

use api::ApiError;
use db::VenueStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Venue store; `None` when no database was configured at startup
    store: Option<Arc<dyn VenueStore>>,
    /// Query tunables resolved from config
    pub settings: ServiceSettings,
}

impl AppState {
    /// Create state backed by a venue store
    pub fn new(store: Arc<dyn VenueStore>, settings: ServiceSettings) -> Self {
        Self {
            store: Some(store),
            settings,
        }
    }

    /// Create state without a store; data endpoints answer with a
    /// configuration error until the service is restarted with a database
    pub fn unconfigured(settings: ServiceSettings) -> Self {
        Self {
            store: None,
            settings,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    /// The configured store, or [`ApiError::Unconfigured`]
    pub fn store(&self) -> Result<&dyn VenueStore, ApiError> {
        self.store.as_deref().ok_or(ApiError::Unconfigured)
    }
}

/// Build application router
///
/// All routes are public GETs. Cross-origin reads are allowed from any
/// origin; every request is traced.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    let data = Router::new()
        .route("/api/explore", get(api::list_venues))
        .route("/api/explore/view", get(api::explore_view))
        .route("/api/filters/districts", get(api::list_districts))
        .route("/api/filters/food-types", get(api::list_food_types))
        .route("/api/random", get(api::random_venue))
        .route("/api/stats", get(api::get_stats));

    Router::new()
        .merge(data)
        .merge(api::health_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
