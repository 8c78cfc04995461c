//! HTTP API handlers for foodpick-api

pub mod error;
pub mod filters;
pub mod health;
pub mod stats;
pub mod venues;

pub use error::ApiError;
pub use filters::{list_districts, list_food_types};
pub use health::{get_build_info, health_routes};
pub use stats::get_stats;
pub use venues::{explore_view, list_venues, random_venue};
