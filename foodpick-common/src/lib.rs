//! # foodpick Common Library
//!
//! Shared code for the foodpick venue discovery service:
//! - Venue record model and table schema
//! - Typed filter criteria (query builder)
//! - Client-side filter/sort/paginate view derivation
//! - Vietnamese-aware string collation
//! - Configuration loading
//! - Error taxonomy

pub mod collation;
pub mod config;
pub mod criteria;
pub mod error;
pub mod pagination;
pub mod schema;
pub mod venue;
pub mod view;

pub use criteria::VenueCriteria;
pub use error::{Error, Result};
pub use venue::{GroupCount, VenueRecord, VenueSummary};
pub use view::{derive_view, ExploreView, FilterState, SortKey};
