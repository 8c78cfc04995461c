//! Query services over the venue store
//!
//! Stateless: every call re-queries the store.

pub mod aggregation;
pub mod selection;

pub use aggregation::{compute_stats, StatsOptions, VenueStats};
pub use selection::{list_venues, random_pick, Pick};
