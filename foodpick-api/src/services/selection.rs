//! Venue selection: capped listing and uniform random pick
//!
//! The random pick optionally narrows candidates to the top-rated slice
//! (top 20%, at least 10, never more than the candidate count) before
//! drawing one venue uniformly at random.

use std::cmp::Ordering;

use foodpick_common::{Result, VenueCriteria, VenueRecord};
use rand::Rng;

use crate::db::{RecordOrder, VenueStore};

/// Minimum size of the top-rated slice
pub const TOP_RATED_FLOOR: usize = 10;

/// Outcome of a random pick
#[derive(Debug, Clone, PartialEq)]
pub enum Pick {
    Found(VenueRecord),
    /// No venue satisfies the filters; a valid empty result, not a failure
    NoMatch,
}

/// All venues, highest-rated first, truncated to `cap`
pub async fn list_venues(store: &dyn VenueStore, cap: usize) -> Result<Vec<VenueRecord>> {
    store
        .find(&VenueCriteria::any(), RecordOrder::RatingDesc, Some(cap))
        .await
}

/// Draw one venue matching `criteria`
pub async fn random_pick<R: Rng + Send + ?Sized>(
    store: &dyn VenueStore,
    criteria: &VenueCriteria,
    top_rated: bool,
    rng: &mut R,
) -> Result<Pick> {
    let order = if top_rated {
        RecordOrder::RatingDesc
    } else {
        RecordOrder::Unordered
    };
    let candidates = store.find(criteria, order, None).await?;

    Ok(choose(candidates, top_rated, rng))
}

/// Pick from an already-fetched candidate set
pub fn choose<R: Rng + ?Sized>(candidates: Vec<VenueRecord>, top_rated: bool, rng: &mut R) -> Pick {
    let candidates = if top_rated {
        restrict_top_rated(candidates)
    } else {
        candidates
    };

    match pick_uniform(&candidates, rng) {
        Some(venue) => Pick::Found(venue.clone()),
        None => Pick::NoMatch,
    }
}

/// Size of the top-rated slice for `n` candidates: `min(n, max(ceil(n/5), 10))`
///
/// # Examples
/// ```
/// use foodpick_api::services::selection::top_rated_count;
///
/// assert_eq!(top_rated_count(4), 4);
/// assert_eq!(top_rated_count(30), 10);
/// assert_eq!(top_rated_count(51), 11);
/// ```
pub fn top_rated_count(n: usize) -> usize {
    n.div_ceil(5).max(TOP_RATED_FLOOR).min(n)
}

/// Sort by rating descending (stable) and keep the top-rated slice
pub fn restrict_top_rated(mut candidates: Vec<VenueRecord>) -> Vec<VenueRecord> {
    candidates.sort_by(|a, b| {
        b.reviews_average
            .partial_cmp(&a.reviews_average)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(top_rated_count(candidates.len()));
    candidates
}

/// Uniform draw over indices `[0, n)`; `None` when empty
pub fn pick_uniform<'a, T, R: Rng + ?Sized>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.gen_range(0..candidates.len()))
}
