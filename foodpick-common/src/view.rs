//! Explore view: client-side filter, sort and paginate
//!
//! Operates on the already-fetched, capped venue list. The visible list is
//! always re-derived from scratch by [`derive_view`]; there is no incremental
//! update. [`ExploreView`] holds the current filter state and page and resets
//! to page 1 whenever the filters or sort key change.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::collation;
use crate::pagination::{calculate_pagination, Pagination, DEFAULT_PAGE_SIZE};
use crate::venue::VenueRecord;

/// Sort key for the explore view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Name, Vietnamese collation, ascending
    Name,
    /// Rating average, descending
    #[default]
    Rating,
    /// District, Vietnamese collation, ascending
    District,
}

impl SortKey {
    /// Parse a sort key name, falling back to the default for unknown values
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("name") => SortKey::Name,
            Some("district") => SortKey::District,
            _ => SortKey::Rating,
        }
    }
}

/// All user-controlled inputs of the explore view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Case-insensitive substring over name or address; empty = no filtering
    pub search: String,
    /// Exact district; empty = no filtering
    pub district: String,
    /// Exact food category; empty = no filtering
    pub food_type: String,
    /// Inclusive lower bound; 0 = no filtering
    pub min_rating: f64,
    pub sort: SortKey,
}

impl FilterState {
    /// Reset every filter, keeping the sort key
    pub fn cleared(&self) -> Self {
        Self {
            sort: self.sort,
            ..Self::default()
        }
    }
}

/// Derive the visible, sorted list from the full list and the filter state
pub fn derive_view<'a>(all: &'a [VenueRecord], state: &FilterState) -> Vec<&'a VenueRecord> {
    let query = state.search.to_lowercase();

    let mut visible: Vec<&VenueRecord> = all
        .iter()
        .filter(|v| {
            query.is_empty()
                || v.name.to_lowercase().contains(&query)
                || v.address.to_lowercase().contains(&query)
        })
        .filter(|v| state.district.is_empty() || v.district == state.district)
        .filter(|v| state.food_type.is_empty() || v.food_type == state.food_type)
        .filter(|v| state.min_rating <= 0.0 || v.reviews_average >= state.min_rating)
        .collect();

    match state.sort {
        SortKey::Name => visible.sort_by_cached_key(|v| collation::collation_key(&v.name)),
        SortKey::District => {
            visible.sort_by_cached_key(|v| collation::collation_key(&v.district))
        }
        SortKey::Rating => visible.sort_by(|a, b| {
            b.reviews_average
                .partial_cmp(&a.reviews_average)
                .unwrap_or(Ordering::Equal)
        }),
    }

    visible
}

/// One page of a derived view
#[derive(Debug, Clone)]
pub struct Page<'a> {
    pub items: &'a [&'a VenueRecord],
    pub pagination: Pagination,
    pub total_results: usize,
}

/// Slice one page out of a derived view, clamping the page number
pub fn paginate<'a>(
    visible: &'a [&'a VenueRecord],
    requested_page: usize,
    page_size: usize,
) -> Page<'a> {
    let pagination = calculate_pagination(visible.len(), requested_page, page_size);

    Page {
        items: &visible[pagination.range(visible.len(), page_size)],
        pagination,
        total_results: visible.len(),
    }
}

/// Stateful explore view over a fetched venue list
#[derive(Debug)]
pub struct ExploreView<'a> {
    all: &'a [VenueRecord],
    state: FilterState,
    visible: Vec<&'a VenueRecord>,
    page: usize,
    page_size: usize,
}

impl<'a> ExploreView<'a> {
    pub fn new(all: &'a [VenueRecord]) -> Self {
        Self::with_page_size(all, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(all: &'a [VenueRecord], page_size: usize) -> Self {
        let state = FilterState::default();
        let visible = derive_view(all, &state);
        Self {
            all,
            state,
            visible,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replace the filter state; re-derives and returns to page 1 if anything changed
    pub fn set_filters(&mut self, state: FilterState) {
        if state == self.state {
            return;
        }
        self.state = state;
        self.visible = derive_view(self.all, &self.state);
        self.page = 1;
    }

    /// Apply an in-place edit to the filter state
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut FilterState)) {
        let mut next = self.state.clone();
        edit(&mut next);
        self.set_filters(next);
    }

    pub fn clear_filters(&mut self) {
        let cleared = self.state.cleared();
        self.set_filters(cleared);
    }

    /// Move to a page, clamped into the valid range
    pub fn go_to_page(&mut self, page: usize) {
        self.page = calculate_pagination(self.visible.len(), page, self.page_size).page;
    }

    pub fn current_page(&self) -> Page<'_> {
        paginate(&self.visible, self.page, self.page_size)
    }

    pub fn page_number(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.visible.len().div_ceil(self.page_size)
    }

    pub fn visible(&self) -> &[&'a VenueRecord] {
        &self.visible
    }
}
