//! Explore view state tests
//!
//! Covers:
//! - Any filter or sort change re-derives the view and returns to page 1
//! - Page requests beyond the last page clamp silently
//! - Filters combine conjunctively

use foodpick_common::view::SortKey;
use foodpick_common::{ExploreView, FilterState, VenueRecord};

fn venue(i: usize, district: &str, food_type: &str, rating: f64) -> VenueRecord {
    VenueRecord {
        id: format!("v{i:03}"),
        name: format!("Quán {i:03}"),
        address: format!("{i} Nguyễn Huệ, {district}"),
        district: district.to_string(),
        food_type: food_type.to_string(),
        latitude: 10.77,
        longitude: 106.70,
        reviews_average: rating,
        reviews_count: i as u64,
        phone_number: None,
        website: None,
    }
}

/// 40 venues: half in Quận 1, a third "bún bò", ratings cycling 3.0..4.9
fn dataset() -> Vec<VenueRecord> {
    (0..40)
        .map(|i| {
            let district = if i % 2 == 0 { "Quận 1" } else { "Quận 3" };
            let food_type = if i % 3 == 0 { "bún bò" } else { "phở" };
            venue(i, district, food_type, 3.0 + (i % 20) as f64 * 0.1)
        })
        .collect()
}

#[test]
fn test_initial_view_shows_everything_on_page_one() {
    let all = dataset();
    let view = ExploreView::new(&all);

    assert_eq!(view.page_number(), 1);
    assert_eq!(view.visible().len(), 40);
    assert_eq!(view.total_pages(), 4);
    assert_eq!(view.current_page().items.len(), 12);
}

#[test]
fn test_filter_change_resets_page() {
    let all = dataset();
    let mut view = ExploreView::new(&all);

    view.go_to_page(3);
    assert_eq!(view.page_number(), 3);

    view.update_filters(|f| f.district = "Quận 1".to_string());
    assert_eq!(view.page_number(), 1);
    assert!(view.visible().iter().all(|v| v.district == "Quận 1"));
}

#[test]
fn test_sort_change_resets_page() {
    let all = dataset();
    let mut view = ExploreView::new(&all);

    view.go_to_page(2);
    view.update_filters(|f| f.sort = SortKey::Name);
    assert_eq!(view.page_number(), 1);
    assert_eq!(view.visible()[0].name, "Quán 000");
}

#[test]
fn test_unchanged_filters_keep_page() {
    let all = dataset();
    let mut view = ExploreView::new(&all);

    view.go_to_page(2);
    view.set_filters(view.state().clone());
    assert_eq!(view.page_number(), 2);
}

#[test]
fn test_page_beyond_last_clamps() {
    let all = dataset();
    let mut view = ExploreView::new(&all);

    view.go_to_page(50);
    assert_eq!(view.page_number(), 4);
    assert_eq!(view.current_page().items.len(), 4);

    view.go_to_page(0);
    assert_eq!(view.page_number(), 1);
}

#[test]
fn test_filters_are_conjunctive() {
    let all = dataset();
    let mut view = ExploreView::new(&all);

    view.set_filters(FilterState {
        district: "Quận 1".to_string(),
        food_type: "bún bò".to_string(),
        min_rating: 4.0,
        ..FilterState::default()
    });

    let expected = all
        .iter()
        .filter(|v| {
            v.district == "Quận 1" && v.food_type == "bún bò" && v.reviews_average >= 4.0
        })
        .count();
    assert_eq!(view.visible().len(), expected);
    assert!(expected > 0);
}

#[test]
fn test_no_match_is_empty_not_error() {
    let all = dataset();
    let mut view = ExploreView::new(&all);

    view.update_filters(|f| f.search = "không tồn tại".to_string());
    assert!(view.visible().is_empty());
    assert_eq!(view.total_pages(), 0);

    view.go_to_page(3);
    let page = view.current_page();
    assert_eq!(page.pagination.page, 1);
    assert!(page.items.is_empty());
}

#[test]
fn test_clear_filters_keeps_sort() {
    let all = dataset();
    let mut view = ExploreView::new(&all);

    view.set_filters(FilterState {
        search: "quán 01".to_string(),
        district: "Quận 3".to_string(),
        sort: SortKey::District,
        ..FilterState::default()
    });
    view.clear_filters();

    assert_eq!(view.state().sort, SortKey::District);
    assert!(view.state().search.is_empty());
    assert!(view.state().district.is_empty());
    assert_eq!(view.visible().len(), 40);
}
