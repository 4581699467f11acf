//! Black-box filter flows against the bundled demo catalog.
//!
//! Drives the engine the way a view layer would: load the fixtures once,
//! enrich once, then re-derive the visible set after every state
//! transition.

use storefront_catalog::{EnrichedProduct, fixture};
use storefront_core::{CategoryId, UserId};
use storefront_filter::{EmptyState, FilterState, apply_filters, empty_state};

fn enriched() -> Vec<EnrichedProduct> {
    storefront_observability::init();
    fixture::demo_catalog().unwrap().enrich()
}

fn names(entries: &[EnrichedProduct]) -> Vec<&str> {
    entries.iter().map(|e| e.name()).collect()
}

#[test]
fn unfiltered_table_shows_every_product() {
    let enriched = enriched();
    let visible = apply_filters(&enriched, &FilterState::new());
    assert_eq!(visible, enriched);
    assert_eq!(empty_state(&enriched, &FilterState::new()), None);
}

#[test]
fn selecting_an_owner_narrows_to_their_categories() {
    let enriched = enriched();

    // Anna owns Grocery and Fruits.
    let state = FilterState::new().select_user(UserId::new(2));
    let visible = apply_filters(&enriched, &state);
    assert_eq!(names(&visible), vec!["Bread", "Garlic", "Apple", "Banana"]);

    // Back to "All".
    let state = state.reset_user_filter();
    assert_eq!(apply_filters(&enriched, &state), enriched);
}

#[test]
fn search_then_category_then_owner_compose() {
    let enriched = enriched();

    let state = FilterState::new().set_search_query("la");
    assert_eq!(names(&apply_filters(&enriched, &state)), vec!["Cola", "Laptop"]);

    let state = state.select_category(CategoryId::new(2));
    assert_eq!(names(&apply_filters(&enriched, &state)), vec!["Cola"]);

    // Drinks belong to Roma; selecting Anna empties the intersection.
    let state = state.select_user(UserId::new(2));
    assert!(apply_filters(&enriched, &state).is_empty());
    assert_eq!(empty_state(&enriched, &state), Some(EmptyState::NoResults));
}

#[test]
fn search_is_case_insensitive_against_fixture_names() {
    let enriched = enriched();
    let state = FilterState::new().set_search_query("shirt");
    assert_eq!(names(&apply_filters(&enriched, &state)), vec!["Blue Shirt"]);
}

#[test]
fn owner_without_products_gets_the_owner_specific_message() {
    let enriched = enriched();

    // John owns no category in the fixtures.
    let state = FilterState::new().select_user(UserId::new(4));
    assert!(apply_filters(&enriched, &state).is_empty());
    assert_eq!(empty_state(&enriched, &state), Some(EmptyState::NoOwnerMatches));
}

#[test]
fn reset_all_filters_returns_the_full_table() {
    let enriched = enriched();

    let state = FilterState::new()
        .select_user(UserId::new(3))
        .set_search_query("socks")
        .select_category(CategoryId::new(5));
    assert_eq!(names(&apply_filters(&enriched, &state)), vec!["Socks"]);

    let state = state.reset_all_filters();
    assert_eq!(apply_filters(&enriched, &state), enriched);
    assert_eq!(state, FilterState::default());
}

#[test]
fn rederiving_from_the_same_state_is_idempotent() {
    let enriched = enriched();
    let state = FilterState::new().select_category(CategoryId::new(3));

    let first = apply_filters(&enriched, &state);
    let second = apply_filters(&enriched, &state);
    assert_eq!(first, second);
}
