//! The filter derivation itself.
//!
//! Three independent predicates over an [`EnrichedProduct`], combined
//! with AND semantics. `apply_filters` narrows the list stage by stage;
//! the stages commute, so the order is an implementation detail.

use storefront_catalog::EnrichedProduct;

use crate::state::FilterState;

/// Whether a single entry survives every active filter dimension.
pub fn matches(entry: &EnrichedProduct, state: &FilterState) -> bool {
    owner_matches(entry, state) && search_matches(entry, state) && category_matches(entry, state)
}

/// Owner dimension: an entry with no resolved owner never matches an
/// active user filter.
pub(crate) fn owner_matches(entry: &EnrichedProduct, state: &FilterState) -> bool {
    match state.selected_user {
        Some(user) => entry.owner_id() == Some(user),
        None => true,
    }
}

fn search_matches(entry: &EnrichedProduct, state: &FilterState) -> bool {
    if state.search_query.is_empty() {
        return true;
    }
    entry
        .name()
        .to_lowercase()
        .contains(&state.search_query.to_lowercase())
}

fn category_matches(entry: &EnrichedProduct, state: &FilterState) -> bool {
    match state.selected_category {
        Some(category) => entry.category_id() == category,
        None => true,
    }
}

/// Derive the visible product list from the enriched catalog and the
/// current state.
///
/// Returns a fresh `Vec`; the input is never mutated. Each active stage
/// narrows the previous result and logs the surviving count.
pub fn apply_filters(enriched: &[EnrichedProduct], state: &FilterState) -> Vec<EnrichedProduct> {
    let mut visible: Vec<EnrichedProduct> = enriched.to_vec();

    if state.selected_user.is_some() {
        visible.retain(|entry| owner_matches(entry, state));
        tracing::debug!(stage = "owner", remaining = visible.len(), "narrowed product set");
    }

    if !state.search_query.is_empty() {
        visible.retain(|entry| search_matches(entry, state));
        tracing::debug!(stage = "search", remaining = visible.len(), "narrowed product set");
    }

    if state.selected_category.is_some() {
        visible.retain(|entry| category_matches(entry, state));
        tracing::debug!(stage = "category", remaining = visible.len(), "narrowed product set");
    }

    visible
}
