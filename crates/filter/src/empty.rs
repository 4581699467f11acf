//! Empty-result classification for the view layer.
//!
//! An empty visible set has two distinct root causes with two distinct
//! messages: nothing belongs to the selected owner, or the search and
//! category narrowing left nothing over. The owner case is judged on the
//! user dimension alone and takes priority.

use core::fmt;

use storefront_catalog::EnrichedProduct;

use crate::engine::{apply_filters, owner_matches};
use crate::state::FilterState;

/// Which empty-state message the view should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The selected owner owns no product at all.
    NoOwnerMatches,
    /// Filters are active and nothing survived them.
    NoResults,
}

impl fmt::Display for EmptyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOwnerMatches => f.write_str("No products matching selected criteria"),
            Self::NoResults => f.write_str("No results"),
        }
    }
}

/// Classify the current derivation, or `None` when the table has rows to
/// show (or no filter is active in the first place).
pub fn empty_state(enriched: &[EnrichedProduct], state: &FilterState) -> Option<EmptyState> {
    if state.selected_user.is_some() && !enriched.iter().any(|entry| owner_matches(entry, state)) {
        return Some(EmptyState::NoOwnerMatches);
    }

    if state.has_active_filter() && apply_filters(enriched, state).is_empty() {
        return Some(EmptyState::NoResults);
    }

    None
}
