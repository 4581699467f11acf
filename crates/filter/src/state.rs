use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, UserId, ValueObject};

/// Current filter selection for the product table.
///
/// An immutable value: every transition consumes the old state and
/// returns the replacement, so the view layer holds exactly one
/// `FilterState` at a time and re-derives the visible set from it.
///
/// "All" on the user and category dimensions is `None`, never a sentinel
/// id. `Some(id)` with an id that matches nothing is a legitimate state
/// and simply matches no product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_user: Option<UserId>,
    pub search_query: String,
    pub selected_category: Option<CategoryId>,
}

impl FilterState {
    /// All filters at their "show everything" defaults.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn select_user(mut self, user: UserId) -> Self {
        self.selected_user = Some(user);
        self
    }

    #[must_use]
    pub fn reset_user_filter(mut self) -> Self {
        self.selected_user = None;
        self
    }

    #[must_use]
    pub fn set_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    #[must_use]
    pub fn clear_search_query(mut self) -> Self {
        self.search_query.clear();
        self
    }

    #[must_use]
    pub fn select_category(mut self, category: CategoryId) -> Self {
        self.selected_category = Some(category);
        self
    }

    #[must_use]
    pub fn clear_category_filter(mut self) -> Self {
        self.selected_category = None;
        self
    }

    #[must_use]
    pub fn reset_all_filters(self) -> Self {
        Self::default()
    }

    /// Whether any dimension currently constrains the visible set.
    pub fn has_active_filter(&self) -> bool {
        self.selected_user.is_some()
            || !self.search_query.is_empty()
            || self.selected_category.is_some()
    }
}

impl ValueObject for FilterState {}
