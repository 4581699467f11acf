//! Filter engine for the product table.
//!
//! Derives the visible product set from the enriched catalog and the
//! current [`FilterState`]: owner, free-text name search, and category,
//! combined with AND semantics. Pure and synchronous throughout; the view
//! layer re-derives the visible set after every state transition.

pub mod empty;
pub mod engine;
pub mod state;

pub use empty::{EmptyState, empty_state};
pub use engine::{apply_filters, matches};
pub use state::FilterState;
