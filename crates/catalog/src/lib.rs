//! Catalog reference data (users, categories, products).
//!
//! This crate holds the static tables the product table is rendered from
//! and the enrichment step that resolves foreign-key style references
//! into embedded objects, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod category;
pub mod enriched;
pub mod fixture;
pub mod product;
pub mod user;

pub use catalog::Catalog;
pub use category::Category;
pub use enriched::EnrichedProduct;
pub use product::Product;
pub use user::{Sex, User};
