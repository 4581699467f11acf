//! Bundled demo fixtures.
//!
//! The original data ships with the application rather than coming from a
//! server, so the JSON tables are embedded at compile time and decoded on
//! demand. Decoding failures surface as `DomainError::Validation`.

use serde::de::DeserializeOwned;

use storefront_core::{DomainError, DomainResult};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::product::Product;
use crate::user::User;

const USERS_JSON: &str = include_str!("../fixtures/users.json");
const CATEGORIES_JSON: &str = include_str!("../fixtures/categories.json");
const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");

/// Decode the bundled demo tables into a [`Catalog`].
pub fn demo_catalog() -> DomainResult<Catalog> {
    let users: Vec<User> = decode_table("users", USERS_JSON)?;
    let categories: Vec<Category> = decode_table("categories", CATEGORIES_JSON)?;
    let products: Vec<Product> = decode_table("products", PRODUCTS_JSON)?;

    tracing::debug!(
        users = users.len(),
        categories = categories.len(),
        products = products.len(),
        "loaded demo catalog"
    );

    Ok(Catalog::new(users, categories, products))
}

fn decode_table<T: DeserializeOwned>(table: &str, raw: &str) -> DomainResult<Vec<T>> {
    serde_json::from_str(raw)
        .map_err(|e| DomainError::validation(format!("{table} fixture: {e}")))
}
