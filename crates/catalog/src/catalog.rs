use storefront_core::{CategoryId, ProductId, UserId, find_by_id};

use crate::category::Category;
use crate::enriched::EnrichedProduct;
use crate::product::Product;
use crate::user::User;

/// The three static reference tables, immutable after construction.
///
/// Lookups are total: a reference that matches nothing yields `None`.
/// Where ids collide within a table, the first record wins, matching the
/// first-match semantics of the lookups used during enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        find_by_id(&self.users, id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        find_by_id(&self.products, id)
    }

    /// Denormalize every product into an [`EnrichedProduct`].
    ///
    /// Pure and deterministic over the three tables: recomputing at any
    /// time yields an identical result, so callers may cache the output
    /// for as long as the catalog lives. Output length equals the product
    /// count and input order is preserved.
    pub fn enrich(&self) -> Vec<EnrichedProduct> {
        self.products
            .iter()
            .map(|product| {
                let category = self.category(product.category_id).cloned();
                let owner = category
                    .as_ref()
                    .and_then(|category| self.user(category.owner_id))
                    .cloned();
                EnrichedProduct {
                    product: product.clone(),
                    category,
                    owner,
                }
            })
            .collect()
    }
}
