use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, ProductId, UserId};

use crate::category::Category;
use crate::product::Product;
use crate::user::User;

/// Denormalized, queryable product record.
///
/// The product plus its resolved category and owner. A dangling
/// `category_id` leaves `category` (and therefore `owner`) as `None`;
/// the record itself is always present, so enrichment preserves both
/// the count and the order of the input products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    pub product: Product,
    pub category: Option<Category>,
    pub owner: Option<User>,
}

impl EnrichedProduct {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn category_id(&self) -> CategoryId {
        self.product.category_id
    }

    /// Id of the resolved owner, if the ownership chain resolved.
    pub fn owner_id(&self) -> Option<UserId> {
        self.owner.as_ref().map(|user| user.id)
    }
}
