use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, Entity, UserId};

/// A product category, owned by a user.
///
/// `owner_id` is a plain reference; resolving it may fail to match any
/// user, which the enrichment step tolerates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }
}
