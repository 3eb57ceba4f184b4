//! Wishlist domain models and DTOs

use chrono::{DateTime, Utc};
use domain_catalog::Product;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// One saved product on a user's wishlist
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WishlistItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    /// The referenced product with its category, embedded on reads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    pub created_at: DateTime<Utc>,
}

/// Request body for saving a product to a wishlist
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddToWishlist {
    pub user_id: Uuid,
    pub product_id: Uuid,
}

/// Query parameters for reading a wishlist
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct WishlistQuery {
    /// Owner of the wishlist (required)
    pub user_id: Option<Uuid>,
}

impl WishlistItem {
    /// Create a new wishlist item from an AddToWishlist DTO
    pub fn new(input: AddToWishlist) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            product_id: input.product_id,
            product: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wishlist_item_carries_the_requested_pair() {
        let user_id = Uuid::now_v7();
        let product_id = Uuid::now_v7();

        let item = WishlistItem::new(AddToWishlist {
            user_id,
            product_id,
        });

        assert_eq!(item.user_id, user_id);
        assert_eq!(item.product_id, product_id);
    }

    #[test]
    fn wishlist_item_serialization_omits_missing_product() {
        let item = WishlistItem::new(AddToWishlist {
            user_id: Uuid::now_v7(),
            product_id: Uuid::now_v7(),
        });

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("product").is_none());
    }
}
