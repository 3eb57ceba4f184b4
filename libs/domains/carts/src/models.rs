//! Cart domain models and DTOs

use chrono::{DateTime, Utc};
use domain_catalog::Product;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// One line of a user's cart
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    /// The referenced product, embedded on reads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's cart with its running total
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    /// Sum of price × quantity over the items, in cents
    pub total: i64,
}

/// Request body for adding a product to a cart
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddToCart {
    pub user_id: Uuid,
    pub product_id: Uuid,
    /// Defaults to 1 when omitted
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
}

/// Request body for changing a cart item quantity.
///
/// A quantity of zero or less removes the item.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCartItem {
    pub cart_item_id: Uuid,
    pub quantity: i32,
}

/// Request body for clearing a user's cart
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ClearCart {
    pub user_id: Uuid,
}

/// Query parameters for reading a cart
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CartQuery {
    /// Owner of the cart (required)
    pub user_id: Option<Uuid>,
}

/// Number of cart items removed by a clear call
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearedCart {
    pub removed: u64,
}

/// Confirmation that an item left the cart through a zero-quantity update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemovedFromCart {
    pub message: String,
}

/// The affected item of an add-to-cart call and whether a new row was created
#[derive(Debug, Clone)]
pub struct CartAddition {
    pub item: CartItem,
    pub created: bool,
}

impl CartItem {
    /// Create a new cart item from an AddToCart DTO
    pub fn new(input: AddToCart) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            product_id: input.product_id,
            quantity: input.quantity.unwrap_or(1),
            product: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cart_item_defaults_quantity_to_one() {
        let item = CartItem::new(AddToCart {
            user_id: Uuid::now_v7(),
            product_id: Uuid::now_v7(),
            quantity: None,
        });

        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn add_to_cart_rejects_zero_quantity() {
        let input = AddToCart {
            user_id: Uuid::now_v7(),
            product_id: Uuid::now_v7(),
            quantity: Some(0),
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn cart_item_serialization_omits_missing_product() {
        let item = CartItem::new(AddToCart {
            user_id: Uuid::now_v7(),
            product_id: Uuid::now_v7(),
            quantity: Some(2),
        });

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("product").is_none());
    }
}
