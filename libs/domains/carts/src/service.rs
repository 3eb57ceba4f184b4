use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CartError, CartResult};
use crate::models::{AddToCart, CartAddition, CartItem, CartResponse, ClearCart, UpdateCartItem};
use crate::repository::CartRepository;

/// Service layer for cart business logic
#[derive(Clone)]
pub struct CartService<R: CartRepository> {
    repository: Arc<R>,
}

impl<R: CartRepository> CartService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// A user's cart with its total in cents
    pub async fn get_cart(&self, user_id: Option<Uuid>) -> CartResult<CartResponse> {
        let Some(user_id) = user_id else {
            return Err(CartError::Validation("User ID is required".to_string()));
        };

        let items = self.repository.items_for_user(user_id).await?;

        let total = items
            .iter()
            .filter_map(|item| {
                let product = item.product.as_ref()?;
                Some(i64::from(product.price) * i64::from(item.quantity))
            })
            .sum();

        Ok(CartResponse { items, total })
    }

    /// Add a product to a cart; an existing (user, product) row gains quantity
    pub async fn add_to_cart(&self, input: AddToCart) -> CartResult<CartAddition> {
        input
            .validate()
            .map_err(|e| CartError::Validation(e.to_string()))?;

        self.repository.add(input).await
    }

    /// Set a cart item quantity; zero or less removes the item.
    ///
    /// Returns the updated item, or None when the update removed it.
    pub async fn update_cart_item(&self, input: UpdateCartItem) -> CartResult<Option<CartItem>> {
        if input.quantity <= 0 {
            let deleted = self.repository.delete(input.cart_item_id).await?;
            if !deleted {
                return Err(CartError::CartItemNotFound(input.cart_item_id));
            }
            return Ok(None);
        }

        let item = self
            .repository
            .update_quantity(input.cart_item_id, input.quantity)
            .await?;
        Ok(Some(item))
    }

    /// Remove one cart item
    pub async fn remove_from_cart(&self, id: Uuid) -> CartResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(CartError::CartItemNotFound(id));
        }

        Ok(())
    }

    /// Remove every item of a user's cart; returns the number removed
    pub async fn clear_cart(&self, input: ClearCart) -> CartResult<u64> {
        self.repository.clear_for_user(input.user_id).await
    }
}
