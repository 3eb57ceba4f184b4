//! Business logic for wishlists

use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WishlistError, WishlistResult};
use crate::models::{AddToWishlist, WishlistItem};
use crate::repository::WishlistRepository;

pub struct WishlistService<R: WishlistRepository> {
    repository: Arc<R>,
}

impl<R: WishlistRepository> WishlistService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn get_wishlist(&self, user_id: Option<Uuid>) -> WishlistResult<Vec<WishlistItem>> {
        let user_id =
            user_id.ok_or_else(|| WishlistError::Validation("User ID is required".to_string()))?;

        self.repository.items_for_user(user_id).await
    }

    pub async fn add_to_wishlist(&self, input: AddToWishlist) -> WishlistResult<WishlistItem> {
        self.repository.add(input).await
    }

    pub async fn remove_from_wishlist(&self, id: Uuid) -> WishlistResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(WishlistError::ItemNotFound(id));
        }
        Ok(())
    }
}
