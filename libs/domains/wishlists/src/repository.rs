//! Repository trait for wishlist data access

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::WishlistResult;
use crate::models::{AddToWishlist, WishlistItem};

/// Repository abstraction for wishlist persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// All wishlist items of one user, products embedded
    async fn items_for_user(&self, user_id: Uuid) -> WishlistResult<Vec<WishlistItem>>;

    /// Save a product to a wishlist; a duplicate pair is a conflict
    async fn add(&self, input: AddToWishlist) -> WishlistResult<WishlistItem>;

    /// Delete one wishlist item, reporting whether it existed
    async fn delete(&self, id: Uuid) -> WishlistResult<bool>;
}
