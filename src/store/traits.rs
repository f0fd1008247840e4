use crate::error::StoreError;
use crate::models::{LookingTo, SessionUser, StoredListing};
use async_trait::async_trait;

/// Storage for submitted listings.
/// Implementations decide where the list lives; callers only read and insert.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Every stored listing, newest first
    async fn get_all(&self) -> Result<Vec<StoredListing>, StoreError>;

    /// Insert a listing at the front of the list
    async fn append(&self, listing: StoredListing) -> Result<StoredListing, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<StoredListing>, StoreError> {
        Ok(self.get_all().await?.into_iter().find(|l| l.id == id))
    }

    /// Active listings for one transaction intent
    async fn by_looking_to(&self, looking_to: LookingTo) -> Result<Vec<StoredListing>, StoreError> {
        Ok(self
            .get_all()
            .await?
            .into_iter()
            .filter(|l| l.looking_to() == looking_to && l.is_active())
            .collect())
    }

    /// Get the name of the storage backend
    fn backend_name(&self) -> &'static str;
}

/// The logged-in user slot
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn current_user(&self) -> Result<Option<SessionUser>, StoreError>;

    async fn login(&self, user: SessionUser) -> Result<(), StoreError>;

    async fn logout(&self) -> Result<(), StoreError>;
}
