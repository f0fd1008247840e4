use crate::error::StoreError;
use crate::models::{SessionUser, StoredListing};
use crate::store::traits::{ListingRepository, SessionStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local listing store, used for dry runs and tests
#[derive(Default)]
pub struct InMemoryRepository {
    listings: RwLock<Vec<StoredListing>>,
    reject_writes: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listings(listings: Vec<StoredListing>) -> Self {
        Self {
            listings: RwLock::new(listings),
            reject_writes: AtomicBool::new(false),
        }
    }

    /// Make every following `append` fail, as a full disk would
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }
}

#[async_trait]
impl ListingRepository for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<StoredListing>, StoreError> {
        Ok(self.listings.read().await.clone())
    }

    async fn append(&self, listing: StoredListing) -> Result<StoredListing, StoreError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRejected("storage is read-only".to_string()));
        }
        let mut listings = self.listings.write().await;
        listings.insert(0, listing.clone());
        debug!("Stored listing {} in memory ({} total)", listing.id, listings.len());
        Ok(listing)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[derive(Default)]
pub struct InMemorySession {
    user: RwLock<Option<SessionUser>>,
}

impl InMemorySession {
    pub fn logged_in(user: SessionUser) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySession {
    async fn current_user(&self) -> Result<Option<SessionUser>, StoreError> {
        Ok(self.user.read().await.clone())
    }

    async fn login(&self, user: SessionUser) -> Result<(), StoreError> {
        *self.user.write().await = Some(user);
        Ok(())
    }

    async fn logout(&self) -> Result<(), StoreError> {
        *self.user.write().await = None;
        Ok(())
    }
}
