use crate::error::StoreError;
use crate::models::StoredListing;
use crate::store::traits::ListingRepository;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// The persisted list as one JSON array in one file.
///
/// Every insert rewrites the whole file. Writers inside this process are
/// serialised; separate processes sharing the file are not coordinated.
pub struct JsonFileRepository {
    path: PathBuf,
    quota_bytes: Option<u64>,
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota_bytes: None,
            write_lock: Mutex::new(()),
        }
    }

    /// Refuse writes that would make the file larger than `quota_bytes`
    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_list(&self) -> Result<Vec<StoredListing>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No listings file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_list(&self, listings: &[StoredListing]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(listings)?;

        if let Some(quota) = self.quota_bytes {
            if json.len() as u64 > quota {
                warn!("Listings file would grow to {} bytes, quota is {}", json.len(), quota);
                return Err(StoreError::WriteRejected(format!(
                    "quota of {} bytes exceeded",
                    quota
                )));
            }
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // write beside the target and rename so readers never see a half-written file
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ListingRepository for JsonFileRepository {
    async fn get_all(&self) -> Result<Vec<StoredListing>, StoreError> {
        self.read_list().await
    }

    async fn append(&self, listing: StoredListing) -> Result<StoredListing, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut listings = self.read_list().await?;
        listings.insert(0, listing.clone());
        self.write_list(&listings).await?;

        info!("💾 Saved listing {} ({} total) to {}", listing.id, listings.len(), self.path.display());
        Ok(listing)
    }

    fn backend_name(&self) -> &'static str {
        "json-file"
    }
}
