use crate::error::StoreError;
use crate::models::SessionUser;
use crate::store::traits::SessionStore;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, warn};

/// Session slot backed by a single JSON file
pub struct JsonFileSession {
    path: PathBuf,
}

impl JsonFileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for JsonFileSession {
    async fn current_user(&self) -> Result<Option<SessionUser>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    // an unreadable slot means nobody is logged in
                    warn!("Ignoring unreadable session at {}: {}", self.path.display(), e);
                    Ok(None)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn login(&self, user: SessionUser) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_string_pretty(&user)?;
        tokio::fs::write(&self.path, json).await?;
        info!("👤 Logged in as {} <{}>", user.name, user.email);
        Ok(())
    }

    async fn logout(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("👋 Logged out");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
