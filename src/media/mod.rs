pub mod encode;
pub mod preview;
pub mod types;

pub use preview::{PreviewHandle, PreviewRegistry};
pub use types::{MediaData, MediaFile, MediaSource};

use crate::error::MediaError;
use tracing::{debug, info, warn};
use types::{IMAGE_MIME_TYPES, MAX_IMAGES, MAX_IMAGE_BYTES, MAX_VIDEO_BYTES, VIDEO_MIME_TYPES};

/// An accepted image and its live preview
#[derive(Debug)]
pub struct ImageAttachment {
    pub file: MediaFile,
    pub preview: PreviewHandle,
}

/// Result of offering a batch of images
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub accepted: usize,
    pub rejected: Vec<MediaError>,
    /// Files that passed the filters but fell past the cap
    pub truncated: usize,
}

pub fn check_image(file: &MediaFile) -> Result<(), MediaError> {
    if !IMAGE_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(MediaError::UnsupportedImageType {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size > MAX_IMAGE_BYTES {
        return Err(MediaError::ImageTooLarge {
            name: file.name.clone(),
            size: file.size,
        });
    }
    Ok(())
}

pub fn check_video(file: &MediaFile) -> Result<(), MediaError> {
    if VIDEO_MIME_TYPES.contains(&file.mime_type.as_str()) && file.size <= MAX_VIDEO_BYTES {
        Ok(())
    } else {
        Err(MediaError::InvalidVideo {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
            size: file.size,
        })
    }
}

/// The image list and the single video slot.
///
/// Dropping this releases every outstanding preview.
#[derive(Debug, Default)]
pub struct MediaAttachments {
    images: Vec<ImageAttachment>,
    video: Option<MediaFile>,
    previews: PreviewRegistry,
}

impl MediaAttachments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a shared registry, e.g. to observe preview lifetimes from outside
    pub fn with_registry(previews: PreviewRegistry) -> Self {
        Self {
            images: Vec::new(),
            video: None,
            previews,
        }
    }

    pub fn images(&self) -> &[ImageAttachment] {
        &self.images
    }

    pub fn video(&self) -> Option<&MediaFile> {
        self.video.as_ref()
    }

    pub fn registry(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Filter a batch, attach previews, append, and keep only the first 50
    pub fn add_images(&mut self, files: Vec<MediaFile>, source: MediaSource) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for file in files {
            match check_image(&file) {
                Ok(()) => {
                    let preview = self.previews.acquire(&file.name);
                    self.images.push(ImageAttachment { file, preview });
                    outcome.accepted += 1;
                }
                Err(e) => {
                    warn!("Rejected image from {:?}: {}", source, e);
                    outcome.rejected.push(e);
                }
            }
        }

        if self.images.len() > MAX_IMAGES {
            // dropped attachments release their previews here
            let overflow = self.images.split_off(MAX_IMAGES);
            outcome.truncated = overflow.len();
            outcome.accepted -= outcome.truncated.min(outcome.accepted);
        }

        info!(
            "📷 {} image(s) attached via {:?}, {} rejected, {} over the limit ({} total)",
            outcome.accepted,
            source,
            outcome.rejected.len(),
            outcome.truncated,
            self.images.len()
        );
        outcome
    }

    /// Remove one image and release its preview
    pub fn remove_image(&mut self, index: usize) -> Option<MediaFile> {
        if index >= self.images.len() {
            return None;
        }
        let ImageAttachment { file, preview } = self.images.remove(index);
        drop(preview);
        debug!("Removed image {} ({})", index, file.name);
        Some(file)
    }

    /// Accept or refuse a video. A refused video leaves the slot unchanged.
    pub fn set_video(&mut self, file: MediaFile, source: MediaSource) -> Result<(), MediaError> {
        if let Err(e) = check_video(&file) {
            warn!("Rejected video {} from {:?}", file.name, source);
            return Err(e);
        }
        if let Some(previous) = self.video.replace(file) {
            debug!("Replaced video {}", previous.name);
        }
        Ok(())
    }

    pub fn remove_video(&mut self) -> Option<MediaFile> {
        self.video.take()
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.video = None;
    }

    pub fn has_photos(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }
}
