use std::path::{Path, PathBuf};

pub const MB: u64 = 1024 * 1024;

/// Largest accepted image, per file
pub const MAX_IMAGE_BYTES: u64 = 10 * MB;
/// Largest accepted video
pub const MAX_VIDEO_BYTES: u64 = 80 * MB;
/// Images kept after a batch is appended
pub const MAX_IMAGES: usize = 50;

pub const IMAGE_MIME_TYPES: [&str; 7] = [
    "image/png",
    "image/jpeg",
    "image/jpg",
    "image/gif",
    "image/webp",
    "image/heic",
    "image/heif",
];

pub const VIDEO_MIME_TYPES: [&str; 3] = ["video/mp4", "video/quicktime", "video/x-h264"];

/// How a batch reached the slot. Filtering is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource {
    Picker,
    DragDrop,
}

/// Where the file's bytes live until submission
#[derive(Debug, Clone, PartialEq)]
pub enum MediaData {
    Bytes(Vec<u8>),
    Path(PathBuf),
}

/// A candidate attachment as handed over by the picker or a drop
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub data: MediaData,
}

impl MediaFile {
    pub fn from_bytes(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            data: MediaData::Bytes(bytes),
        }
    }

    /// Describe a file on disk without reading it; the MIME type comes from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            mime_type: mime_from_extension(path).to_string(),
            size: metadata.len(),
            data: MediaData::Path(path.to_path_buf()),
        })
    }
}

/// Best-effort MIME type for the formats the slots care about
pub fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "h264" => "video/x-h264",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_from_extension(Path::new("a/b/house.JPG")), "image/jpeg");
        assert_eq!(mime_from_extension(Path::new("tour.mov")), "video/quicktime");
        assert_eq!(mime_from_extension(Path::new("plan.pdf")), "application/octet-stream");
        assert_eq!(mime_from_extension(Path::new("noext")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path_reads_size_not_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("front.png");
        tokio::fs::write(&path, vec![0u8; 1234]).await.unwrap();

        let file = MediaFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "front.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size, 1234);
        assert_eq!(file.data, MediaData::Path(path));
    }
}
