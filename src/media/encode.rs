use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use super::types::{MediaData, MediaFile};
use crate::error::MediaError;

/// Inline a file as a `data:<mime>;base64,...` string
pub async fn to_data_url(file: &MediaFile) -> Result<String, MediaError> {
    let encoded = match &file.data {
        MediaData::Bytes(bytes) => STANDARD.encode(bytes),
        MediaData::Path(path) => {
            let bytes = tokio::fs::read(path).await.map_err(|e| MediaError::Encoding {
                name: file.name.clone(),
                reason: e.to_string(),
            })?;
            STANDARD.encode(bytes)
        }
    };
    debug!("Encoded {} ({} bytes)", file.name, file.size);
    Ok(format!("data:{};base64,{}", file.mime_type, encoded))
}

/// Encode every image and the optional video. Any failure fails the whole set.
pub async fn encode_all<'a, I>(
    images: I,
    video: Option<&MediaFile>,
) -> Result<(Vec<String>, Option<String>), MediaError>
where
    I: IntoIterator<Item = &'a MediaFile>,
{
    let mut encoded_images = Vec::new();
    for image in images {
        encoded_images.push(to_data_url(image).await?);
    }

    let encoded_video = match video {
        Some(video) => Some(to_data_url(video).await?),
        None => None,
    };

    Ok((encoded_images, encoded_video))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_bytes_become_data_url() {
        let file = MediaFile::from_bytes("dot.png", "image/png", b"hello".to_vec());
        let url = to_data_url(&file).await.unwrap();
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn test_one_unreadable_file_fails_the_set() {
        let good = MediaFile::from_bytes("a.jpg", "image/jpeg", vec![1, 2, 3]);
        let missing = MediaFile {
            name: "gone.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            size: 10,
            data: MediaData::Path(PathBuf::from("/definitely/not/here/gone.jpg")),
        };

        let result = encode_all([&good, &missing], None).await;
        match result {
            Err(MediaError::Encoding { name, .. }) => assert_eq!(name, "gone.jpg"),
            other => panic!("expected encoding error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_encode_all_keeps_order() {
        let a = MediaFile::from_bytes("a.png", "image/png", vec![0]);
        let b = MediaFile::from_bytes("b.png", "image/png", vec![1]);
        let video = MediaFile::from_bytes("tour.mp4", "video/mp4", vec![2]);

        let (images, video) = encode_all([&a, &b], Some(&video)).await.unwrap();
        assert_eq!(images, vec!["data:image/png;base64,AA==", "data:image/png;base64,AQ=="]);
        assert_eq!(video.as_deref(), Some("data:video/mp4;base64,Ag=="));
    }
}
