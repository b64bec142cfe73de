//! Files handed to the widget by a picker.

use std::path::{Path, PathBuf};

use base64::Engine;
use bytes::Bytes;
use ::image::ImageFormat;

use crate::error::UploadResult;

/// Media type used when nothing better is known
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Where the file's bytes live
#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    /// On disk, read lazily when the session runs
    Path(PathBuf),
    /// Already in memory (drag and drop, tests)
    Memory(Bytes),
}

/// A binary blob with a declared media type
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    size: Option<u64>,
    source: FileSource,
}

impl SelectedFile {
    pub fn from_bytes(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size: Some(bytes.len() as u64),
            source: FileSource::Memory(bytes),
        }
    }

    /// Describe a file on disk.
    ///
    /// The size comes from the file metadata when it can be read. An
    /// unreadable path is still accepted here; the failure surfaces when the
    /// session reads it.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let size = std::fs::metadata(&path).ok().map(|m| m.len());

        Self {
            name,
            media_type: media_type_for_path(&path).to_string(),
            size,
            source: FileSource::Path(path),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Size in bytes, if known before reading
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// Known to contain zero bytes
    pub fn is_empty(&self) -> bool {
        self.size == Some(0)
    }

    /// Load the file contents
    pub async fn read(&self) -> UploadResult<Bytes> {
        match &self.source {
            FileSource::Memory(bytes) => Ok(bytes.clone()),
            FileSource::Path(path) => Ok(Bytes::from(tokio::fs::read(path).await?)),
        }
    }

    /// Read the file into a `data:<media-type>;base64,...` string
    pub async fn to_data_uri(&self) -> UploadResult<String> {
        let bytes = self.read().await?;
        Ok(encode_data_uri(&self.media_type, &bytes))
    }
}

/// Encode raw bytes as a base64 data URI
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    let media_type = if media_type.trim().is_empty() {
        FALLBACK_MEDIA_TYPE
    } else {
        media_type
    };
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", media_type, payload)
}

/// Guess the media type from the file extension
pub fn media_type_for_path(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MEDIA_TYPE)
}
