//! How a selected file becomes an image reference.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::file::SelectedFile;
use crate::error::{UploadError, UploadResult};
use crate::image::ImageReference;

/// Externally supplied upload capability.
///
/// Any timeout belongs to the implementation, not to the widget.
#[async_trait]
pub trait Uploader: Send + Sync {
    /// Send the file somewhere and return a reference to it
    async fn upload(&self, file: &SelectedFile) -> UploadResult<String>;
}

/// Platform file-selection surface
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// `None` when the user dismissed the surface without choosing
    async fn pick(&self) -> Option<SelectedFile>;
}

/// Chosen once when the widget is built
#[derive(Clone)]
pub enum UploadStrategy {
    /// Hand the file to an uploader and adopt the reference it returns
    Remote(Arc<dyn Uploader>),
    /// Inline the file as a data URI; nothing leaves the machine
    LocalPreview,
}

impl UploadStrategy {
    pub fn remote(uploader: impl Uploader + 'static) -> Self {
        UploadStrategy::Remote(Arc::new(uploader))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, UploadStrategy::Remote(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            UploadStrategy::Remote(_) => "remote",
            UploadStrategy::LocalPreview => "local-preview",
        }
    }

    /// Run the strategy for one file
    pub async fn resolve(&self, file: &SelectedFile) -> UploadResult<ImageReference> {
        match self {
            UploadStrategy::Remote(uploader) => {
                let reference = uploader.upload(file).await?;
                if reference.trim().is_empty() {
                    return Err(UploadError::Rejected(
                        "uploader returned an empty reference".to_string(),
                    ));
                }
                Ok(ImageReference::from_remote(reference))
            }
            UploadStrategy::LocalPreview => Ok(ImageReference::DataUri(file.to_data_uri().await?)),
        }
    }
}

impl fmt::Debug for UploadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    #[async_trait]
    impl Uploader for Fixed {
        async fn upload(&self, _file: &SelectedFile) -> UploadResult<String> {
            Ok(self.0.to_string())
        }
    }

    fn png() -> SelectedFile {
        SelectedFile::from_bytes("a.png", "image/png", vec![1, 2, 3])
    }

    #[tokio::test]
    async fn test_remote_adopts_reference() {
        let strategy = UploadStrategy::remote(Fixed("https://cdn.example/img1.png"));
        let reference = strategy.resolve(&png()).await.unwrap();
        assert_eq!(
            reference,
            ImageReference::Url("https://cdn.example/img1.png".to_string())
        );
    }

    #[tokio::test]
    async fn test_remote_blank_reference_is_rejection() {
        let strategy = UploadStrategy::remote(Fixed("  "));
        let err = strategy.resolve(&png()).await.unwrap_err();
        assert!(matches!(err, UploadError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_local_preview_inlines() {
        let reference = UploadStrategy::LocalPreview.resolve(&png()).await.unwrap();
        assert_eq!(reference, ImageReference::DataUri("data:image/png;base64,AQID".to_string()));
    }

    #[test]
    fn test_debug_names() {
        assert_eq!(format!("{:?}", UploadStrategy::LocalPreview), "local-preview");
        assert!(UploadStrategy::remote(Fixed("x")).is_remote());
    }
}
