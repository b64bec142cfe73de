//! Runtime configuration shared by the desktop shell and headless callers.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::UploadResult;
use crate::http::{BackendConfig, HttpUploader};
use crate::upload::UploadStrategy;

/// File holding the saved site images inside the data directory
pub const SITE_IMAGES_FILE: &str = "site-images.json";

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `None` means local preview only
    pub backend: Option<BackendConfig>,
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl StorefrontConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: None,
            data_dir: data_dir.into(),
            log_filter: "info".to_string(),
        }
    }

    pub fn with_backend(mut self, backend: BackendConfig) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn site_images_path(&self) -> PathBuf {
        self.data_dir.join(SITE_IMAGES_FILE)
    }

    /// Pick the strategy every upload widget in the app will use.
    ///
    /// Without a backend the widgets still "succeed", but images only exist
    /// as inline previews on this machine. That is logged loudly.
    pub fn upload_strategy(&self) -> UploadResult<UploadStrategy> {
        match &self.backend {
            Some(backend) => {
                let uploader = HttpUploader::new(backend)?;
                tracing::info!(endpoint = %uploader.endpoint(), "uploads go to backend");
                Ok(UploadStrategy::Remote(Arc::new(uploader)))
            }
            None => {
                tracing::warn!(
                    "no backend configured: uploaded images stay as local previews and never reach a server"
                );
                Ok(UploadStrategy::LocalPreview)
            }
        }
    }
}
