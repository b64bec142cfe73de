//! Native file picker for upload slots.

use async_trait::async_trait;
use rfd::FileDialog;
use storefront_core::{FilePicker, SelectedFile};

/// Extensions offered in the image picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Opens the platform file dialog filtered to images
#[derive(Debug, Default, Clone, Copy)]
pub struct RfdPicker;

#[async_trait]
impl FilePicker for RfdPicker {
    async fn pick(&self) -> Option<SelectedFile> {
        // Blocking dialog, kept off the UI thread
        let picked = tokio::task::spawn_blocking(|| {
            FileDialog::new()
                .add_filter("images", IMAGE_EXTENSIONS)
                .set_title("Select Image")
                .pick_file()
        })
        .await;

        match picked {
            Ok(Some(path)) => Some(SelectedFile::from_path(path)),
            Ok(None) => None,
            Err(e) => {
                tracing::error!("File picker error: {:?}", e);
                None
            }
        }
    }
}
