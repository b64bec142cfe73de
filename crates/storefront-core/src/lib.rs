//! Storefront Core Library
//!
//! UI-free pieces of the storefront admin: the reusable image upload widget,
//! the uploaders it can be wired to, and the small bits of state the
//! storefront pages keep (saved site images, search query, newsletter).
//!
//! ## Overview
//!
//! Every admin image slot is an [`UploadWidget`]. It owns the slot's
//! current reference and an in-flight flag, runs at most one upload session
//! at a time, and reports through an injected [`Notifier`]. The strategy is
//! fixed at construction:
//!
//! - **Remote**: hand the file to an [`Uploader`] (usually [`HttpUploader`])
//!   and adopt the URL it returns
//! - **LocalPreview**: inline the file as a base64 data URI
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront_core::{SelectedFile, StorefrontConfig, TracingNotifier, UploadWidget};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StorefrontConfig::new("./data");
//!     let widget = UploadWidget::builder(config.upload_strategy()?, Arc::new(TracingNotifier))
//!         .on_change(|reference| println!("new image: {}", reference))
//!         .build();
//!
//!     let file = SelectedFile::from_path("hero.png");
//!     widget.on_file_selected(Some(file)).await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod image;
pub mod newsletter;
pub mod search;
pub mod site;
pub mod upload;

// Re-exports
pub use config::StorefrontConfig;
pub use error::{NewsletterError, SiteError, UploadError, UploadResult};
pub use http::{BackendConfig, HttpUploader};
pub use image::{AspectRatio, ImageReference};
pub use newsletter::{EmailAddress, NewsletterClient};
pub use site::SiteImages;
pub use upload::{
    FilePicker, Notification, NotificationKind, Notifier, RecordingNotifier, RenderState,
    SelectedFile, SessionOutcome, SkipReason, TracingNotifier, UploadStrategy, UploadWidget,
    Uploader, WidgetSnapshot,
};
