//! Shared application state for the storefront shell.
//!
//! Launch state is resolved once in `main`; components reach it through
//! [`use_launch`]. Upload capabilities are handed to the UI crate through
//! its `UploadServices` context.

use std::path::PathBuf;

use dioxus::prelude::*;
use storefront_core::search::Url;
use storefront_core::{NewsletterClient, SiteImages, StorefrontConfig, UploadStrategy};

/// Resolved command line and the services built from it
#[derive(Debug)]
pub struct Launch {
    pub config: StorefrontConfig,
    pub strategy: UploadStrategy,
    pub newsletter: NewsletterClient,
    /// Base for shareable search links
    pub public_url: Url,
    /// Search to open the home page with
    pub initial_query: Option<String>,
}

/// Hook to access the launch state
pub fn use_launch() -> &'static Launch {
    crate::get_launch()
}

pub fn site_images_path() -> PathBuf {
    crate::get_launch().config.site_images_path()
}

/// Load saved site images, falling back to empty on any error
pub fn load_site_images() -> SiteImages {
    let path = site_images_path();
    SiteImages::load(&path).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "Failed to load site images: {}", e);
        SiteImages::default()
    })
}

/// Search handed over from the command line, consumed by the first home
/// page mount.
#[derive(Clone, Copy)]
pub struct PendingSearch(pub Signal<Option<String>>);

pub fn use_pending_search() -> PendingSearch {
    use_context::<PendingSearch>()
}
