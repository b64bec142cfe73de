//! Storefront UI Components
//!
//! Dioxus components shared by the storefront pages and the admin screens.
//!
//! ## Upload slots
//!
//! [`ImageUpload`] is the view over a `storefront_core::UploadWidget`. The
//! core owns the state; the component only mirrors snapshots into signals
//! and forwards successful references to its `on_change` handler.
//!
//! ## Notifications
//!
//! Widgets report through a [`ToastNotifier`], which feeds the
//! [`ToastStack`] rendered once at the app root.

pub mod components;

pub use components::*;
