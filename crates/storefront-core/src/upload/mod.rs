//! Generic upload-and-preview widget.
//!
//! The widget is a pure state container plus one optional async call to an
//! injected [`Uploader`]. Without an uploader it falls back to inlining the
//! file as a data URI for local preview.

pub mod file;
pub mod notifier;
pub mod strategy;
pub mod widget;

pub use file::{encode_data_uri, media_type_for_path, FileSource, SelectedFile};
pub use notifier::{Notification, NotificationKind, Notifier, RecordingNotifier, TracingNotifier};
pub use strategy::{FilePicker, UploadStrategy, Uploader};
pub use widget::{
    ChangeListener, RenderState, SessionOutcome, SkipReason, UploadWidget, UploadWidgetBuilder,
    WidgetSnapshot,
};
