//! Upload widget state container.
//!
//! One widget owns one image slot. A session starts when a file is selected
//! and ends when the strategy resolves; the widget is `idle -> in flight ->
//! idle` and rejects a second selection while a session is running.
//!
//! ```ignore
//! let widget = UploadWidget::builder(UploadStrategy::LocalPreview, Arc::new(TracingNotifier))
//!     .aspect_ratio(AspectRatio::WIDE)
//!     .on_change(|reference| tracing::info!(%reference, "hero image changed"))
//!     .build();
//!
//! if widget.trigger() {
//!     let outcome = widget.on_file_selected(picker.pick().await).await;
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn, Instrument};

use super::file::SelectedFile;
use super::notifier::{Notification, Notifier};
use super::strategy::{FilePicker, UploadStrategy};
use crate::error::UploadError;
use crate::image::{AspectRatio, ImageReference};

/// Called once per successful session with the new reference
pub type ChangeListener = Arc<dyn Fn(&ImageReference) + Send + Sync>;

/// Point-in-time view of a widget
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSnapshot {
    pub current: Option<ImageReference>,
    pub in_flight: bool,
    pub disabled: bool,
    pub aspect_ratio: AspectRatio,
    /// Bumped every time a session resolves. Views key their file input on
    /// it so the same file can be picked again.
    pub input_generation: u64,
}

impl WidgetSnapshot {
    pub fn render_state(&self) -> RenderState {
        if self.in_flight {
            RenderState::Uploading {
                previous: self.current.clone(),
            }
        } else {
            match &self.current {
                Some(reference) => RenderState::Populated(reference.clone()),
                None => RenderState::Empty,
            }
        }
    }
}

/// What the view should draw. Uploading wins over the other two.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState {
    Empty,
    Populated(ImageReference),
    Uploading { previous: Option<ImageReference> },
}

/// Why a selection did not start a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    /// A session is already in flight on this widget
    Busy,
    /// The picker was dismissed
    NoSelection,
    /// Zero-byte file
    EmptyFile,
}

/// Result of one selection
#[derive(Debug)]
pub enum SessionOutcome {
    Skipped(SkipReason),
    Succeeded(ImageReference),
    Failed(UploadError),
}

impl SessionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SessionOutcome::Succeeded(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SessionOutcome::Skipped(_))
    }

    pub fn reference(&self) -> Option<&ImageReference> {
        match self {
            SessionOutcome::Succeeded(reference) => Some(reference),
            _ => None,
        }
    }
}

struct Shared {
    strategy: UploadStrategy,
    notifier: Arc<dyn Notifier>,
    on_change: Option<ChangeListener>,
    state: Mutex<WidgetSnapshot>,
    updates: watch::Sender<WidgetSnapshot>,
}

/// Reusable upload-and-preview slot.
///
/// Clones share the same slot; separate `build()` calls are independent.
#[derive(Clone)]
pub struct UploadWidget {
    shared: Arc<Shared>,
}

impl UploadWidget {
    pub fn builder(strategy: UploadStrategy, notifier: Arc<dyn Notifier>) -> UploadWidgetBuilder {
        UploadWidgetBuilder {
            strategy,
            notifier,
            initial: None,
            aspect_ratio: AspectRatio::default(),
            disabled: false,
            on_change: None,
        }
    }

    /// Whether the file-selection surface may open.
    ///
    /// `false` while disabled or while a session is in flight. Has no other
    /// effect.
    pub fn trigger(&self) -> bool {
        match self.blocked_reason() {
            None => true,
            Some(reason) => {
                debug!(?reason, "upload trigger ignored");
                false
            }
        }
    }

    /// Open the picker and run a session for whatever it returns
    pub async fn pick_and_upload(&self, picker: &dyn FilePicker) -> SessionOutcome {
        if let Some(reason) = self.blocked_reason() {
            debug!(?reason, "upload trigger ignored");
            return SessionOutcome::Skipped(reason);
        }
        let file = picker.pick().await;
        self.on_file_selected(file).await
    }

    /// Run one upload session for a selected file.
    ///
    /// Missing or zero-byte selections, a disabled widget and a busy widget
    /// are silent no-ops. Otherwise exactly one notification is emitted and,
    /// on success, the change listener runs once.
    pub async fn on_file_selected(&self, file: Option<SelectedFile>) -> SessionOutcome {
        let Some(file) = file else {
            debug!("no file selected");
            return SessionOutcome::Skipped(SkipReason::NoSelection);
        };
        if file.is_empty() {
            debug!(file = %file.name(), "ignoring empty file");
            return SessionOutcome::Skipped(SkipReason::EmptyFile);
        }

        let session = match self.begin_session() {
            Ok(session) => session,
            Err(reason) => {
                debug!(?reason, file = %file.name(), "selection ignored");
                return SessionOutcome::Skipped(reason);
            }
        };

        let span = tracing::info_span!(
            "upload_session",
            file = %file.name(),
            media_type = %file.media_type(),
            strategy = self.shared.strategy.name(),
        );
        self.run_session(session, file).instrument(span).await
    }

    async fn run_session(&self, session: InFlight<'_>, file: SelectedFile) -> SessionOutcome {
        debug!(size = ?file.size(), "upload session started");

        match self.shared.strategy.resolve(&file).await {
            Ok(reference) => {
                session.finish(Some(reference.clone()));
                info!(%reference, "upload session succeeded");

                let description = if reference.is_inline() {
                    format!("{} is previewed locally.", file.name())
                } else {
                    format!("{} was uploaded.", file.name())
                };
                self.shared
                    .notifier
                    .notify(Notification::success("Image uploaded", description));
                if let Some(listener) = &self.shared.on_change {
                    listener(&reference);
                }
                SessionOutcome::Succeeded(reference)
            }
            Err(err) => {
                session.finish(None);
                warn!(error = %err, "upload session failed");
                self.shared
                    .notifier
                    .notify(Notification::failure("Upload failed", err.to_string()));
                SessionOutcome::Failed(err)
            }
        }
    }

    /// Point the slot at a reference chosen outside the widget, e.g. when
    /// the owner discards its draft. Blank references clear the slot.
    ///
    /// Publishes only when the reference actually changes. A session still
    /// in flight keeps running and its result wins when it resolves.
    pub fn reset(&self, reference: Option<ImageReference>) {
        let reference = reference.filter(ImageReference::is_available);
        let mut state = self.shared.state.lock();
        if state.current == reference {
            return;
        }
        debug!(reference = ?reference, "slot reset");
        state.current = reference;
        self.shared.updates.send_replace(state.clone());
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.update(|state| state.disabled = disabled);
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        self.shared.state.lock().clone()
    }

    pub fn render_state(&self) -> RenderState {
        self.shared.state.lock().render_state()
    }

    pub fn current_reference(&self) -> Option<ImageReference> {
        self.shared.state.lock().current.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.shared.state.lock().in_flight
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.shared.state.lock().aspect_ratio
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<WidgetSnapshot> {
        self.shared.updates.subscribe()
    }

    fn blocked_reason(&self) -> Option<SkipReason> {
        let state = self.shared.state.lock();
        if state.disabled {
            Some(SkipReason::Disabled)
        } else if state.in_flight {
            Some(SkipReason::Busy)
        } else {
            None
        }
    }

    /// Check-and-set of the in-flight flag under one lock
    fn begin_session(&self) -> Result<InFlight<'_>, SkipReason> {
        {
            let mut state = self.shared.state.lock();
            if state.disabled {
                return Err(SkipReason::Disabled);
            }
            if state.in_flight {
                return Err(SkipReason::Busy);
            }
            state.in_flight = true;
            self.shared.updates.send_replace(state.clone());
        }
        Ok(InFlight {
            widget: self,
            armed: true,
        })
    }

    fn end_session(&self, reference: Option<ImageReference>) {
        self.update(|state| {
            if let Some(reference) = reference {
                state.current = Some(reference);
            }
            state.in_flight = false;
            state.input_generation += 1;
        });
    }

    /// Mutate and publish while holding the lock so subscribers never see
    /// snapshots out of order.
    fn update<R>(&self, f: impl FnOnce(&mut WidgetSnapshot) -> R) -> R {
        let mut state = self.shared.state.lock();
        let result = f(&mut state);
        self.shared.updates.send_replace(state.clone());
        result
    }
}

impl fmt::Debug for UploadWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadWidget")
            .field("strategy", &self.shared.strategy)
            .field("state", &*self.shared.state.lock())
            .finish()
    }
}

/// Marks a running session; returns the widget to idle even if the session
/// future is dropped or the uploader panics.
struct InFlight<'a> {
    widget: &'a UploadWidget,
    armed: bool,
}

impl InFlight<'_> {
    fn finish(mut self, reference: Option<ImageReference>) {
        self.armed = false;
        self.widget.end_session(reference);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.widget.end_session(None);
        }
    }
}

pub struct UploadWidgetBuilder {
    strategy: UploadStrategy,
    notifier: Arc<dyn Notifier>,
    initial: Option<ImageReference>,
    aspect_ratio: AspectRatio,
    disabled: bool,
    on_change: Option<ChangeListener>,
}

impl UploadWidgetBuilder {
    /// Seed the slot with an existing reference. Blank references are dropped.
    pub fn initial(mut self, reference: Option<ImageReference>) -> Self {
        self.initial = reference.filter(ImageReference::is_available);
        self
    }

    pub fn aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change(mut self, listener: impl Fn(&ImageReference) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(listener));
        self
    }

    pub fn build(self) -> UploadWidget {
        let snapshot = WidgetSnapshot {
            current: self.initial,
            in_flight: false,
            disabled: self.disabled,
            aspect_ratio: self.aspect_ratio,
            input_generation: 0,
        };
        let (updates, _) = watch::channel(snapshot.clone());

        UploadWidget {
            shared: Arc::new(Shared {
                strategy: self.strategy,
                notifier: self.notifier,
                on_change: self.on_change,
                state: Mutex::new(snapshot),
                updates,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::notifier::{NotificationKind, RecordingNotifier};

    fn local_widget(notifier: &RecordingNotifier) -> UploadWidget {
        UploadWidget::builder(UploadStrategy::LocalPreview, Arc::new(notifier.clone())).build()
    }

    fn png() -> SelectedFile {
        SelectedFile::from_bytes("a.png", "image/png", vec![1, 2, 3])
    }

    #[test]
    fn test_initial_state_is_empty() {
        let widget = local_widget(&RecordingNotifier::new());
        assert_eq!(widget.render_state(), RenderState::Empty);
        assert_eq!(widget.aspect_ratio(), AspectRatio::SQUARE);
        assert!(widget.trigger());
    }

    #[test]
    fn test_blank_initial_reference_dropped() {
        let widget = UploadWidget::builder(UploadStrategy::LocalPreview, Arc::new(RecordingNotifier::new()))
            .initial(Some(ImageReference::Url(String::new())))
            .build();
        assert_eq!(widget.current_reference(), None);
    }

    #[test]
    fn test_render_state_uploading_wins() {
        let snapshot = WidgetSnapshot {
            current: Some(ImageReference::Url("u".to_string())),
            in_flight: true,
            disabled: false,
            aspect_ratio: AspectRatio::SQUARE,
            input_generation: 0,
        };
        assert_eq!(
            snapshot.render_state(),
            RenderState::Uploading {
                previous: Some(ImageReference::Url("u".to_string()))
            }
        );
    }

    #[tokio::test]
    async fn test_local_session_populates() {
        let notifier = RecordingNotifier::new();
        let widget = local_widget(&notifier);

        let outcome = widget.on_file_selected(Some(png())).await;
        assert!(outcome.is_success());
        assert!(matches!(widget.render_state(), RenderState::Populated(ImageReference::DataUri(_))));
        assert_eq!(notifier.count(NotificationKind::Success), 1);
        assert_eq!(widget.snapshot().input_generation, 1);
        assert!(!widget.is_in_flight());
    }

    #[tokio::test]
    async fn test_no_selection_is_silent() {
        let notifier = RecordingNotifier::new();
        let widget = local_widget(&notifier);

        let outcome = widget.on_file_selected(None).await;
        assert!(matches!(outcome, SessionOutcome::Skipped(SkipReason::NoSelection)));

        let empty = SelectedFile::from_bytes("a.png", "image/png", Vec::new());
        let outcome = widget.on_file_selected(Some(empty)).await;
        assert!(matches!(outcome, SessionOutcome::Skipped(SkipReason::EmptyFile)));

        assert!(notifier.is_empty());
        assert_eq!(widget.snapshot().input_generation, 0);
    }

    #[tokio::test]
    async fn test_reset_returns_slot_to_owner_reference() {
        let saved = ImageReference::Url("https://cdn.example/old.png".to_string());
        let notifier = RecordingNotifier::new();
        let widget = UploadWidget::builder(UploadStrategy::LocalPreview, Arc::new(notifier.clone()))
            .initial(Some(saved.clone()))
            .build();

        widget.on_file_selected(Some(png())).await;
        assert!(matches!(widget.current_reference(), Some(ImageReference::DataUri(_))));

        let mut rx = widget.subscribe();
        widget.reset(Some(saved.clone()));
        assert_eq!(widget.render_state(), RenderState::Populated(saved));
        assert!(rx.has_changed().unwrap());

        // No session, no notification, no input reset
        assert_eq!(notifier.count(NotificationKind::Success), 1);
        assert_eq!(widget.snapshot().input_generation, 1);
    }

    #[test]
    fn test_reset_to_same_reference_is_quiet() {
        let saved = ImageReference::Url("https://cdn.example/a.png".to_string());
        let widget = UploadWidget::builder(UploadStrategy::LocalPreview, Arc::new(RecordingNotifier::new()))
            .initial(Some(saved.clone()))
            .build();
        let rx = widget.subscribe();

        widget.reset(Some(saved));
        assert!(!rx.has_changed().unwrap());

        widget.reset(Some(ImageReference::Url("  ".to_string())));
        assert_eq!(widget.render_state(), RenderState::Empty);
        assert!(rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_subscribers_see_final_state() {
        let widget = local_widget(&RecordingNotifier::new());
        let mut rx = widget.subscribe();

        widget.on_file_selected(Some(png())).await;

        assert!(rx.has_changed().unwrap());
        let seen = rx.borrow_and_update().clone();
        assert!(!seen.in_flight);
        assert!(seen.current.is_some());
    }
}
