//! Upload widget integration tests
//!
//! Drive whole sessions through the public API with in-process uploaders
//! and check the notification, change-listener and state contracts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use storefront_core::{
    FilePicker, ImageReference, NotificationKind, RecordingNotifier, RenderState, SelectedFile,
    SessionOutcome, SkipReason, UploadError, UploadResult, UploadStrategy, UploadWidget, Uploader,
};
use tokio::sync::Semaphore;

// ============================================================================
// Test Utilities
// ============================================================================

/// Resolves with a fixed reference
struct FixedUploader(&'static str);

#[async_trait]
impl Uploader for FixedUploader {
    async fn upload(&self, _file: &SelectedFile) -> UploadResult<String> {
        Ok(self.0.to_string())
    }
}

/// Always rejects
struct RejectingUploader;

#[async_trait]
impl Uploader for RejectingUploader {
    async fn upload(&self, _file: &SelectedFile) -> UploadResult<String> {
        Err(UploadError::Rejected("storage quota exceeded".to_string()))
    }
}

/// Holds every upload until a permit is released
struct GatedUploader {
    gate: Arc<Semaphore>,
}

#[async_trait]
impl Uploader for GatedUploader {
    async fn upload(&self, file: &SelectedFile) -> UploadResult<String> {
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| UploadError::Rejected(e.to_string()))?;
        Ok(format!("https://cdn.example/{}", file.name()))
    }
}

struct PanickingUploader;

#[async_trait]
impl Uploader for PanickingUploader {
    async fn upload(&self, _file: &SelectedFile) -> UploadResult<String> {
        panic!("uploader blew up");
    }
}

/// Picker that always returns the same file
struct StaticPicker(Option<SelectedFile>);

#[async_trait]
impl FilePicker for StaticPicker {
    async fn pick(&self) -> Option<SelectedFile> {
        self.0.clone()
    }
}

/// Records every reference passed to the change listener
#[derive(Clone, Default)]
struct ChangeLog(Arc<Mutex<Vec<ImageReference>>>);

impl ChangeLog {
    fn calls(&self) -> Vec<ImageReference> {
        self.0.lock().clone()
    }
}

fn png(name: &str) -> SelectedFile {
    SelectedFile::from_bytes(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}

fn widget_with(
    strategy: UploadStrategy,
    notifier: &RecordingNotifier,
    changes: &ChangeLog,
) -> UploadWidget {
    let changes = changes.clone();
    UploadWidget::builder(strategy, Arc::new(notifier.clone()))
        .on_change(move |reference| changes.0.lock().push(reference.clone()))
        .build()
}

// ============================================================================
// Strategy Outcomes
// ============================================================================

/// Without an uploader a valid file becomes a non-empty inline reference
#[tokio::test]
async fn test_local_preview_inlines_file() {
    let notifier = RecordingNotifier::new();
    let changes = ChangeLog::default();
    let widget = widget_with(UploadStrategy::LocalPreview, &notifier, &changes);

    let outcome = widget.on_file_selected(Some(png("hero.png"))).await;

    let reference = widget.current_reference().expect("reference set");
    assert!(reference.is_inline());
    assert!(reference.as_str().starts_with("data:image/png;base64,"));
    assert!(reference.as_str().len() > "data:image/png;base64,".len());
    assert_eq!(outcome.reference(), Some(&reference));
    assert_eq!(notifier.count(NotificationKind::Success), 1);
    assert_eq!(notifier.notifications().len(), 1);
    assert_eq!(changes.calls(), vec![reference]);
}

/// A resolving uploader's reference is adopted and reported once
#[tokio::test]
async fn test_remote_reference_adopted() {
    let notifier = RecordingNotifier::new();
    let changes = ChangeLog::default();
    let widget = widget_with(
        UploadStrategy::remote(FixedUploader("https://cdn.example/img1.png")),
        &notifier,
        &changes,
    );

    widget.on_file_selected(Some(png("img1.png"))).await;

    let expected = ImageReference::Url("https://cdn.example/img1.png".to_string());
    assert_eq!(widget.current_reference(), Some(expected.clone()));
    assert_eq!(changes.calls(), vec![expected.clone()]);
    assert_eq!(widget.render_state(), RenderState::Populated(expected));
    assert_eq!(notifier.count(NotificationKind::Success), 1);
}

/// A rejection keeps the previous reference and emits one failure
#[tokio::test]
async fn test_rejection_preserves_reference() {
    let notifier = RecordingNotifier::new();
    let changes = ChangeLog::default();
    let before = ImageReference::Url("https://cdn.example/old.png".to_string());
    let widget = UploadWidget::builder(UploadStrategy::remote(RejectingUploader), Arc::new(notifier.clone()))
        .initial(Some(before.clone()))
        .build();

    let outcome = widget.on_file_selected(Some(png("new.png"))).await;

    assert!(matches!(outcome, SessionOutcome::Failed(UploadError::Rejected(_))));
    assert_eq!(widget.current_reference(), Some(before));
    assert_eq!(notifier.count(NotificationKind::Failure), 1);
    assert_eq!(notifier.count(NotificationKind::Success), 0);
    assert!(notifier.notifications()[0].description.contains("quota"));
    assert!(changes.calls().is_empty());

    // Recoverable: the widget is idle and can be triggered again right away.
    assert!(widget.trigger());
    assert!(!widget.is_in_flight());
}

/// An unreadable local file is handled like a rejection
#[tokio::test]
async fn test_local_read_failure() {
    let notifier = RecordingNotifier::new();
    let changes = ChangeLog::default();
    let widget = widget_with(UploadStrategy::LocalPreview, &notifier, &changes);
    let temp = tempfile::TempDir::new().unwrap();

    let outcome = widget
        .on_file_selected(Some(SelectedFile::from_path(temp.path().join("deleted.png"))))
        .await;

    assert!(matches!(outcome, SessionOutcome::Failed(UploadError::LocalRead(_))));
    assert_eq!(widget.current_reference(), None);
    assert_eq!(notifier.count(NotificationKind::Failure), 1);
    assert!(changes.calls().is_empty());
    assert_eq!(widget.snapshot().input_generation, 1);
}

// ============================================================================
// Session Lifecycle
// ============================================================================

/// Picking the same file twice runs two independent sessions
#[tokio::test]
async fn test_same_file_twice() {
    let notifier = RecordingNotifier::new();
    let changes = ChangeLog::default();
    let widget = widget_with(UploadStrategy::LocalPreview, &notifier, &changes);
    let file = png("same.png");

    assert!(widget.on_file_selected(Some(file.clone())).await.is_success());
    assert!(widget.on_file_selected(Some(file)).await.is_success());

    assert_eq!(changes.calls().len(), 2);
    assert_eq!(notifier.count(NotificationKind::Success), 2);
    assert_eq!(widget.snapshot().input_generation, 2);
}

/// A second selection while in flight is rejected without side effects
#[tokio::test]
async fn test_no_overlapping_sessions() {
    let gate = Arc::new(Semaphore::new(0));
    let notifier = RecordingNotifier::new();
    let changes = ChangeLog::default();
    let widget = widget_with(
        UploadStrategy::remote(GatedUploader { gate: gate.clone() }),
        &notifier,
        &changes,
    );

    let first = tokio::spawn({
        let widget = widget.clone();
        async move { widget.on_file_selected(Some(png("first.png"))).await }
    });

    let mut updates = widget.subscribe();
    updates.wait_for(|s| s.in_flight).await.unwrap();
    assert!(matches!(widget.render_state(), RenderState::Uploading { previous: None }));

    assert!(!widget.trigger());
    let second = widget.on_file_selected(Some(png("second.png"))).await;
    assert!(matches!(second, SessionOutcome::Skipped(SkipReason::Busy)));
    assert!(notifier.is_empty());

    gate.add_permits(1);
    let first = first.await.unwrap();
    assert_eq!(
        first.reference(),
        Some(&ImageReference::Url("https://cdn.example/first.png".to_string()))
    );
    assert_eq!(changes.calls().len(), 1);
    assert!(widget.trigger());
}

/// Separate widgets never block each other
#[tokio::test]
async fn test_independent_widgets_run_concurrently() {
    let gate = Arc::new(Semaphore::new(0));
    let notifier = RecordingNotifier::new();
    let strategy = UploadStrategy::remote(GatedUploader { gate: gate.clone() });
    let slots: Vec<UploadWidget> = (0..3)
        .map(|_| UploadWidget::builder(strategy.clone(), Arc::new(notifier.clone())).build())
        .collect();

    let tasks: Vec<_> = slots
        .iter()
        .enumerate()
        .map(|(i, widget)| {
            let widget = widget.clone();
            tokio::spawn(async move { widget.on_file_selected(Some(png(&format!("slot{}.png", i)))).await })
        })
        .collect();

    for widget in &slots {
        widget.subscribe().wait_for(|s| s.in_flight).await.unwrap();
    }
    assert!(slots.iter().all(|w| w.is_in_flight()));

    gate.add_permits(3);
    for task in futures::future::join_all(tasks).await {
        assert!(task.unwrap().is_success());
    }
    assert_eq!(notifier.count(NotificationKind::Success), 3);
}

/// Disabled widgets ignore triggers and selections entirely
#[tokio::test]
async fn test_disabled_has_no_effect() {
    let notifier = RecordingNotifier::new();
    let changes = ChangeLog::default();
    let widget = UploadWidget::builder(UploadStrategy::LocalPreview, Arc::new(notifier.clone()))
        .disabled(true)
        .build();
    let before = widget.snapshot();

    assert!(!widget.trigger());
    let outcome = widget.on_file_selected(Some(png("a.png"))).await;
    assert!(matches!(outcome, SessionOutcome::Skipped(SkipReason::Disabled)));

    let picked = widget.pick_and_upload(&StaticPicker(Some(png("b.png")))).await;
    assert!(matches!(picked, SessionOutcome::Skipped(SkipReason::Disabled)));

    assert_eq!(widget.snapshot(), before);
    assert!(notifier.is_empty());
    assert!(changes.calls().is_empty());

    widget.set_disabled(false);
    assert!(widget.trigger());
}

/// Dismissing the picker is a silent no-op
#[tokio::test]
async fn test_picker_dismissed() {
    let notifier = RecordingNotifier::new();
    let widget = UploadWidget::builder(UploadStrategy::LocalPreview, Arc::new(notifier.clone())).build();

    let outcome = widget.pick_and_upload(&StaticPicker(None)).await;
    assert!(matches!(outcome, SessionOutcome::Skipped(SkipReason::NoSelection)));
    assert!(notifier.is_empty());

    let outcome = widget.pick_and_upload(&StaticPicker(Some(png("p.png")))).await;
    assert!(outcome.is_success());
}

/// A panicking uploader still leaves the widget idle
#[tokio::test]
async fn test_panicking_uploader_releases_session() {
    let widget = UploadWidget::builder(
        UploadStrategy::remote(PanickingUploader),
        Arc::new(RecordingNotifier::new()),
    )
    .build();

    let task = tokio::spawn({
        let widget = widget.clone();
        async move { widget.on_file_selected(Some(png("boom.png"))).await }
    });
    assert!(task.await.unwrap_err().is_panic());

    assert!(!widget.is_in_flight());
    assert!(widget.trigger());
    assert_eq!(widget.current_reference(), None);
}

/// Dropping a session future mid-flight returns the widget to idle
#[tokio::test]
async fn test_dropped_session_releases() {
    let gate = Arc::new(Semaphore::new(0));
    let widget = UploadWidget::builder(
        UploadStrategy::remote(GatedUploader { gate }),
        Arc::new(RecordingNotifier::new()),
    )
    .build();

    let result = tokio::time::timeout(
        Duration::from_millis(20),
        widget.on_file_selected(Some(png("slow.png"))),
    )
    .await;
    assert!(result.is_err());
    assert!(!widget.is_in_flight());
}

/// The change listener runs after state is updated, so it can read the widget
#[tokio::test]
async fn test_listener_sees_updated_state() {
    let seen = Arc::new(AtomicUsize::new(0));
    let slot: Arc<Mutex<Option<UploadWidget>>> = Arc::new(Mutex::new(None));

    let widget = UploadWidget::builder(UploadStrategy::LocalPreview, Arc::new(RecordingNotifier::new()))
        .on_change({
            let seen = seen.clone();
            let slot = slot.clone();
            move |reference| {
                if let Some(widget) = slot.lock().as_ref() {
                    assert_eq!(widget.current_reference().as_ref(), Some(reference));
                    assert!(!widget.is_in_flight());
                }
                seen.fetch_add(1, Ordering::SeqCst);
            }
        })
        .build();
    *slot.lock() = Some(widget.clone());

    widget.on_file_selected(Some(png("a.png"))).await;
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}
