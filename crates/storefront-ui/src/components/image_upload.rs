//! Image Upload Component
//!
//! View over a core `UploadWidget`: preview frame, uploading overlay and a
//! button that opens the file picker.

use std::sync::Arc;

use dioxus::prelude::*;
use storefront_core::{
    AspectRatio, FilePicker, ImageReference, Notifier, RenderState, SessionOutcome, UploadStrategy,
    UploadWidget, WidgetSnapshot,
};

use super::button::{join_classes, ButtonVariant};

/// Capabilities every upload slot in the app shares.
///
/// Provided once at the root with `use_context_provider`.
#[derive(Clone)]
pub struct UploadServices {
    pub strategy: UploadStrategy,
    pub notifier: Arc<dyn Notifier>,
    pub picker: Arc<dyn FilePicker>,
}

pub fn use_upload_services() -> UploadServices {
    use_context::<UploadServices>()
}

/// Whether the picker button is unusable. `picking` covers the window in
/// which the native dialog is open and no session has started yet.
pub fn picker_blocked(snapshot: &WidgetSnapshot, picking: bool) -> bool {
    snapshot.disabled || snapshot.in_flight || picking
}

/// Label for the picker button in a given state
pub fn button_label(state: &RenderState) -> &'static str {
    match state {
        RenderState::Empty => "Upload image",
        RenderState::Populated(_) => "Replace image",
        RenderState::Uploading { .. } => "Uploading...",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ImageUploadProps {
    /// Slot label, e.g. "Hero image"
    pub label: String,
    /// Reference the slot shows. The slot follows later changes too, so an
    /// owner can roll it back by passing its own value again.
    #[props(default)]
    pub initial: Option<ImageReference>,
    #[props(default)]
    pub aspect_ratio: AspectRatio,
    #[props(default = false)]
    pub disabled: bool,
    /// Called once per successful upload with the new reference
    pub on_change: EventHandler<ImageReference>,
}

/// Upload-and-preview slot
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImageUpload {
///         label: "Hero image".to_string(),
///         aspect_ratio: AspectRatio::WIDE,
///         initial: saved.hero.clone(),
///         on_change: move |reference| draft.write().hero = Some(reference),
///     }
/// }
/// ```
#[component]
pub fn ImageUpload(props: ImageUploadProps) -> Element {
    let services = use_upload_services();

    let widget = use_hook({
        let services = services.clone();
        let initial = props.initial.clone();
        let aspect_ratio = props.aspect_ratio;
        let disabled = props.disabled;
        move || {
            UploadWidget::builder(services.strategy, services.notifier)
                .initial(initial)
                .aspect_ratio(aspect_ratio)
                .disabled(disabled)
                .build()
        }
    });
    let mut snapshot = use_signal(|| widget.snapshot());
    let mut picking = use_signal(|| false);

    // Mirror core state into the signal for the lifetime of the component.
    use_hook({
        let widget = widget.clone();
        move || {
            let mut updates = widget.subscribe();
            spawn(async move {
                while updates.changed().await.is_ok() {
                    let next = updates.borrow_and_update().clone();
                    snapshot.set(next);
                }
            });
        }
    });

    use_effect(use_reactive((&props.disabled,), {
        let widget = widget.clone();
        move |(disabled,)| widget.set_disabled(disabled)
    }));

    use_effect(use_reactive((&props.initial,), {
        let widget = widget.clone();
        move |(initial,)| widget.reset(initial)
    }));

    let on_pick = {
        let widget = widget.clone();
        let picker = services.picker.clone();
        let on_change = props.on_change;
        move |_| {
            if picking() || !widget.trigger() {
                return;
            }
            picking.set(true);
            let widget = widget.clone();
            let picker = picker.clone();
            spawn(async move {
                let outcome = widget.pick_and_upload(picker.as_ref()).await;
                picking.set(false);
                if let SessionOutcome::Succeeded(reference) = outcome {
                    on_change.call(reference);
                }
            });
        }
    };

    let snap = snapshot();
    let state = snap.render_state();
    let label = button_label(&state);
    let frame_style = format!("aspect-ratio: {};", snap.aspect_ratio.css_value());
    let local_only = snap.current.as_ref().is_some_and(ImageReference::is_inline);
    let blocked = picker_blocked(&snap, picking());
    let button_class = join_classes(ButtonVariant::Outline.class(), Some("image-upload-btn"));

    rsx! {
        div { class: "image-upload",
            div { class: "image-upload__header",
                span { class: "image-upload__label", "{props.label}" }
                if local_only {
                    span { class: "image-upload__badge", title: "Not uploaded to a server", "local preview" }
                }
            }

            div { class: "image-upload__frame", style: "{frame_style}",
                {match state {
                    RenderState::Empty => rsx! {
                        div { class: "image-upload__empty", "No image" }
                    },
                    RenderState::Populated(reference) => {
                        let src = reference.as_str().to_string();
                        rsx! {
                            img { class: "image-upload__img", src: "{src}", alt: "{props.label}" }
                        }
                    }
                    RenderState::Uploading { previous } => {
                        let src = previous.map(|r| r.as_str().to_string());
                        rsx! {
                            if let Some(src) = src {
                                img { class: "image-upload__img image-upload__img--dim", src: "{src}", alt: "{props.label}" }
                            }
                            div { class: "image-upload__overlay",
                                div { class: "loading-spinner" }
                                "Uploading..."
                            }
                        }
                    }
                }}
            }

            button {
                class: "{button_class}",
                r#type: "button",
                "data-selection": "{snap.input_generation}",
                disabled: blocked,
                onclick: on_pick,
                "{label}"
            }
        }
    }
}
