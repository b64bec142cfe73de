//! Admin page - site image management.
//!
//! Every slot is an independent upload widget. Results collect in a draft
//! and are only written when the user presses Save. Slots show the draft,
//! so Discard rolls them back along with it.

use dioxus::prelude::*;
use storefront_core::{AspectRatio, ImageReference, Notification, SiteImages};
use storefront_ui::{default_categories, use_upload_services, Button, ButtonVariant, ImageUpload};

use crate::context::{load_site_images, site_images_path};

#[component]
pub fn Admin() -> Element {
    let services = use_upload_services();
    // Last state known to be on disk
    let mut saved = use_signal(load_site_images);
    let mut draft = use_signal(|| saved());
    let mut saving = use_signal(|| false);

    let current: SiteImages = draft();
    let dirty = current != *saved.read();
    let inline_count = current.inline_count();
    let remote = services.strategy.is_remote();

    let save = move |_| {
        let images: SiteImages = draft();
        let notifier = services.notifier.clone();
        saving.set(true);

        spawn(async move {
            let path = site_images_path();
            let written = images.clone();
            let result = tokio::task::spawn_blocking(move || written.save(&path)).await;
            match result {
                Ok(Ok(())) => {
                    saved.set(images);
                    notifier.notify(Notification::success("Changes saved", "Site images updated."));
                }
                Ok(Err(e)) => {
                    tracing::error!("Failed to save site images: {}", e);
                    notifier.notify(Notification::failure("Save failed", e.to_string()));
                }
                Err(e) => {
                    tracing::error!("Save task failed: {:?}", e);
                    notifier.notify(Notification::failure("Save failed", "Internal error."));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "admin",
            header { class: "admin__header",
                h1 { class: "page-title", "Site images" }
                if !remote {
                    p { class: "admin__notice",
                        "No backend is configured. Images are kept as inline previews "
                        "and saved only on this machine."
                    }
                } else if inline_count > 0 {
                    p { class: "admin__notice",
                        "{inline_count} image(s) are local previews and have not been uploaded."
                    }
                }
            }

            section { class: "admin__section",
                h2 { class: "section-header", "Hero" }
                ImageUpload {
                    label: "Hero image".to_string(),
                    aspect_ratio: AspectRatio::WIDE,
                    initial: current.hero.clone(),
                    on_change: move |reference: ImageReference| draft.write().hero = Some(reference),
                }
            }

            section { class: "admin__section",
                h2 { class: "section-header", "Categories" }
                div { class: "admin__grid",
                    for category in default_categories() {
                        {
                            let slug = category.slug.clone();
                            let initial = current.category(&slug).cloned();
                            rsx! {
                                ImageUpload {
                                    key: "{category.slug}",
                                    label: category.name.clone(),
                                    initial,
                                    on_change: move |reference: ImageReference| draft.write().set_category(slug.clone(), reference),
                                }
                            }
                        }
                    }
                }
            }

            div { class: "admin__actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: !dirty || saving(),
                    onclick: move |_| draft.set(saved()),
                    "Discard"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !dirty,
                    busy: saving(),
                    onclick: save,
                    "Save changes"
                }
            }
        }
    }
}
