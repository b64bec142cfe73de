//! Newsletter signup form.

use dioxus::prelude::*;
use storefront_core::{EmailAddress, Notification};
use storefront_ui::{use_upload_services, Button, ButtonVariant, Input};

use crate::context::use_launch;

#[component]
pub fn NewsletterForm() -> Element {
    let launch = use_launch();
    let services = use_upload_services();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        let address = match EmailAddress::parse(&email()) {
            Ok(address) => address,
            Err(_) => {
                error.set(Some("Please enter a valid email address.".to_string()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);

        let notifier = services.notifier.clone();
        spawn(async move {
            match launch.newsletter.subscribe(&address).await {
                Ok(()) => {
                    email.set(String::new());
                    notifier.notify(Notification::success(
                        "Subscribed",
                        format!("We'll send news to {}.", address),
                    ));
                }
                Err(e) => {
                    tracing::warn!("Newsletter signup failed: {}", e);
                    notifier.notify(Notification::failure("Subscription failed", e.to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        section { class: "newsletter",
            h2 { class: "section-header", "Join the newsletter" }
            p { class: "body-text", "Early access to sales and new collections. No spam." }
            div { class: "newsletter__row",
                Input {
                    value: email(),
                    oninput: move |s: String| email.set(s),
                    input_type: "email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    error: error(),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    busy: submitting(),
                    onclick: submit,
                    "Subscribe"
                }
            }
        }
    }
}
