//! Toast notifications.
//!
//! Upload widgets run outside the Dioxus scope tree, so they report through
//! a channel. [`use_toast_provider`] owns the receiving end and turns each
//! notification into a toast that dismisses itself after [`TOAST_TTL`].

use std::time::Duration;

use dioxus::prelude::*;
use storefront_core::{Notification, NotificationKind, Notifier};
use tokio::sync::mpsc;

use super::button::CloseButton;

pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Oldest toasts are dropped beyond this
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// [`Notifier`] that feeds the toast stack
#[derive(Clone, Debug)]
pub struct ToastNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ToastNotifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            tracing::debug!("toast stack is gone, notification dropped");
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Visible toasts, newest last
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, notification });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let excess = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Provide the toast queue to the tree and return a notifier feeding it.
///
/// Call once, in the root component.
pub fn use_toast_provider() -> ToastNotifier {
    let mut queue = use_signal(ToastQueue::default);
    use_context_provider(|| queue);

    use_hook(move || {
        let (notifier, mut rx) = ToastNotifier::channel();
        spawn(async move {
            while let Some(notification) = rx.recv().await {
                let id = queue.write().push(notification);
                spawn(async move {
                    tokio::time::sleep(TOAST_TTL).await;
                    queue.write().dismiss(id);
                });
            }
        });
        notifier
    })
}

/// Renders the toasts provided by [`use_toast_provider`]
#[component]
pub fn ToastStack() -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();
    let toasts = queue.read().items().to_vec();

    rsx! {
        div { class: "toast-stack", "aria-live": "polite",
            for toast in toasts {
                {
                    let id = toast.id;
                    let kind_class = match toast.notification.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Failure => "toast toast--failure",
                    };
                    rsx! {
                        div { key: "{id}", class: "{kind_class}", role: "status",
                            div { class: "toast__body",
                                strong { class: "toast__title", "{toast.notification.title}" }
                                p { class: "toast__description", "{toast.notification.description}" }
                            }
                            CloseButton { onclick: move |_| queue.write().dismiss(id) }
                        }
                    }
                }
            }
        }
    }
}
