use std::sync::Arc;

use dioxus::prelude::*;
use storefront_ui::{use_toast_provider, ToastStack, UploadServices};

use crate::components::NavHeader;
use crate::context::{use_launch, PendingSearch};
use crate::pages::{Admin, Home};
use crate::picker::RfdPicker;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/?q=...` - Storefront home; the search box keeps `q` in sync
/// - `/admin` - Site image management
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/?:q")]
        Home { q: String },
        #[route("/admin")]
        Admin {},
}

/// Root application component.
///
/// Provides global styles, the toast stack, upload services and routing.
#[component]
pub fn App() -> Element {
    let launch = use_launch();
    let notifier = use_toast_provider();

    let pending_search = use_signal(|| launch.initial_query.clone());
    use_context_provider(|| PendingSearch(pending_search));

    use_context_provider(move || UploadServices {
        strategy: launch.strategy.clone(),
        notifier: Arc::new(notifier.clone()),
        picker: Arc::new(RfdPicker),
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastStack {}
    }
}

/// Header plus the active page
#[component]
fn Shell() -> Element {
    rsx! {
        NavHeader {}
        main { class: "page", Outlet::<Route> {} }
    }
}
