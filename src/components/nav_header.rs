//! Navigation Header Component
//!
//! Store name on the left, page links on the right, plus a badge when
//! uploads only produce local previews.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_launch;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Shop,
    Admin,
}

impl NavLocation {
    pub const ALL: [NavLocation; 2] = [NavLocation::Shop, NavLocation::Admin];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Shop => "Shop",
            NavLocation::Admin => "Admin",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Shop => Route::Home { q: String::new() },
            NavLocation::Admin => Route::Admin {},
        }
    }

    /// Which location a route belongs to
    pub fn of(route: &Route) -> Self {
        match route {
            Route::Home { .. } => NavLocation::Shop,
            Route::Admin {} => NavLocation::Admin,
        }
    }
}

#[component]
pub fn NavHeader() -> Element {
    let launch = use_launch();
    let current = NavLocation::of(&use_route::<Route>());
    let local_only = !launch.strategy.is_remote();

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-brand", to: Route::Home { q: String::new() }, "Storefront" }

            nav { class: "nav-links",
                for location in NavLocation::ALL {
                    Link {
                        key: "{location.display_name()}",
                        class: if location == current { "nav-link active" } else { "nav-link" },
                        to: location.route(),
                        "{location.display_name()}"
                    }
                }
            }

            if local_only {
                span {
                    class: "nav-badge nav-badge--warning",
                    title: "No backend configured: uploaded images never reach a server",
                    "local preview mode"
                }
            }
        }
    }
}
