//! Hero banner at the top of the storefront.

use dioxus::prelude::*;
use storefront_core::ImageReference;

use crate::app::Route;

#[component]
pub fn Hero(image: Option<ImageReference>) -> Element {
    let background = match &image {
        Some(reference) => format!("background-image: url(\"{}\");", reference.as_str()),
        None => String::new(),
    };

    rsx! {
        section { class: "hero", style: "{background}",
            div { class: "hero__content",
                h1 { class: "hero__title", "New season, new favourites" }
                p { class: "hero__tagline", "Fresh arrivals across every category, shipped free over $50." }
                Link { class: "btn btn-primary", to: Route::Home { q: "new".to_string() }, "Shop new arrivals" }
            }
        }
    }
}
