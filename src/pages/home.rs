//! Storefront home page.
//!
//! Hero, search, category grid and newsletter signup. The search box and the
//! route's `q` parameter stay in sync in both directions.

use dioxus::prelude::*;
use storefront_core::search::{normalize_query, url_with_query};
use storefront_ui::{default_categories, CategoryGrid, SearchInput};

use crate::app::Route;
use crate::components::{Hero, NewsletterForm};
use crate::context::{load_site_images, use_launch, use_pending_search};

#[component]
pub fn Home(q: String) -> Element {
    let launch = use_launch();
    let navigator = use_navigator();
    let mut pending = use_pending_search().0;
    let mut text = use_signal(|| q.clone());

    // A search passed on the command line opens once, on first mount.
    use_hook(move || {
        if let Some(initial) = pending.take() {
            tracing::info!(query = %initial, "opening initial search");
            navigator.replace(Route::Home { q: initial });
        }
    });

    // Route changed from outside (back/forward, header link): follow it.
    use_effect(use_reactive((&q,), move |(q,)| {
        if normalize_query(&text.peek()) != normalize_query(&q) {
            text.set(q);
        }
    }));

    let images = use_hook(load_site_images);
    let categories: Vec<_> = default_categories()
        .into_iter()
        .map(|mut category| {
            category.image = images
                .category(&category.slug)
                .map(|r| r.as_str().to_string());
            category
        })
        .collect();

    let query = normalize_query(&q);
    let share_link = query
        .as_deref()
        .map(|query| url_with_query(&launch.public_url, Some(query)).to_string());

    rsx! {
        Hero { image: images.hero.clone() }

        section { class: "shop-search",
            SearchInput {
                value: text(),
                oninput: move |value: String| {
                    let q = normalize_query(&value).unwrap_or_default();
                    text.set(value);
                    navigator.replace(Route::Home { q });
                },
            }
            if let Some(link) = share_link {
                p { class: "shop-search__share",
                    "Link to these results: "
                    code { "{link}" }
                }
            }
        }

        h2 { class: "section-header", "Shop by category" }
        CategoryGrid {
            categories,
            query: query.clone(),
            on_select: move |slug: String| {
                navigator.push(Route::Home { q: slug });
            },
        }

        NewsletterForm {}
    }
}
