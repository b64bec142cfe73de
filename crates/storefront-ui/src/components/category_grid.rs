//! Category Grid Component
//!
//! Tiles for the storefront's product categories, filtered by the current
//! search query.

use dioxus::prelude::*;
use storefront_core::search;

/// A product category shown on the home page
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub slug: String,
    pub name: String,
    /// Tile image; falls back to a placeholder
    pub image: Option<String>,
}

impl Category {
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            image: None,
        }
    }
}

/// Categories whose name or slug match the query
pub fn filter_categories(categories: &[Category], query: Option<&str>) -> Vec<Category> {
    categories
        .iter()
        .filter(|c| search::matches(query, &c.name) || search::matches(query, &c.slug))
        .cloned()
        .collect()
}

/// Properties for the CategoryGrid component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryGridProps {
    pub categories: Vec<Category>,
    #[props(default)]
    pub query: Option<String>,
    /// Called with the slug of the clicked tile
    pub on_select: EventHandler<String>,
}

/// Grid of category tiles
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryGrid {
///         categories: default_categories(),
///         query: q(),
///         on_select: move |slug| tracing::info!(%slug, "category opened"),
///     }
/// }
/// ```
#[component]
pub fn CategoryGrid(props: CategoryGridProps) -> Element {
    let visible = filter_categories(&props.categories, props.query.as_deref());

    rsx! {
        section { class: "category-grid", "aria-label": "Shop by category",
            if visible.is_empty() {
                p { class: "category-grid__empty", "No categories match your search." }
            }
            for category in visible {
                {
                    let slug = category.slug.clone();
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{category.slug}",
                            class: "category-tile",
                            onclick: move |_| on_select.call(slug.clone()),
                            if let Some(src) = &category.image {
                                img { class: "category-tile__img", src: "{src}", alt: "{category.name}" }
                            } else {
                                div { class: "category-tile__placeholder" }
                            }
                            span { class: "category-tile__name", "{category.name}" }
                        }
                    }
                }
            }
        }
    }
}

/// Categories the storefront ships with
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("women", "Women"),
        Category::new("men", "Men"),
        Category::new("kids", "Kids"),
        Category::new("accessories", "Accessories"),
        Category::new("shoes", "Shoes"),
        Category::new("sale", "Sale"),
    ]
}
