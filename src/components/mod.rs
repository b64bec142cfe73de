//! Page-level components for the storefront shell.
//!
//! Generic widgets live in `storefront-ui`; these are tied to this app's
//! routes and launch state.

mod hero;
mod nav_header;
mod newsletter_form;

pub use hero::Hero;
pub use nav_header::NavHeader;
pub use newsletter_form::NewsletterForm;
