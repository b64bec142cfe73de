//! Reusable storefront UI components

mod button;
mod category_grid;
mod image_upload;
mod input;
mod toast;

pub use button::*;
pub use category_grid::*;
pub use image_upload::*;
pub use input::*;
pub use toast::*;
