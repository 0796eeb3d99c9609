//! UI components for the product photo experience.

pub mod magnifier_overlay;
pub mod preview_pane;
pub mod product_gallery;
pub mod zoom_controls;
