//! Page-level components.

pub mod product;
