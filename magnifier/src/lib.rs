//! Interaction engine for the product photo magnification viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the interaction logic of the zoom overlay: classifying raw pointer and
//! touch streams into drags and pinches, smoothing the lens position across
//! animation frames, mapping coordinates into image-space percentages, and
//! tracking the document scroll lock the overlay needs to be a safe
//! full-screen surface. The host UI layer is responsible only for wiring
//! DOM events into [`engine::ViewerCore`] and applying the resulting
//! [`engine::Action`]s to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::ViewerCore`] lifecycle orchestration |
//! | [`session`] | Per-overlay session state and platform defaults |
//! | [`gesture`] | Gesture state machine and touch-session tracking |
//! | [`smoothing`] | Exponential-decay lens position smoothing |
//! | [`coords`] | Screen-to-image-percent mapping with clamping |
//! | [`lens`] | Lens placement and background-crop computation |
//! | [`scroll_lock`] | Idempotent document scroll-lock state |
//! | [`events`] | Serializable engagement events |
//! | [`geometry`] | Points, sizes, and rects in CSS pixels |
//! | [`dom`] | `web-sys` event/rect conversions |
//! | [`consts`] | Shared numeric constants (zoom ranges, smoothing, lens size) |

pub mod consts;
pub mod coords;
pub mod dom;
pub mod engine;
pub mod events;
pub mod gesture;
pub mod geometry;
pub mod lens;
pub mod scroll_lock;
pub mod session;
pub mod smoothing;
