//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`product`, `viewer`) so individual components
//! can depend on small focused models. The viewer state is a plain mirror
//! of the `magnifier` engine, refreshed whenever the engine asks for a
//! render; components read it reactively, the engine stays the single
//! source of truth.

pub mod product;
pub mod viewer;
