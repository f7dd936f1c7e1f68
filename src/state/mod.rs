//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `cart`) so individual components can
//! depend on small focused models. The root component wraps each in an
//! `RwSignal` and provides it through context.

pub mod auth;
pub mod cart;
