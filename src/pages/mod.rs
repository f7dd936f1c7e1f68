//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page maps to one router path in `app.rs`. Guest-only pages (sign in,
//! sign up) redirect signed-in visitors; member pages install the
//! unauthenticated redirect.

pub mod cart;
pub mod change_password;
pub mod recipes;
pub mod signin;
pub mod signup;
