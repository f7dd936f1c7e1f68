//! Networking modules for the foodgram REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! by requests, responses and the pages that render them.

pub mod api;
pub mod types;
