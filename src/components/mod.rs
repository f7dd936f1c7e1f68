//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls while reading/writing
//! shared state from Leptos context providers.

pub mod account_menu;
pub mod form_input;
pub mod header;
pub mod purchase_list;
pub mod recipe_card;
