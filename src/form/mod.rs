//! Client-side form validation.
//!
//! ARCHITECTURE
//! ============
//! `constraint` declares what a single field accepts, `controller` tracks
//! values and validity for a live form, `schema` lists the fields of each
//! form, and `rules` holds cross-field checks plus the submit gate pages
//! call before handing values to `net::api`.

pub mod constraint;
pub mod controller;
pub mod rules;
pub mod schema;

pub use constraint::{Constraint, ConstraintError, Constraints, InputType, Validity};
pub use controller::{FormController, FormValues};
pub use rules::{CrossFieldRule, SubmitRefusal, can_submit, prepare_submit};
pub use schema::{FieldSpec, FormSchema};
