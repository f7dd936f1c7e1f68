//! Form validation controller.
//!
//! DESIGN
//! ======
//! The controller owns two maps keyed by field name: raw values and the
//! validity derived from them. Both are written together inside
//! [`FormController::handle_change`], so their key sets never diverge, and
//! both are replaced together by [`FormController::reset`]. Overall form
//! validity is computed on read and has no stored copy.
//!
//! Fields that were never changed have no entry and count as valid, so an
//! untouched optional field never blocks submission. Whether untouched
//! *required* fields block an explicit submit is decided by the submit gate
//! in `form::rules`, not here.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::BTreeMap;

use super::constraint::{Constraints, Validity};

/// Current field values keyed by field name.
pub type FormValues = BTreeMap<String, String>;

/// Per-field validity keyed by field name.
type ValidityMap = BTreeMap<String, Validity>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormController {
    values: FormValues,
    validity: ValidityMap,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new raw value for `name` and recompute its validity.
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>, constraints: &Constraints) {
        let value = value.into();
        let validity = constraints.check(&value);
        log::debug!("field `{name}` changed: valid={} ({constraints})", validity.valid);
        self.values.insert(name.to_owned(), value);
        self.validity.insert(name.to_owned(), validity);
    }

    /// Clear every tracked field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Validation message for `name`, if the field is touched and invalid.
    pub fn message(&self, name: &str) -> Option<&str> {
        self.validity
            .get(name)
            .filter(|v| !v.valid)
            .map(|v| v.message.as_str())
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.validity.contains_key(name)
    }

    /// Aggregate validity: true iff every touched field is valid.
    pub fn is_valid(&self) -> bool {
        self.validity.values().all(|v| v.valid)
    }

    /// Names of touched fields that are currently invalid, in name order.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.validity
            .iter()
            .filter(|(_, v)| !v.valid)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
