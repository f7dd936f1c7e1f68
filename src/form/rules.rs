//! Cross-field rules and the submit gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call [`prepare_submit`] from their submit handler. It is the only
//! place that turns controller state into values for the API client, and it
//! refuses (without side effects) when any per-field, required-field or
//! cross-field check fails.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use super::controller::{FormController, FormValues};
use super::schema::FormSchema;

/// A validation rule spanning two or more fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossFieldRule {
    /// `confirm` must hold exactly the same value as `field`.
    Matches { field: &'static str, confirm: &'static str, message: &'static str },
}

impl CrossFieldRule {
    /// Check the rule against current values, returning its message on failure.
    pub fn check(&self, values: &FormValues) -> Result<(), &'static str> {
        match self {
            Self::Matches { field, confirm, message } => {
                if values.get(*field) == values.get(*confirm) {
                    Ok(())
                } else {
                    Err(*message)
                }
            }
        }
    }
}

/// Why a submit was refused before reaching the API client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRefusal {
    #[error("fix the highlighted fields: {}", .0.join(", "))]
    InvalidFields(Vec<String>),
    #[error("required fields are missing: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
    #[error("{0}")]
    RuleViolated(&'static str),
}

/// Whether the submit button should be enabled.
///
/// Mirrors what the user can see: every touched field valid and every
/// cross-field rule satisfied.
pub fn can_submit(form: &FormController, schema: &FormSchema) -> bool {
    form.is_valid() && schema.rules.iter().all(|r| r.check(form.values()).is_ok())
}

/// Run every precondition and hand back the values to send.
///
/// Checks in order: per-field validity, required fields never touched, then
/// cross-field rules.
///
/// # Errors
///
/// Returns the first [`SubmitRefusal`] that applies.
pub fn prepare_submit(form: &FormController, schema: &FormSchema) -> Result<FormValues, SubmitRefusal> {
    if !form.is_valid() {
        let fields = form.invalid_fields().into_iter().map(str::to_owned).collect();
        return Err(SubmitRefusal::InvalidFields(fields));
    }

    let missing: Vec<String> = schema
        .required_fields()
        .filter(|f| !form.is_touched(f.name))
        .map(|f| f.name.to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(SubmitRefusal::MissingRequired(missing));
    }

    for rule in &schema.rules {
        rule.check(form.values()).map_err(SubmitRefusal::RuleViolated)?;
    }

    Ok(form.values().clone())
}
