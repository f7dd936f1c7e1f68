//! Field declarations for each form in the app.
//!
//! A page declares its inputs once as a [`FormSchema`]; the `Input` component
//! reads the label, type and constraints from it and the submit gate reads
//! the required set from it.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use super::constraint::{ConstraintError, Constraints, InputType};
use super::rules::CrossFieldRule;

/// Usernames accepted by the backend (Django's `UnicodeUsernameValidator`).
pub const USERNAME_PATTERN: &str = r"[\w.@+-]+";
/// Max length of Django user name fields.
pub const NAME_MAX_LEN: usize = 150;
/// Max length of Django `EmailField`.
pub const EMAIL_MAX_LEN: usize = 254;

/// A single declared input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub constraints: Constraints,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, constraints: Constraints) -> Self {
        Self { name, label, constraints }
    }

    pub fn input_type(&self) -> InputType {
        self.constraints.input_type()
    }

    pub fn is_required(&self) -> bool {
        self.constraints.is_required()
    }
}

/// Ordered inputs of one form plus the rules spanning several of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
    pub rules: Vec<CrossFieldRule>,
}

impl FormSchema {
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_required())
    }
}

fn password(name: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, Constraints::required().with_type(InputType::Password))
}

fn email() -> Result<FieldSpec, ConstraintError> {
    Ok(FieldSpec::new(
        "email",
        "Email",
        Constraints::required()
            .with_type(InputType::Email)
            .with_length(None, Some(EMAIL_MAX_LEN))?,
    ))
}

/// Registration form.
///
/// # Errors
///
/// Returns a [`ConstraintError`] if a declared constraint is malformed.
pub fn signup() -> Result<FormSchema, ConstraintError> {
    let name = || Constraints::required().with_length(None, Some(NAME_MAX_LEN));
    Ok(FormSchema {
        fields: vec![
            FieldSpec::new("first_name", "First name", name()?),
            FieldSpec::new("last_name", "Last name", name()?),
            FieldSpec::new(
                "username",
                "Username",
                Constraints::required()
                    .with_pattern(USERNAME_PATTERN)?
                    .with_length(None, Some(NAME_MAX_LEN))?,
            ),
            email()?,
            password("password", "Password"),
        ],
        rules: Vec::new(),
    })
}

/// Token login form.
///
/// # Errors
///
/// Returns a [`ConstraintError`] if a declared constraint is malformed.
pub fn signin() -> Result<FormSchema, ConstraintError> {
    Ok(FormSchema { fields: vec![email()?, password("password", "Password")], rules: Vec::new() })
}

/// Password change form. The new password must be typed twice.
pub fn change_password() -> FormSchema {
    FormSchema {
        fields: vec![
            password("current_password", "Old password"),
            password("new_password", "New password"),
            password("repeat_password", "Confirm password"),
        ],
        rules: vec![CrossFieldRule::Matches {
            field: "new_password",
            confirm: "repeat_password",
            message: "Passwords do not match.",
        }],
    }
}
