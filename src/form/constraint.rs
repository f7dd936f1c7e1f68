//! Declarative per-field constraints and the validity check that reads them.
//!
//! DESIGN
//! ======
//! Each input declares an ordered list of [`Constraint`] variants, the same
//! set a browser derives from `required`, `type`, `pattern`, `minlength` and
//! `maxlength` attributes. Checking dispatches exhaustively over the variants
//! so adding a new kind of constraint is a compile error until every check
//! site handles it.
//!
//! ERROR HANDLING
//! ==============
//! Invalid *input* is never an error: it becomes a [`Validity`] with a
//! message. Invalid *declarations* (a pattern that does not compile, length
//! bounds that cannot both hold) are rejected by the constructors with a
//! [`ConstraintError`].

#[cfg(test)]
#[path = "constraint_test.rs"]
mod constraint_test;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub const MSG_REQUIRED: &str = "Please fill out this field.";
pub const MSG_EMAIL: &str = "Please enter an email address.";
pub const MSG_NUMBER: &str = "Please enter a number.";
pub const MSG_URL: &str = "Please enter a URL.";
pub const MSG_PATTERN: &str = "Please match the requested format.";

/// Email grammar browsers apply to `type="email"` inputs.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap_or_else(|e| unreachable!("email grammar must compile: {e}"))
});

/// Error raised when a constraint declaration itself is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    /// The pattern source is not a valid regular expression.
    #[error("invalid pattern `{source_text}`: {reason}")]
    InvalidPattern { source_text: String, reason: String },
    /// `MinLength` exceeds `MaxLength` so no value could ever be valid.
    #[error("min length {min} exceeds max length {max}")]
    LengthBounds { min: usize, max: usize },
}

/// Input `type` attribute values that carry a built-in format check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Url,
}

impl InputType {
    /// Attribute value rendered on the `<input>` element.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Url => "url",
        }
    }

    fn check(self, value: &str) -> Option<&'static str> {
        match self {
            Self::Text | Self::Password => None,
            Self::Email => (!EMAIL_RE.is_match(value)).then_some(MSG_EMAIL),
            Self::Number => value.trim().parse::<f64>().map_or(true, |n| !n.is_finite()).then_some(MSG_NUMBER),
            Self::Url => (!looks_like_url(value)).then_some(MSG_URL),
        }
    }
}

fn looks_like_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// A compiled `pattern` attribute. The whole value must match.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` with HTML `pattern` semantics (implicitly anchored).
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidPattern`] if `source` does not compile.
    pub fn new(source: &str) -> Result<Self, ConstraintError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|e| ConstraintError::InvalidPattern {
            source_text: source.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { source: source.to_owned(), regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

/// One declarative rule attached to a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constraint {
    Required,
    Type(InputType),
    Pattern(Pattern),
    MinLength(usize),
    MaxLength(usize),
}

impl Constraint {
    /// Check a non-empty value against this constraint, returning the
    /// failure message if it does not hold.
    fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::Required => None,
            Self::Type(kind) => kind.check(value).map(str::to_owned),
            Self::Pattern(pattern) => (!pattern.is_match(value)).then(|| MSG_PATTERN.to_owned()),
            Self::MinLength(min) => {
                let len = value.chars().count();
                (len < *min).then(|| {
                    format!(
                        "Please lengthen this text to {min} characters or more (you are currently using {len} characters)."
                    )
                })
            }
            Self::MaxLength(max) => {
                let len = value.chars().count();
                (len > *max).then(|| {
                    format!(
                        "Please shorten this text to no more than {max} characters (you are currently using {len} characters)."
                    )
                })
            }
        }
    }
}

/// Validity descriptor for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validity {
    pub valid: bool,
    pub message: String,
}

impl Validity {
    pub fn ok() -> Self {
        Self { valid: true, message: String::new() }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self { valid: false, message: message.into() }
    }
}

impl Default for Validity {
    fn default() -> Self {
        Self::ok()
    }
}

/// Ordered constraint set for a single field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constraints {
    items: Vec<Constraint>,
}

impl Constraints {
    /// No constraints: every value is valid.
    pub fn none() -> Self {
        Self::default()
    }

    /// Shorthand for a set containing only [`Constraint::Required`].
    pub fn required() -> Self {
        Self::none().with(Constraint::Required)
    }

    #[must_use]
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.items.push(constraint);
        self
    }

    #[must_use]
    pub fn with_type(self, kind: InputType) -> Self {
        self.with(Constraint::Type(kind))
    }

    /// Add a `pattern` constraint compiled from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidPattern`] if `source` does not compile.
    pub fn with_pattern(self, source: &str) -> Result<Self, ConstraintError> {
        Ok(self.with(Constraint::Pattern(Pattern::new(source)?)))
    }

    /// Add length bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::LengthBounds`] if the resulting set has a
    /// minimum above its maximum.
    pub fn with_length(self, min: Option<usize>, max: Option<usize>) -> Result<Self, ConstraintError> {
        let mut set = self;
        if let Some(min) = min {
            set.items.push(Constraint::MinLength(min));
        }
        if let Some(max) = max {
            set.items.push(Constraint::MaxLength(max));
        }
        set.validate()?;
        Ok(set)
    }

    pub fn is_required(&self) -> bool {
        self.items.contains(&Constraint::Required)
    }

    /// The declared input type, `Text` when none is given.
    pub fn input_type(&self) -> InputType {
        self.items
            .iter()
            .find_map(|c| match c {
                Constraint::Type(kind) => Some(*kind),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Compute the validity of `value` under this set.
    ///
    /// Emptiness is checked first for required fields. Format and length
    /// checks only run on non-empty values, so an empty optional field is
    /// always valid.
    pub fn check(&self, value: &str) -> Validity {
        if value.is_empty() {
            return if self.is_required() { Validity::invalid(MSG_REQUIRED) } else { Validity::ok() };
        }
        self.items
            .iter()
            .find_map(|c| c.check(value))
            .map_or_else(Validity::ok, Validity::invalid)
    }

    fn validate(&self) -> Result<(), ConstraintError> {
        let mins = self.items.iter().filter_map(|c| match c {
            Constraint::MinLength(n) => Some(*n),
            _ => None,
        });
        let maxes = self.items.iter().filter_map(|c| match c {
            Constraint::MaxLength(n) => Some(*n),
            _ => None,
        });
        if let (Some(min), Some(max)) = (mins.max(), maxes.min()) {
            if min > max {
                return Err(ConstraintError::LengthBounds { min, max });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .items
            .iter()
            .map(|c| match c {
                Constraint::Required => "required".to_owned(),
                Constraint::Type(kind) => format!("type={}", kind.as_attr()),
                Constraint::Pattern(p) => format!("pattern={}", p.as_str()),
                Constraint::MinLength(n) => format!("minlength={n}"),
                Constraint::MaxLength(n) => format!("maxlength={n}"),
            })
            .collect();
        f.write_str(&parts.join(" "))
    }
}
