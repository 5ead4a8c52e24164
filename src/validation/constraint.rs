//! Constraint kinds used by the rule table

use regex::Regex;

use crate::form::RegistrationForm;
use crate::form::fields::Field;
use crate::models::types::GovtIdKind;
use crate::resources;

/// A single check applied to a field value
#[derive(Debug, Clone)]
pub enum Constraint {
    /// The value must not be blank
    Required,
    /// At most this many characters
    MaxLength(usize),
    /// Exactly this many characters
    Length(usize),
    /// The whole value must match
    Pattern(Regex),
    /// The value must parse as a non-negative integer
    Integer,
    /// Integer value no smaller than this
    Min(u32),
    /// Integer value no larger than this
    Max(u32),
    /// The value must be one of these labels
    OneOf(&'static [&'static str]),
    /// The value must name a known state
    KnownState,
    /// The value must be a city of the form's selected state
    CityOfState,
}

impl Constraint {
    /// Whether a non-blank value satisfies the constraint
    #[must_use]
    pub fn is_satisfied(&self, value: &str, form: &RegistrationForm) -> bool {
        match self {
            Self::Required => !value.trim().is_empty(),
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::Length(len) => value.chars().count() == *len,
            Self::Pattern(re) => re.is_match(value),
            Self::Integer => whole_number(value).is_some(),
            Self::Min(min) => whole_number(value).is_some_and(|n| n >= *min),
            Self::Max(max) => whole_number(value).is_some_and(|n| n <= *max),
            Self::OneOf(options) => options.iter().any(|o| *o == value),
            Self::KnownState => resources::is_known_state(value),
            Self::CityOfState => form.available_cities().iter().any(|c| *c == value),
        }
    }
}

/// Parse a value made of ASCII digits only; signs and spaces are rejected
fn whole_number(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Precondition deciding whether a rule applies at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Applies only while this ID kind is selected
    IdKindIs(GovtIdKind),
}

impl Condition {
    #[must_use]
    pub fn holds(self, form: &RegistrationForm) -> bool {
        match self {
            Self::IdKindIs(kind) => form.id_kind() == Some(kind),
        }
    }
}

/// A constraint paired with the message shown when it fails
#[derive(Debug, Clone)]
pub struct Check {
    pub constraint: Constraint,
    pub message: &'static str,
}

impl Check {
    #[must_use]
    pub fn new(constraint: Constraint, message: &'static str) -> Self {
        Self {
            constraint,
            message,
        }
    }
}

/// All checks for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub condition: Option<Condition>,
    pub checks: Vec<Check>,
}

impl FieldRule {
    #[must_use]
    pub fn new(field: Field) -> Self {
        Self {
            field,
            condition: None,
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use]
    pub fn check(mut self, constraint: Constraint, message: &'static str) -> Self {
        self.checks.push(Check::new(constraint, message));
        self
    }

    /// Whether a blank value is an error for this rule
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(c.constraint, Constraint::Required))
    }
}
