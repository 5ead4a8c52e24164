//! Declarative validation of the registration form
//!
//! The rule set is a static table of [`FieldRule`]s. A single evaluator walks
//! the table; each rule produces at most one error (its first failing check).
//! Optional fields left blank are never checked further.

pub mod constraint;

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::form::RegistrationForm;
use crate::form::fields::Field;
use crate::models::types::GovtIdKind;
use crate::resources::{BLOOD_GROUPS, GUARDIAN_RELATIONS, MARITAL_STATUSES, RELIGIONS};

pub use constraint::{Check, Condition, Constraint, FieldRule};

/// Minimum age accepted at registration
pub const MIN_AGE: u32 = 18;

/// Maximum age accepted at registration
pub const MAX_AGE: u32 = 120;

// Literal patterns only; every one is compiled by the rule tests.
fn pattern(re: &str) -> Constraint {
    Constraint::Pattern(Regex::new(re).unwrap())
}

/// The registration form's rule table, in evaluation order
pub static RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    vec![
        FieldRule::new(Field::Name)
            .check(Constraint::Required, "Name is required")
            .check(Constraint::MaxLength(20), "Name cannot exceed 20 characters")
            .check(pattern(r"^[A-Za-z ]+$"), "Name: alphabetical characters only"),
        FieldRule::new(Field::Age)
            .check(Constraint::Required, "Age is required")
            .check(Constraint::Integer, "Age must be a whole number")
            .check(Constraint::Min(MIN_AGE), "You must be at least 18 years old")
            .check(Constraint::Max(MAX_AGE), "You cannot be more than 120 years old"),
        FieldRule::new(Field::Gender)
            .check(Constraint::Required, "Select gender")
            .check(Constraint::OneOf(&["male", "female", "other"]), "Select gender"),
        FieldRule::new(Field::MobileNumber)
            .check(pattern(r"^[0-9]{10}$"), "Number must contain 10 digits"),
        FieldRule::new(Field::GovtIdKind)
            .check(Constraint::OneOf(&["AADHAR", "PAN"]), "Select a valid ID type"),
        FieldRule::new(Field::AadhaarNumber)
            .when(Condition::IdKindIs(GovtIdKind::Aadhaar))
            .check(Constraint::Length(12), "Enter valid Aadhaar number")
            .check(pattern(r"^[0-9-]+$"), "Enter valid Aadhaar number"),
        FieldRule::new(Field::PanNumber)
            .when(Condition::IdKindIs(GovtIdKind::Pan))
            .check(Constraint::Length(10), "Enter valid PAN number")
            .check(pattern(r"^[A-Za-z0-9/-]+$"), "Enter valid PAN number"),
        FieldRule::new(Field::GuardianRelation).check(
            Constraint::OneOf(GUARDIAN_RELATIONS),
            "Select a valid guardian relation",
        ),
        FieldRule::new(Field::GuardianName)
            .check(
                Constraint::MaxLength(20),
                "Guardian name cannot exceed 20 characters",
            )
            .check(
                pattern(r"^[A-Za-z ]+$"),
                "Guardian name: alphabetical characters only",
            ),
        FieldRule::new(Field::Email).check(
            pattern(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$"),
            "Enter valid Email ID",
        ),
        FieldRule::new(Field::EmergencyNumber).check(
            pattern(r"^[0-9]{10}$"),
            "Emergency number must contain 10 digits",
        ),
        FieldRule::new(Field::State).check(Constraint::KnownState, "Select a valid state"),
        FieldRule::new(Field::City)
            .check(Constraint::CityOfState, "Select a city of the chosen state"),
        FieldRule::new(Field::Pincode)
            .check(pattern(r"^[0-9]{6}$"), "Enter valid 6 digit pincode"),
        FieldRule::new(Field::Religion)
            .check(Constraint::OneOf(RELIGIONS), "Select a valid religion"),
        FieldRule::new(Field::MaritalStatus).check(
            Constraint::OneOf(MARITAL_STATUSES),
            "Select a valid marital status",
        ),
        FieldRule::new(Field::BloodGroup)
            .check(Constraint::OneOf(BLOOD_GROUPS), "Select a valid blood group"),
    ]
});

/// A failed check on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors of a whole-form validation, in rule-table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: SmallVec<[FieldError; 4]>,
}

impl ValidationErrors {
    /// First error in rule-table order
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// Error recorded for a particular field
    #[must_use]
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(first) if self.len() > 1 => {
                write!(f, "{first} (and {} more)", self.len() - 1)
            }
            Some(first) => write!(f, "{first}"),
            None => f.write_str("no errors"),
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Evaluate one rule against the form
fn evaluate(rule: &FieldRule, form: &RegistrationForm) -> Option<FieldError> {
    if rule.condition.is_some_and(|c| !c.holds(form)) {
        return None;
    }

    let value = form.value(rule.field);
    let failed = if value.is_empty() {
        rule.checks
            .iter()
            .find(|c| matches!(c.constraint, Constraint::Required))
    } else {
        rule.checks
            .iter()
            .find(|c| !c.constraint.is_satisfied(value, form))
    };

    failed.map(|check| FieldError {
        field: rule.field,
        message: check.message.to_string(),
    })
}

/// Validate a single field, for inline feedback while editing
#[must_use]
pub fn validate_field(form: &RegistrationForm, field: Field) -> Option<FieldError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find_map(|rule| evaluate(rule, form))
}

/// Validate the whole form
pub fn validate(form: &RegistrationForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for rule in RULES.iter() {
        if let Some(error) = evaluate(rule, form) {
            log::debug!("Validation failed for {}: {}", error.field.key(), error.message);
            errors.push(error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
