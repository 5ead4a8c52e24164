//! Registration form and its submission
//!
//! [`RegistrationForm`] holds raw input. [`RegistrationView`] owns a form plus
//! the status shown after a submission attempt, and drives the
//! validate-then-create protocol against a [`PersonApi`].

pub mod fields;

use log::{info, warn};

use crate::api::PersonApi;
use crate::error::{RegistryError, Result};
use crate::models::NewPerson;
use crate::models::person::normalize_text;
use crate::models::types::{Gender, GovtIdKind};
use crate::validation::{FieldError, ValidationErrors, validate};

pub use fields::{Field, RegistrationForm, Section};

/// Message shown after a successful registration
pub const SUCCESS_MESSAGE: &str = "Successfully submitted";

impl RegistrationForm {
    /// Validate the form and build the create-request body.
    ///
    /// Only the identifier matching the selected ID kind is carried over.
    pub fn to_new_person(&self) -> Result<NewPerson> {
        validate(self)?;

        // Validation guarantees these parse.
        let age = self
            .value(Field::Age)
            .parse::<u32>()
            .map_err(|_| invalid(Field::Age, "Age must be a whole number"))?;
        let gender = self
            .value(Field::Gender)
            .parse::<Gender>()
            .map_err(|_| invalid(Field::Gender, "Select gender"))?;

        let text = |field: Field| normalize_text(self.value(field));
        let kind = self.id_kind();

        Ok(NewPerson {
            mobile_number: text(Field::MobileNumber),
            govt_id_kind: kind,
            aadhaar_number: (kind == Some(GovtIdKind::Aadhaar))
                .then(|| text(Field::AadhaarNumber))
                .flatten(),
            pan_number: (kind == Some(GovtIdKind::Pan))
                .then(|| text(Field::PanNumber))
                .flatten(),
            guardian_relation: self.value(Field::GuardianRelation).parse().ok(),
            guardian_name: text(Field::GuardianName),
            email: text(Field::Email),
            emergency_number: text(Field::EmergencyNumber),
            address: text(Field::Address),
            state: text(Field::State),
            city: text(Field::City),
            country: text(Field::Country),
            pincode: text(Field::Pincode),
            occupation: text(Field::Occupation),
            religion: text(Field::Religion),
            marital_status: text(Field::MaritalStatus),
            blood_group: text(Field::BloodGroup),
            nationality: text(Field::Nationality),
            ..NewPerson::new(self.value(Field::Name), age, gender)
        })
    }
}

fn invalid(field: Field, message: &str) -> RegistryError {
    let mut errors = ValidationErrors::default();
    errors.push(FieldError {
        field,
        message: message.to_string(),
    });
    RegistryError::Validation(errors)
}

/// Status line shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Failure(String),
}

impl StatusMessage {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Result of one submission attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent
    Rejected(ValidationErrors),
    /// The API accepted the registration
    Submitted,
    /// The create request failed
    Failed(RegistryError),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// State of the registration screen
#[derive(Debug, Clone, Default)]
pub struct RegistrationView {
    pub form: RegistrationForm,
    pending: bool,
    status: Option<StatusMessage>,
}

impl RegistrationView {
    #[must_use]
    pub fn new(form: RegistrationForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Whether a create request is outstanding
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Validate the form and mark a submission as pending.
    ///
    /// Returns the request body to send, or the outcome when local validation
    /// fails. Nothing is marked pending in that case.
    pub fn begin_submit(&mut self) -> std::result::Result<NewPerson, SubmitOutcome> {
        match self.form.to_new_person() {
            Ok(person) => {
                self.pending = true;
                self.status = None;
                Ok(person)
            }
            Err(RegistryError::Validation(errors)) => {
                let message = RegistryError::Validation(errors.clone()).user_message();
                self.status = Some(StatusMessage::Failure(message));
                Err(SubmitOutcome::Rejected(errors))
            }
            Err(other) => {
                self.status = Some(StatusMessage::Failure(other.user_message()));
                Err(SubmitOutcome::Failed(other))
            }
        }
    }

    /// Record the result of the create request started by
    /// [`Self::begin_submit`] and clear the pending flag.
    ///
    /// On success the form is reset to its defaults.
    pub fn finish_submit(&mut self, person: &NewPerson, result: Result<()>) -> SubmitOutcome {
        self.pending = false;
        match result {
            Ok(()) => {
                info!("Registration of {} submitted", person.name);
                self.form.reset();
                self.status = Some(StatusMessage::Success(SUCCESS_MESSAGE.to_string()));
                SubmitOutcome::Submitted
            }
            Err(e) => {
                warn!("Registration of {} failed: {e}", person.name);
                self.status = Some(StatusMessage::Failure(e.user_message()));
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Validate and submit the form in one step. No request is retried.
    pub async fn submit<A>(&mut self, api: &A) -> SubmitOutcome
    where
        A: PersonApi + ?Sized,
    {
        let person = match self.begin_submit() {
            Ok(person) => person,
            Err(outcome) => return outcome,
        };
        let result = api.create_person(&person).await;
        self.finish_submit(&person, result)
    }
}
