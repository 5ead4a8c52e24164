//! Registration form fields and values

use std::fmt;
use std::str::FromStr;

use crate::models::types::{GovtIdKind, ParseEnumError};
use crate::resources::{self, DEFAULT_COUNTRY};

const FIELD_COUNT: usize = 21;

/// Every input of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Age,
    Gender,
    MobileNumber,
    GovtIdKind,
    AadhaarNumber,
    PanNumber,
    GuardianRelation,
    GuardianName,
    Email,
    EmergencyNumber,
    Address,
    State,
    City,
    Country,
    Pincode,
    Occupation,
    Religion,
    MaritalStatus,
    BloodGroup,
    Nationality,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Self; FIELD_COUNT] = [
        Self::Name,
        Self::Age,
        Self::Gender,
        Self::MobileNumber,
        Self::GovtIdKind,
        Self::AadhaarNumber,
        Self::PanNumber,
        Self::GuardianRelation,
        Self::GuardianName,
        Self::Email,
        Self::EmergencyNumber,
        Self::Address,
        Self::State,
        Self::City,
        Self::Country,
        Self::Pincode,
        Self::Occupation,
        Self::Religion,
        Self::MaritalStatus,
        Self::BloodGroup,
        Self::Nationality,
    ];

    /// JSON key used by the API
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::MobileNumber => "mobileNumber",
            Self::GovtIdKind => "govtId",
            Self::AadhaarNumber => "aadhaarNumber",
            Self::PanNumber => "panNumber",
            Self::GuardianRelation => "guardianType",
            Self::GuardianName => "guardianName",
            Self::Email => "email",
            Self::EmergencyNumber => "emergencyNumber",
            Self::Address => "address",
            Self::State => "state",
            Self::City => "city",
            Self::Country => "country",
            Self::Pincode => "pincode",
            Self::Occupation => "occupation",
            Self::Religion => "religion",
            Self::MaritalStatus => "maritalStatus",
            Self::BloodGroup => "bloodGroup",
            Self::Nationality => "nationality",
        }
    }

    /// Label shown next to the input
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Gender => "Sex",
            Self::MobileNumber => "Mobile",
            Self::GovtIdKind => "Govt Id Type",
            Self::AadhaarNumber => "Aadhaar Number",
            Self::PanNumber => "PAN Number",
            Self::GuardianRelation => "Guardian Relation",
            Self::GuardianName => "Guardian",
            Self::Email => "Email",
            Self::EmergencyNumber => "Emergency Mobile",
            Self::Address => "Address",
            Self::State => "State",
            Self::City => "City",
            Self::Country => "Country",
            Self::Pincode => "Pin Code",
            Self::Occupation => "Occupation",
            Self::Religion => "Religion",
            Self::MaritalStatus => "Marital Status",
            Self::BloodGroup => "Blood Group",
            Self::Nationality => "Nationality",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Field {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| {
                f.key().eq_ignore_ascii_case(wanted) || f.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseEnumError::new("form field", s))
    }
}

/// Visual grouping of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    Contact,
    Address,
    Other,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Personal, Self::Contact, Self::Address, Self::Other];

    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Personal => "Personal Details",
            Self::Contact => "Contact details",
            Self::Address => "Address Details",
            Self::Other => "Other details",
        }
    }

    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Personal => &[
                Field::Name,
                Field::Age,
                Field::Gender,
                Field::MobileNumber,
                Field::GovtIdKind,
                Field::AadhaarNumber,
                Field::PanNumber,
            ],
            Self::Contact => &[
                Field::GuardianRelation,
                Field::GuardianName,
                Field::Email,
                Field::EmergencyNumber,
            ],
            Self::Address => &[
                Field::Address,
                Field::State,
                Field::City,
                Field::Country,
                Field::Pincode,
            ],
            Self::Other => &[
                Field::Occupation,
                Field::Religion,
                Field::MaritalStatus,
                Field::BloodGroup,
                Field::Nationality,
            ],
        }
    }
}

/// Raw values of the registration form
///
/// Values are kept as entered; validation and conversion into a request body
/// happen at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    values: [String; FIELD_COUNT],
}

impl Default for RegistrationForm {
    fn default() -> Self {
        let mut form = Self {
            values: Default::default(),
        };
        form.set(Field::Country, DEFAULT_COUNTRY);
        form.set(Field::Nationality, DEFAULT_COUNTRY);
        form
    }
}

impl RegistrationForm {
    /// Create a form holding the default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field, trimmed
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values[field as usize].trim()
    }

    /// Replace the value of a field
    ///
    /// State and ID kind have dependent fields; prefer [`Self::select_state`]
    /// and [`Self::set_id_kind`] for those.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    /// Builder-style variant of [`Self::set`]
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Whether the field holds a non-blank value
    #[must_use]
    pub fn is_filled(&self, field: Field) -> bool {
        !self.value(field).is_empty()
    }

    /// Select a state, narrowing the city list to that state's cities.
    ///
    /// A previously chosen city that does not belong to the new state is
    /// cleared. Returns the narrowed city list.
    pub fn select_state(&mut self, state: &str) -> &'static [&'static str] {
        self.set(Field::State, state.trim());
        let cities = resources::cities_for(state.trim());
        let city = self.value(Field::City);
        if !cities.iter().any(|c| *c == city) {
            self.set(Field::City, "");
        }
        cities
    }

    /// Cities selectable for the current state
    #[must_use]
    pub fn available_cities(&self) -> &'static [&'static str] {
        resources::cities_for(self.value(Field::State))
    }

    /// Selected government ID kind
    #[must_use]
    pub fn id_kind(&self) -> Option<GovtIdKind> {
        self.value(Field::GovtIdKind).parse().ok()
    }

    /// Switch the government ID kind, clearing the inactive ID input
    pub fn set_id_kind(&mut self, kind: Option<GovtIdKind>) {
        self.set(Field::GovtIdKind, kind.map_or("", GovtIdKind::as_str));
        match kind {
            Some(GovtIdKind::Aadhaar) => self.set(Field::PanNumber, ""),
            Some(GovtIdKind::Pan) => self.set(Field::AadhaarNumber, ""),
            None => {
                self.set(Field::AadhaarNumber, "");
                self.set(Field::PanNumber, "");
            }
        }
    }

    /// The ID input currently shown, if any
    #[must_use]
    pub fn active_id_field(&self) -> Option<Field> {
        self.id_kind().map(|kind| match kind {
            GovtIdKind::Aadhaar => Field::AadhaarNumber,
            GovtIdKind::Pan => Field::PanNumber,
        })
    }

    /// Reset every field to its default value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterate over `(field, value)` pairs in form order
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(|field| (field, self.value(field)))
    }
}
