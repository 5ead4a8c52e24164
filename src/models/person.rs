//! Person record as exchanged with the registry API
//!
//! Records coming back from `GET /person/` are loosely typed: absent values
//! may be JSON nulls, missing keys, empty strings or the literal string
//! `"undefined"`, and numbers may arrive quoted. Everything is normalized
//! here so that the rest of the crate only ever sees `Option`s.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::types::{Gender, GovtIdKind, GuardianRelation};

/// String values the API uses to mean "no value"
const ABSENT_MARKERS: &[&str] = &["undefined", "null"];

/// A registered individual as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonRecord {
    /// Server-assigned identifier
    #[serde(deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub nationality: Option<String>,
    /// Which of the two identifier fields is authoritative
    #[serde(rename = "govtId", deserialize_with = "lenient_enum")]
    pub govt_id_kind: Option<GovtIdKind>,
    #[serde(deserialize_with = "lenient_text")]
    pub aadhaar_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub pan_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub pincode: Option<String>,
    #[serde(deserialize_with = "lenient_enum")]
    pub gender: Option<Gender>,
    #[serde(deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    #[serde(deserialize_with = "lenient_text")]
    pub guardian_name: Option<String>,
    #[serde(rename = "guardianType", deserialize_with = "lenient_enum")]
    pub guardian_relation: Option<GuardianRelation>,
    #[serde(deserialize_with = "lenient_text")]
    pub mobile_number: Option<String>,
}

impl PersonRecord {
    /// The identifier value selected by the record's ID kind
    #[must_use]
    pub fn govt_id(&self) -> Option<&str> {
        match self.govt_id_kind? {
            GovtIdKind::Aadhaar => self.aadhaar_number.as_deref(),
            GovtIdKind::Pan => self.pan_number.as_deref(),
        }
    }
}

/// Create-request body for `POST /person`
///
/// Built from a validated registration form. Empty optional fields are left
/// out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(rename = "govtId", skip_serializing_if = "Option::is_none")]
    pub govt_id_kind: Option<GovtIdKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(rename = "guardianType", skip_serializing_if = "Option::is_none")]
    pub guardian_relation: Option<GuardianRelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}

impl NewPerson {
    /// Request body carrying only the required fields
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, gender: Gender) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            mobile_number: None,
            govt_id_kind: None,
            aadhaar_number: None,
            pan_number: None,
            guardian_relation: None,
            guardian_name: None,
            email: None,
            emergency_number: None,
            address: None,
            state: None,
            city: None,
            country: None,
            pincode: None,
            occupation: None,
            religion: None,
            marital_status: None,
            blood_group: None,
            nationality: None,
        }
    }
}

/// Normalize a raw string, mapping absent markers and blanks to `None`
#[must_use]
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || ABSENT_MARKERS.contains(&trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Scalar JSON value that may stand in for a string
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Flag(bool),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => normalize_text(&s),
            Self::Unsigned(n) => Some(n.to_string()),
            Self::Signed(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::Flag(b) => Some(b.to_string()),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.and_then(Scalar::into_text))
}

fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let text = lenient_text(deserializer)?;
    Ok(text.and_then(|s| {
        let parsed = s.parse().ok();
        if parsed.is_none() {
            log::debug!("Ignoring unrecognised value {s:?}");
        }
        parsed
    }))
}

fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        Some(Scalar::Unsigned(n)) => u32::try_from(n).ok(),
        Some(Scalar::Signed(n)) => u32::try_from(n).ok(),
        Some(Scalar::Float(n)) => whole_number(n),
        Some(Scalar::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number(n: f64) -> Option<u32> {
    (n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n)).then_some(n as u32)
}
