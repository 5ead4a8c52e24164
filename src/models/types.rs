//! Common domain type definitions
//!
//! Closed enumerations shared by the person record, the registration form
//! and the table formatter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised {kind}: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Government identifier scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GovtIdKind {
    /// Aadhaar number (12 digits)
    #[serde(rename = "AADHAR")]
    Aadhaar,
    /// Permanent Account Number (10 characters)
    #[serde(rename = "PAN")]
    Pan,
}

impl GovtIdKind {
    /// Wire label of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aadhaar => "AADHAR",
            Self::Pan => "PAN",
        }
    }
}

impl FromStr for GovtIdKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AADHAR" | "AADHAAR" => Ok(Self::Aadhaar),
            "PAN" => Ok(Self::Pan),
            _ => Err(ParseEnumError::new("government id kind", s)),
        }
    }
}

impl fmt::Display for GovtIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender of an individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Any other gender
    Other,
}

impl Gender {
    /// Wire label of the gender
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// One-letter form used in the age/sex column
    #[must_use]
    pub const fn shorthand(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "X",
        }
    }
}

impl FromStr for Gender {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ParseEnumError::new("gender", s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relation of the guardian to the registered person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardianRelation {
    /// Son of
    #[serde(rename = "S/O")]
    SonOf,
    /// Daughter of
    #[serde(rename = "D/O")]
    DaughterOf,
    /// Wife of
    #[serde(rename = "W/O")]
    WifeOf,
    /// Husband of
    #[serde(rename = "H/O")]
    HusbandOf,
    /// Care of
    #[serde(rename = "C/O")]
    CareOf,
}

impl GuardianRelation {
    /// Display label of the relation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SonOf => "S/O",
            Self::DaughterOf => "D/O",
            Self::WifeOf => "W/O",
            Self::HusbandOf => "H/O",
            Self::CareOf => "C/O",
        }
    }
}

impl FromStr for GuardianRelation {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "S/O" => Ok(Self::SonOf),
            "D/O" => Ok(Self::DaughterOf),
            "W/O" => Ok(Self::WifeOf),
            "H/O" => Ok(Self::HusbandOf),
            "C/O" => Ok(Self::CareOf),
            _ => Err(ParseEnumError::new("guardian relation", s)),
        }
    }
}

impl fmt::Display for GuardianRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
