//! Domain models
//!
//! Person records received from the API, the create-request body sent to it,
//! and the display projection used by the listing table.

pub mod display;
pub mod person;
pub mod types;

pub use display::{DisplayRow, PLACEHOLDER, format_record, format_records};
pub use person::{NewPerson, PersonRecord};
pub use types::{Gender, GovtIdKind, GuardianRelation, ParseEnumError};
