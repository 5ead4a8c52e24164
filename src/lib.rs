//! A client library for registering individuals with a remote registry and
//! browsing, searching and exporting the registered records.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod form;
pub mod listing;
pub mod models;
pub mod resources;
pub mod shell;
pub mod utils;
pub mod validation;

// Re-export the most common types for easier use
// Core types
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use models::{DisplayRow, Gender, GovtIdKind, GuardianRelation, NewPerson, PersonRecord};

// Remote access
pub use api::{HttpPersonApi, PersonApi};

// Screens
pub use form::{Field, RegistrationForm, RegistrationView, StatusMessage, SubmitOutcome};
pub use listing::{Column, ListingState, ListingView, SortOrder, SortSpec};
pub use shell::Route;

// Formatting, validation and export
pub use export::{ExportScope, export_to_path, write_csv};
pub use models::{format_record, format_records};
pub use validation::{FieldError, ValidationErrors, validate};
