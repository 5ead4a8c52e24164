//! Display projection of person records
//!
//! `format_record` flattens a [`PersonRecord`] into the strings shown in the
//! listing table and written to exports. It never fails: every absent value
//! renders as [`PLACEHOLDER`].

use itertools::Itertools;
use serde::Serialize;

use crate::models::person::PersonRecord;

/// Text shown in place of an absent value
pub const PLACEHOLDER: &str = "--";

/// A flattened, display-ready person row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub id: String,
    pub name: String,
    /// Name as received, `None` when absent; searches match against this
    #[serde(skip)]
    pub raw_name: Option<String>,
    /// Age and sex shorthand, e.g. `30Y/F`
    pub age_sex: String,
    pub mobile: String,
    /// Address parts joined into one sentence
    pub address: String,
    pub govt_id_type: String,
    /// Identifier value selected by the ID kind
    pub govt_id: String,
    /// Relation label followed by the guardian's name
    pub guardian: String,
    pub nationality: String,
}

/// Format one record into a display row
#[must_use]
pub fn format_record(record: &PersonRecord) -> DisplayRow {
    DisplayRow {
        id: or_placeholder(record.id.as_deref()),
        name: or_placeholder(record.name.as_deref()),
        raw_name: record.name.clone(),
        age_sex: format_age_sex(record),
        mobile: or_placeholder(record.mobile_number.as_deref()),
        address: format_address(record),
        govt_id_type: or_placeholder(record.govt_id_kind.map(|kind| kind.as_str())),
        govt_id: or_placeholder(record.govt_id()),
        guardian: format_guardian(record),
        nationality: or_placeholder(record.nationality.as_deref()),
    }
}

/// Format every record, preserving order
#[must_use]
pub fn format_records(records: &[PersonRecord]) -> Vec<DisplayRow> {
    records.iter().map(format_record).collect()
}

fn or_placeholder(value: Option<&str>) -> String {
    value.unwrap_or(PLACEHOLDER).to_string()
}

fn format_age_sex(record: &PersonRecord) -> String {
    let age = record
        .age
        .map_or_else(|| PLACEHOLDER.to_string(), |age| age.to_string());
    let sex = record.gender.map_or(PLACEHOLDER, |g| g.shorthand());
    format!("{age}Y/{sex}")
}

fn format_guardian(record: &PersonRecord) -> String {
    match (&record.guardian_name, record.guardian_relation) {
        (None, _) => PLACEHOLDER.to_string(),
        (Some(name), Some(relation)) => format!("{relation} {name}"),
        (Some(name), None) => name.clone(),
    }
}

fn format_address(record: &PersonRecord) -> String {
    let parts = [
        &record.address,
        &record.city,
        &record.state,
        &record.country,
    ]
    .into_iter()
    .flatten()
    .map(String::as_str);

    let pincode = record.pincode.as_ref().map(|pin| format!("({pin})"));
    let joined = parts.chain(pincode.as_deref()).join(", ");

    if joined.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format!("{joined}.")
    }
}
