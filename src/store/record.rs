//! Record shape for one crime-incident entry.
//!
//! All fields except the identifier are free-form text, matching the source
//! dataset. JSON field names follow the original wire format (`ID`,
//! `IncidentNumber`, ...), so existing clients keep working.

use serde::{Deserialize, Serialize};

/// Number of value columns in a bootstrap CSV row.
///
/// The identifier is not a CSV column; it is assigned by the store.
pub const FIELDS_PER_ROW: usize = 17;

/// One crime-incident record.
///
/// Deserialization fills missing fields with empty strings, so partial
/// create payloads are accepted. A client-supplied `ID` parses but is
/// overwritten by the store-assigned identifier on append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Record {
    #[serde(rename = "ID")]
    pub id: u64,
    pub incident_number: String,
    pub offense_code: String,
    pub offense_code_group: String,
    pub offense_description: String,
    pub district: String,
    pub reporting_area: String,
    pub shooting: String,
    pub occurred_on_date: String,
    pub year: String,
    pub month: String,
    pub day_of_week: String,
    pub hour: String,
    pub ucr_part: String,
    pub street: String,
    pub lat: String,
    pub long: String,
    pub location: String,
}

impl Record {
    /// Build a record from one CSV data row.
    ///
    /// The caller guarantees `fields` holds exactly [`FIELDS_PER_ROW`]
    /// values in source column order. The identifier is left at zero and
    /// assigned by the store on append.
    pub fn from_fields(fields: &[String]) -> Self {
        debug_assert_eq!(fields.len(), FIELDS_PER_ROW);
        Self {
            id: 0,
            incident_number: fields[0].clone(),
            offense_code: fields[1].clone(),
            offense_code_group: fields[2].clone(),
            offense_description: fields[3].clone(),
            district: fields[4].clone(),
            reporting_area: fields[5].clone(),
            shooting: fields[6].clone(),
            occurred_on_date: fields[7].clone(),
            year: fields[8].clone(),
            month: fields[9].clone(),
            day_of_week: fields[10].clone(),
            hour: fields[11].clone(),
            ucr_part: fields[12].clone(),
            street: fields[13].clone(),
            lat: fields[14].clone(),
            long: fields[15].clone(),
            location: fields[16].clone(),
        }
    }
}
