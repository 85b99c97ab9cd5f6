//! Filterable field selector.
//!
//! Queries match on exactly one field at a time; the selector names which
//! one. Only four of the record fields are filterable.

use super::record::Record;

/// The record fields a query may filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    IncidentNumber,
    OffenseCode,
    OffenseCodeGroup,
    District,
}

impl FilterField {
    /// All filterable fields, in record-field order
    pub const ALL: [FilterField; 4] = [
        FilterField::IncidentNumber,
        FilterField::OffenseCode,
        FilterField::OffenseCodeGroup,
        FilterField::District,
    ];

    /// Resolve a query-parameter name to a field selector
    pub fn from_param(name: &str) -> Option<Self> {
        match name {
            "IncidentNumber" => Some(FilterField::IncidentNumber),
            "OffenseCode" => Some(FilterField::OffenseCode),
            "OffenseCodeGroup" => Some(FilterField::OffenseCodeGroup),
            "District" => Some(FilterField::District),
            _ => None,
        }
    }

    /// The query-parameter name for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::IncidentNumber => "IncidentNumber",
            FilterField::OffenseCode => "OffenseCode",
            FilterField::OffenseCodeGroup => "OffenseCodeGroup",
            FilterField::District => "District",
        }
    }

    /// Project this field's value out of a record
    pub fn value_of<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            FilterField::IncidentNumber => &record.incident_number,
            FilterField::OffenseCode => &record.offense_code,
            FilterField::OffenseCodeGroup => &record.offense_code_group,
            FilterField::District => &record.district,
        }
    }
}
