//! Employee draft assembled by the create form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::option::SelectOption;

/// Record handed to the submit capability when the create form is saved.
///
/// Nothing here is validated: names may be empty, the zip code is kept as the
/// raw text typed into the numeric input, and the two dates are unrelated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    #[serde(with = "empty_date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(with = "empty_date")]
    pub start_date: Option<NaiveDate>,
    pub selected_department: Option<SelectOption>,
    pub selected_state: Option<SelectOption>,
}

impl EmployeeDraft {
    /// Department label, or an empty string when none was selected.
    pub fn department_label(&self) -> &str {
        self.selected_department.as_ref().map(|d| d.label.as_str()).unwrap_or("")
    }

    /// State abbreviation, or an empty string when none was selected.
    pub fn state_value(&self) -> &str {
        self.selected_state.as_ref().map(|s| s.value.as_str()).unwrap_or("")
    }
}

/// Format a date-or-empty value for display and export.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serializes `None` as `""` and a date as `YYYY-MM-DD`.
mod empty_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Some)
            .map_err(de::Error::custom)
    }
}
