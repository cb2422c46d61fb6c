//! Static reference data feeding the department and state selectors.

pub mod departments;
pub mod states;

use crate::config::{ConfigError, ReferenceConfig};
use crate::models::{SelectOption, StateRecord};

pub use departments::builtin_departments;
pub use states::{builtin_states, states_model};

/// Option sets shown by the create form selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub departments: Vec<SelectOption>,
    pub states: Vec<SelectOption>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceData {
    /// Reference data compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            departments: builtin_departments(),
            states: states_model(&builtin_states()),
        }
    }

    /// Build reference data from config, falling back to the builtin lists
    /// for anything the config does not override.
    ///
    /// Malformed records are a fatal configuration error.
    pub fn from_config(config: &ReferenceConfig) -> Result<Self, ConfigError> {
        let departments = match &config.departments {
            Some(departments) => {
                validate_departments(departments)?;
                departments.clone()
            }
            None => builtin_departments(),
        };

        let states = match &config.states {
            Some(records) => {
                validate_states(records)?;
                states_model(records)
            }
            None => states_model(&builtin_states()),
        };

        Ok(Self { departments, states })
    }
}

/// Reject department options with an empty label or value.
pub fn validate_departments(departments: &[SelectOption]) -> Result<(), ConfigError> {
    if departments.is_empty() {
        return Err(ConfigError::Validation("Department list cannot be empty".to_string()));
    }
    for (idx, dept) in departments.iter().enumerate() {
        if dept.label.trim().is_empty() || dept.value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Department #{} must have a label and a value",
                idx + 1
            )));
        }
    }
    Ok(())
}

/// Reject state records the mapping cannot turn into a complete option.
pub fn validate_states(records: &[StateRecord]) -> Result<(), ConfigError> {
    if records.is_empty() {
        return Err(ConfigError::Validation("State list cannot be empty".to_string()));
    }
    for (idx, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() || record.abbreviation.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "State #{} must have a name and an abbreviation",
                idx + 1
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_reference_data() {
        let data = ReferenceData::builtin();
        assert_eq!(data.departments.len(), 5);
        assert_eq!(data.states.len(), builtin_states().len());
    }

    #[test]
    fn test_from_config_without_overrides_is_builtin() {
        let data = ReferenceData::from_config(&ReferenceConfig::default()).unwrap();
        assert_eq!(data, ReferenceData::builtin());
    }

    #[test]
    fn test_from_config_uses_overrides() {
        let config = ReferenceConfig {
            departments: Some(vec![SelectOption::new("Finance", "Finance")]),
            states: Some(vec![StateRecord {
                name: "Oregon".to_string(),
                abbreviation: "OR".to_string(),
            }]),
        };
        let data = ReferenceData::from_config(&config).unwrap();
        assert_eq!(data.departments, vec![SelectOption::new("Finance", "Finance")]);
        assert_eq!(data.states, vec![SelectOption::new("Oregon", "OR")]);
    }

    #[test]
    fn test_from_config_rejects_blank_department() {
        let config = ReferenceConfig {
            departments: Some(vec![SelectOption::new("Sales", "Sales"), SelectOption::new("", "x")]),
            states: None,
        };
        let err = ReferenceData::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("Department #2"));
    }

    #[test]
    fn test_from_config_rejects_state_without_abbreviation() {
        let config = ReferenceConfig {
            departments: None,
            states: Some(vec![StateRecord {
                name: "Texas".to_string(),
                abbreviation: " ".to_string(),
            }]),
        };
        assert!(matches!(
            ReferenceData::from_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_from_config_rejects_empty_lists() {
        let config = ReferenceConfig {
            departments: Some(Vec::new()),
            states: None,
        };
        assert!(ReferenceData::from_config(&config).is_err());
    }
}
