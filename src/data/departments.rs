//! Department reference data.

use crate::models::SelectOption;

/// Departments offered by the create form, in display order.
pub const DEPARTMENTS: &[&str] = &["Sales", "Marketing", "Engineering", "Human Resources", "Legal"];

/// Department options, used as-is by the selector.
pub fn builtin_departments() -> Vec<SelectOption> {
    DEPARTMENTS.iter().map(|name| SelectOption::new(*name, *name)).collect()
}
