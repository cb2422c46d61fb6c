//! Data models for employee drafts and selector options.

pub mod employee;
pub mod option;

pub use employee::EmployeeDraft;
pub use option::{SelectOption, StateRecord};
