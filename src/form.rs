//! Create-employee form state, reducer and controller.
//!
//! The form state is an immutable record updated by [`apply_update`]. The
//! [`FormController`] owns that record plus the submission flag, and hands a
//! fresh [`EmployeeDraft`] to its injected [`SubmitEmployee`] capability on
//! every submit.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::models::{EmployeeDraft, SelectOption};

/// Message shown by the confirmation overlay.
pub const CONFIRMATION_MESSAGE: &str = "Employee created !";

/// Identifier of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Street,
    City,
    ZipCode,
    BirthDate,
    StartDate,
    Department,
    State,
}

impl Field {
    /// Field label as shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Street => "Street",
            Field::City => "City",
            Field::ZipCode => "Zip Code",
            Field::BirthDate => "Date of Birth",
            Field::StartDate => "Start Date",
            Field::Department => "Department",
            Field::State => "State",
        }
    }
}

/// New raw value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    Street(String),
    City(String),
    ZipCode(String),
    BirthDate(Option<NaiveDate>),
    StartDate(Option<NaiveDate>),
    Department(Option<SelectOption>),
    State(Option<SelectOption>),
}

impl FieldUpdate {
    /// The field this update replaces.
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::FirstName(_) => Field::FirstName,
            FieldUpdate::LastName(_) => Field::LastName,
            FieldUpdate::Street(_) => Field::Street,
            FieldUpdate::City(_) => Field::City,
            FieldUpdate::ZipCode(_) => Field::ZipCode,
            FieldUpdate::BirthDate(_) => Field::BirthDate,
            FieldUpdate::StartDate(_) => Field::StartDate,
            FieldUpdate::Department(_) => Field::Department,
            FieldUpdate::State(_) => Field::State,
        }
    }
}

/// Current value of every form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub birth_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub selected_department: Option<SelectOption>,
    pub selected_state: Option<SelectOption>,
}

impl FormState {
    /// Assemble a draft from the current field values.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
            birth_date: self.birth_date,
            start_date: self.start_date,
            selected_department: self.selected_department.clone(),
            selected_state: self.selected_state.clone(),
        }
    }
}

/// Replace the slot named by `update` with its value, verbatim.
pub fn apply_update(state: FormState, update: FieldUpdate) -> FormState {
    match update {
        FieldUpdate::FirstName(first_name) => FormState { first_name, ..state },
        FieldUpdate::LastName(last_name) => FormState { last_name, ..state },
        FieldUpdate::Street(street) => FormState { street, ..state },
        FieldUpdate::City(city) => FormState { city, ..state },
        FieldUpdate::ZipCode(zip_code) => FormState { zip_code, ..state },
        FieldUpdate::BirthDate(birth_date) => FormState { birth_date, ..state },
        FieldUpdate::StartDate(start_date) => FormState { start_date, ..state },
        FieldUpdate::Department(selected_department) => FormState {
            selected_department,
            ..state
        },
        FieldUpdate::State(selected_state) => FormState { selected_state, ..state },
    }
}

/// Capability receiving each submitted draft.
///
/// The caller does not inspect any outcome.
pub trait SubmitEmployee {
    fn submit(&mut self, draft: EmployeeDraft);
}

impl<F> SubmitEmployee for F
where
    F: FnMut(EmployeeDraft),
{
    fn submit(&mut self, draft: EmployeeDraft) {
        self(draft)
    }
}

/// Confirmation overlay shown after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub message: &'static str,
}

/// Owns the form state and the submission flag.
pub struct FormController<S> {
    state: FormState,
    submitted: bool,
    submitter: S,
}

impl<S: SubmitEmployee> FormController<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            state: FormState::default(),
            submitted: false,
            submitter,
        }
    }

    /// Current field values.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether the confirmation overlay is visible.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Apply one field update.
    pub fn update(&mut self, update: FieldUpdate) {
        debug!(field = ?update.field(), "Form field updated");
        let state = std::mem::take(&mut self.state);
        self.state = apply_update(state, update);
    }

    /// Hand the current values to the submitter and show the overlay.
    ///
    /// Runs unconditionally: empty fields are submitted as they are.
    pub fn submit(&mut self) {
        let draft = self.state.to_draft();
        info!(
            first_name = %draft.first_name,
            last_name = %draft.last_name,
            "Submitting employee draft"
        );
        self.submitter.submit(draft);
        self.submitted = true;
    }

    /// Hide the overlay. Field values are kept.
    pub fn dismiss(&mut self) {
        self.submitted = false;
    }

    /// The overlay to render, if any.
    pub fn overlay(&self) -> Option<Overlay> {
        self.submitted.then_some(Overlay {
            message: CONFIRMATION_MESSAGE,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use serde_json::json;

    /// Controller whose submitter records every draft it receives.
    fn recording_controller() -> (FormController<impl FnMut(EmployeeDraft)>, Rc<RefCell<Vec<EmployeeDraft>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let controller = FormController::new(move |draft: EmployeeDraft| sink.borrow_mut().push(draft));
        (controller, received)
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_apply_update_replaces_only_target_field() {
        let state = FormState {
            city: "Arlington".to_string(),
            ..Default::default()
        };
        let next = apply_update(state.clone(), FieldUpdate::Street("1 Navy Way".to_string()));

        assert_eq!(next.street, "1 Navy Way");
        assert_eq!(next.city, "Arlington");
        assert_eq!(FormState { street: String::new(), ..next }, state);
    }

    #[test]
    fn test_apply_update_keeps_value_verbatim() {
        let next = apply_update(FormState::default(), FieldUpdate::FirstName("  Grace \t".to_string()));
        assert_eq!(next.first_name, "  Grace \t");

        let next = apply_update(next, FieldUpdate::ZipCode("007".to_string()));
        assert_eq!(next.zip_code, "007");
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let updates = vec![
            FieldUpdate::FirstName("G".to_string()),
            FieldUpdate::LastName("H".to_string()),
            FieldUpdate::FirstName("Gr".to_string()),
            FieldUpdate::BirthDate(date(1906, 12, 9)),
            FieldUpdate::FirstName("Grace".to_string()),
            FieldUpdate::BirthDate(None),
            FieldUpdate::State(Some(SelectOption::new("Virginia", "VA"))),
            FieldUpdate::LastName("Hopper".to_string()),
        ];

        let state = updates.into_iter().fold(FormState::default(), apply_update);

        assert_eq!(state.first_name, "Grace");
        assert_eq!(state.last_name, "Hopper");
        assert_eq!(state.birth_date, None);
        assert_eq!(state.selected_state, Some(SelectOption::new("Virginia", "VA")));
        assert_eq!(state.street, "");
        assert_eq!(state.start_date, None);
        assert_eq!(state.selected_department, None);
    }

    #[test]
    fn test_controller_applies_rapid_updates_in_order() {
        let (mut controller, _) = recording_controller();
        for prefix in ["H", "Ho", "Hop", "Hopp", "Hoppe", "Hopper"] {
            controller.update(FieldUpdate::LastName(prefix.to_string()));
        }
        assert_eq!(controller.state().last_name, "Hopper");
    }

    #[test]
    fn test_update_field_ids() {
        assert_eq!(FieldUpdate::ZipCode(String::new()).field(), Field::ZipCode);
        assert_eq!(FieldUpdate::StartDate(None).field(), Field::StartDate);
        assert_eq!(FieldUpdate::Department(None).field(), Field::Department);
        assert_eq!(Field::BirthDate.label(), "Date of Birth");
    }

    #[test]
    fn test_submit_with_empty_fields_dispatches_once() {
        let (mut controller, received) = recording_controller();
        assert!(!controller.is_submitted());
        assert!(controller.overlay().is_none());

        controller.submit();

        assert_eq!(received.borrow().len(), 1);
        assert_eq!(received.borrow()[0], EmployeeDraft::default());
        assert!(controller.is_submitted());
    }

    #[test]
    fn test_submit_scenario_grace_hopper() {
        let (mut controller, received) = recording_controller();
        controller.update(FieldUpdate::FirstName("Grace".to_string()));
        controller.update(FieldUpdate::LastName("Hopper".to_string()));
        controller.submit();

        let drafts = received.borrow();
        assert_eq!(drafts.len(), 1);
        assert_eq!(
            serde_json::to_value(&drafts[0]).unwrap(),
            json!({
                "firstName": "Grace",
                "lastName": "Hopper",
                "street": "",
                "city": "",
                "zipCode": "",
                "birthDate": "",
                "startDate": "",
                "selectedDepartment": null,
                "selectedState": null,
            })
        );
        assert_eq!(
            controller.overlay(),
            Some(Overlay {
                message: "Employee created !"
            })
        );
    }

    #[test]
    fn test_submit_twice_dispatches_each_snapshot() {
        let (mut controller, received) = recording_controller();
        controller.update(FieldUpdate::City("Arlington".to_string()));
        controller.submit();
        controller.update(FieldUpdate::City("New York".to_string()));
        controller.submit();

        let drafts = received.borrow();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].city, "Arlington");
        assert_eq!(drafts[1].city, "New York");
        assert!(controller.is_submitted());
    }

    #[test]
    fn test_dismiss_keeps_fields() {
        let (mut controller, received) = recording_controller();
        controller.update(FieldUpdate::FirstName("Grace".to_string()));
        controller.update(FieldUpdate::StartDate(date(1943, 7, 1)));
        controller.update(FieldUpdate::Department(Some(SelectOption::new("Engineering", "Engineering"))));
        controller.submit();
        let before = controller.state().clone();

        controller.dismiss();

        assert!(!controller.is_submitted());
        assert!(controller.overlay().is_none());
        assert_eq!(controller.state(), &before);
        assert_eq!(received.borrow().len(), 1);
    }

    #[test]
    fn test_dismiss_without_submit_is_noop() {
        let (mut controller, received) = recording_controller();
        controller.dismiss();
        assert!(!controller.is_submitted());
        assert!(received.borrow().is_empty());
    }

    #[test]
    fn test_birth_date_after_start_date_is_accepted() {
        let (mut controller, received) = recording_controller();
        controller.update(FieldUpdate::BirthDate(date(2030, 1, 1)));
        controller.update(FieldUpdate::StartDate(date(2000, 1, 1)));
        controller.submit();

        let drafts = received.borrow();
        assert_eq!(drafts[0].birth_date, date(2030, 1, 1));
        assert_eq!(drafts[0].start_date, date(2000, 1, 1));
    }

    #[test]
    fn test_struct_submitter() {
        #[derive(Default)]
        struct Counter(usize);
        impl SubmitEmployee for Counter {
            fn submit(&mut self, _draft: EmployeeDraft) {
                self.0 += 1;
            }
        }

        let mut controller = FormController::new(Counter::default());
        controller.submit();
        controller.submit();
        assert_eq!(controller.submitter.0, 2);
    }
}
