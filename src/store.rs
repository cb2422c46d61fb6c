//! Application-wide employee store and the dispatcher feeding it.

use std::sync::mpsc::{Receiver, Sender};

use tracing::{info, warn};

use crate::form::SubmitEmployee;
use crate::models::EmployeeDraft;
use crate::models::employee::format_date;

/// Entries-per-page choices offered by the employee list.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Actions accepted by [`EmployeeStore::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateEmployee(EmployeeDraft),
}

/// Wrap a draft into a create action.
pub fn create_employee_action(draft: EmployeeDraft) -> Action {
    Action::CreateEmployee(draft)
}

/// Employees created during this session.
#[derive(Debug, Clone, Default)]
pub struct EmployeeStore {
    employees: Vec<EmployeeDraft>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[EmployeeDraft] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::CreateEmployee(draft) => {
                self.employees.push(draft);
                info!(total = self.employees.len(), "Employee added to store");
            }
        }
    }

    /// Apply every action waiting on `rx`, in order. Returns how many were applied.
    pub fn drain(&mut self, rx: &Receiver<Action>) -> usize {
        let mut applied = 0;
        while let Ok(action) = rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }
}

/// Submit capability that forwards drafts to the store as create actions.
#[derive(Clone)]
pub struct Dispatcher {
    tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(tx: Sender<Action>) -> Self {
        Self { tx }
    }
}

impl SubmitEmployee for Dispatcher {
    fn submit(&mut self, draft: EmployeeDraft) {
        if self.tx.send(create_employee_action(draft)).is_err() {
            warn!("Employee store is gone, draft dropped");
        }
    }
}

/// Employees whose displayed columns contain `query`, ignoring case.
///
/// An empty query matches everyone.
pub fn filter_employees<'a>(employees: &'a [EmployeeDraft], query: &str) -> Vec<&'a EmployeeDraft> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return employees.iter().collect();
    }

    employees
        .iter()
        .filter(|e| display_columns(e).iter().any(|col| col.to_lowercase().contains(&query)))
        .collect()
}

/// Values shown for an employee in the list, in column order.
pub fn display_columns(employee: &EmployeeDraft) -> [String; 9] {
    [
        employee.first_name.clone(),
        employee.last_name.clone(),
        format_date(employee.start_date),
        employee.department_label().to_string(),
        format_date(employee.birth_date),
        employee.street.clone(),
        employee.city.clone(),
        employee.state_value().to_string(),
        employee.zip_code.clone(),
    ]
}

/// Paging state for the employee list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_size: usize,
    /// Zero-based.
    pub page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZES[0],
            page: 0,
        }
    }
}

impl Pagination {
    /// Number of pages for `total` rows. Always at least one.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Pull the current page back into range after the row count changed.
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.page_count(total) - 1);
    }

    /// Row index range shown on the current page.
    pub fn page_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < self.page_count(total)
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// "Showing X to Y of Z entries" summary.
    pub fn summary(&self, total: usize) -> String {
        let range = self.page_range(total);
        if range.is_empty() {
            return format!("Showing 0 to 0 of {total} entries");
        }
        format!("Showing {} to {} of {} entries", range.start + 1, range.end, total)
    }
}
