//! Employee-records store.
//!
//! DESIGN
//! ======
//! Every operation runs `begin` before its request and exactly one of the
//! `apply_*` / `fail` reducers after it, so status always moves
//! `Loading -> Succeeded | Failed`. The server is the only source of truth:
//! replies are merged as received, last reducer wins.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use super::request::RequestStatus;
use crate::net::types::Employee;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeesState {
    /// Known employees in server order, with local appends at the end.
    pub items: Vec<Employee>,
    /// The employee a detail or self view is showing.
    pub current: Option<Employee>,
    pub status: RequestStatus,
}

impl EmployeesState {
    /// Mark a request as in flight. Clears any previous error.
    pub fn begin(&mut self) {
        self.status = RequestStatus::Loading;
    }

    /// Record a failed request.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = RequestStatus::Failed(message.into());
    }

    /// Append newly created records (one for manual entry, many for bulk).
    pub fn apply_created(&mut self, created: Vec<Employee>) {
        self.status = RequestStatus::Succeeded;
        self.items.extend(created);
    }

    /// Replace the whole list with a fresh fetch.
    pub fn apply_list(&mut self, employees: Vec<Employee>) {
        self.status = RequestStatus::Succeeded;
        self.items = employees;
    }

    /// Show a single fetched record.
    pub fn apply_current(&mut self, employee: Employee) {
        self.status = RequestStatus::Succeeded;
        self.current = Some(employee);
    }

    /// Store an updated record as current and splice it over the list entry
    /// with the same id. Records not yet in the list are not added.
    pub fn apply_updated(&mut self, employee: Employee) {
        self.status = RequestStatus::Succeeded;
        if let Some(slot) = self.items.iter_mut().find(|e| e.id == employee.id) {
            *slot = employee.clone();
        }
        self.current = Some(employee);
    }

    /// Drop the record with `id`; clear current if it was that record.
    pub fn apply_deleted(&mut self, id: &str) {
        self.status = RequestStatus::Succeeded;
        self.items.retain(|e| e.id != id);
        if self.current.as_ref().is_some_and(|e| e.id == id) {
            self.current = None;
        }
    }

    /// Reset to the initial state (used on logout).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.items.iter().find(|e| e.id == id)
    }
}
