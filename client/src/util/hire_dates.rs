//! Hire-date parsing and range filtering for the admin list.

#[cfg(test)]
#[path = "hire_dates_test.rs"]
mod hire_dates_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::Employee;

/// Parse `YYYY-MM-DD`, also accepting a full ISO timestamp by reading only
/// its date part. Blank or malformed input yields `None`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let date_part = raw.get(..10)?;
    Date::parse(date_part, format_description!("[year]-[month]-[day]")).ok()
}

/// Format a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Inclusive hire-date bounds; either side may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HireDateRange {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl HireDateRange {
    /// Build a range from raw `<input type="date">` values; blank means open.
    #[must_use]
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self { start: parse_date(start), end: parse_date(end) }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `employee` was hired inside the range.
    ///
    /// An open range admits everyone. Once a bound is set, a record whose
    /// hire date is missing or unparseable is excluded.
    #[must_use]
    pub fn contains(&self, employee: &Employee) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(hired) = parse_date(&employee.fields.employment_info.hire_date) else {
            return false;
        };
        self.start.is_none_or(|start| hired >= start) && self.end.is_none_or(|end| hired <= end)
    }

    /// Records inside the range, in their original order.
    #[must_use]
    pub fn filter(&self, employees: &[Employee]) -> Vec<Employee> {
        employees.iter().filter(|e| self.contains(e)).cloned().collect()
    }
}
