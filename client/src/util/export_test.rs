use super::*;
use crate::net::types::{Department, EmploymentStatus};
use crate::test_support::employee;
use time::macros::date;

#[test]
fn escape_plain_value_untouched() {
    assert_eq!(escape_cell("Engineer"), "Engineer");
}

#[test]
fn escape_quotes_commas_and_newlines() {
    assert_eq!(escape_cell("Doe, Jane"), "\"Doe, Jane\"");
    assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_cell("line1\nline2"), "\"line1\nline2\"");
}

#[test]
fn empty_list_renders_header_only() {
    assert_eq!(
        render_csv(&[]),
        "Full Name,Employee ID,Job Title,Department,Hire Date,Employment Type,Status,Work Email,Work Phone\n"
    );
}

#[test]
fn row_uses_fixed_column_order() {
    let mut e = employee("a", "Doe, Jane", "2022-06-15T00:00:00.000Z");
    e.fields.employment_info.department = Some(Department::MobileDev);
    e.fields.employment_info.status = EmploymentStatus::OnLeave;
    e.fields.contact_info.work_phone_number = Some("555-0101".to_owned());

    let csv = render_csv(&[e]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "\"Doe, Jane\",EMP-a,Engineer,Mobile-Dev,2022-06-15,Full-time,On Leave,a@corp.example,555-0101"
    );
}

#[test]
fn missing_optionals_render_empty_cells() {
    let csv = render_csv(&[employee("b", "Bo", "not-a-date")]);
    let row = csv.lines().nth(1).expect("row");
    assert_eq!(row, "Bo,EMP-b,Engineer,,not-a-date,Full-time,Active,b@corp.example,");
}

#[test]
fn one_line_per_employee() {
    let list = vec![employee("a", "A", "2020-01-01"), employee("b", "B", "2020-01-02")];
    assert_eq!(render_csv(&list).lines().count(), 3);
}

#[test]
fn file_name_reflects_range() {
    assert_eq!(file_name(&HireDateRange::default()), "employees.csv");
    let both = HireDateRange { start: Some(date!(2022 - 01 - 01)), end: Some(date!(2022 - 12 - 31)) };
    assert_eq!(file_name(&both), "employees_2022-01-01_2022-12-31.csv");
    let start_only = HireDateRange { start: Some(date!(2022 - 01 - 01)), end: None };
    assert_eq!(file_name(&start_only), "employees_2022-01-01_now.csv");
    let end_only = HireDateRange { start: None, end: Some(date!(2022 - 01 - 01)) };
    assert_eq!(file_name(&end_only), "employees_begin_2022-01-01.csv");
}
