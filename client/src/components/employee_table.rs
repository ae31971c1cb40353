//! Employee list table for the admin dashboard.

use leptos::prelude::*;

use crate::net::types::{Choice, Employee};
use crate::util::auth::employee_detail_route;
use crate::util::hire_dates;

/// Table of `rows`, each name linking to the detail view.
#[component]
pub fn EmployeeTable(#[prop(into)] rows: Signal<Vec<Employee>>) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=|| view! { <p class="employee-table__empty">"No employees match."</p> }
        >
            <table class="employee-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Employee ID"</th>
                        <th>"Job title"</th>
                        <th>"Department"</th>
                        <th>"Hire date"</th>
                        <th>"Status"</th>
                        <th>"Work email"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|e| view! { <EmployeeRow employee=e/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn EmployeeRow(employee: Employee) -> impl IntoView {
    let href = employee_detail_route(&employee.id);
    let f = employee.fields;
    let hire_date = hire_dates::parse_date(&f.employment_info.hire_date)
        .map_or_else(|| f.employment_info.hire_date.clone(), hire_dates::format_date);
    let department = f.employment_info.department.map(Choice::label).unwrap_or("-");

    view! {
        <tr>
            <td><a href=href>{f.full_name}</a></td>
            <td>{f.employee_id}</td>
            <td>{f.employment_info.job_title}</td>
            <td>{department}</td>
            <td>{hire_date}</td>
            <td>{f.employment_info.status.label()}</td>
            <td>{f.contact_info.work_email}</td>
        </tr>
    }
}
