//! CSV export of the (filtered) employee list.
//!
//! Rendering is pure so it can be tested natively; only [`download_csv`]
//! touches the browser.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use super::hire_dates::{HireDateRange, format_date, parse_date};
use crate::net::types::{Choice, Employee};

/// Column headers, in output order.
pub const COLUMNS: [&str; 9] = [
    "Full Name",
    "Employee ID",
    "Job Title",
    "Department",
    "Hire Date",
    "Employment Type",
    "Status",
    "Work Email",
    "Work Phone",
];

/// Quote a cell when it contains a comma, quote or newline.
#[must_use]
pub fn escape_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

fn row(employee: &Employee) -> [String; 9] {
    let fields = &employee.fields;
    let job = &fields.employment_info;
    let contact = &fields.contact_info;
    let hire_date = parse_date(&job.hire_date).map_or_else(|| job.hire_date.clone(), format_date);
    [
        fields.full_name.clone(),
        fields.employee_id.clone(),
        job.job_title.clone(),
        job.department.map(|d| d.label().to_owned()).unwrap_or_default(),
        hire_date,
        job.employment_type.label().to_owned(),
        job.status.label().to_owned(),
        contact.work_email.clone(),
        contact.work_phone_number.clone().unwrap_or_default(),
    ]
}

/// Render `employees` as CSV with a header line. Every line ends in `\n`.
#[must_use]
pub fn render_csv(employees: &[Employee]) -> String {
    let mut output = COLUMNS.join(",") + "\n";
    for employee in employees {
        let cells: Vec<String> = row(employee).iter().map(|c| escape_cell(c)).collect();
        output.push_str(&cells.join(","));
        output.push('\n');
    }
    output
}

/// Download name describing the filter that produced the export.
#[must_use]
pub fn file_name(range: &HireDateRange) -> String {
    if range.is_open() {
        return "employees.csv".to_owned();
    }
    let start = range.start.map_or_else(|| "begin".to_owned(), format_date);
    let end = range.end.map_or_else(|| "now".to_owned(), format_date);
    format!("employees_{start}_{end}.csv")
}

/// Offer `csv` to the user as a `text/csv` file download.
///
/// # Errors
///
/// Returns an error string if the Blob, object URL or anchor cannot be created.
#[cfg(feature = "hydrate")]
pub fn download_csv(name: &str, csv: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(csv));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("blob: {e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("object url: {e:?}"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("anchor: {e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(name);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
