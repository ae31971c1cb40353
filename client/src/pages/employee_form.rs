//! Form models behind the admin entry form and the detail edit form.
//!
//! DESIGN
//! ======
//! Inputs are kept as raw strings keyed by a typed field enum so the views
//! can render every input from one table. Conversion to wire payloads
//! happens once, on submit, and returns the notice text on failure.

#[cfg(test)]
#[path = "employee_form_test.rs"]
mod employee_form_test;

use crate::net::types::{
    Choice, ContactInfo, ContactInfoPatch, Department, Employee, EmployeeFields, EmployeePatch, EmploymentInfo,
    EmploymentInfoPatch, EmploymentStatus, EmploymentType, Gender,
};
use crate::util::hire_dates;
use crate::util::validation::is_email;

pub const MISSING_REQUIRED: &str = "Please fill all required fields";
pub const INVALID_WORK_EMAIL: &str = "Invalid work email address";
pub const INVALID_HIRE_DATE: &str = "Hire date must be a valid date";
pub const NOTHING_CHANGED: &str = "No changes to save";
pub const NO_FILE: &str = "Please select a file to upload.";
pub const UNSUPPORTED_FILE: &str = "Only .xlsx and .csv files can be imported";

/// Extensions accepted by the bulk import.
pub const UPLOAD_EXTENSIONS: [&str; 2] = ["xlsx", "csv"];

/// Display labels of every value of `C`, in declaration order.
pub fn choice_labels<C: Choice>() -> Vec<&'static str> {
    C::ALL.iter().map(|c| c.label()).collect()
}

/// How an input is rendered.
#[derive(Clone, Copy, Debug)]
pub enum InputKind {
    Text,
    Email,
    Date,
    Url,
    /// A `<select>`; `optional` adds a blank first entry.
    Select { options: fn() -> Vec<&'static str>, optional: bool },
}

/// Check a picked file name before upload.
///
/// # Errors
///
/// Returns the notice text when no file is picked or its extension is not
/// one of [`UPLOAD_EXTENSIONS`].
pub fn validate_upload_name(name: Option<&str>) -> Result<(), &'static str> {
    let name = name.map(str::trim).filter(|n| !n.is_empty()).ok_or(NO_FILE)?;
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()).ok_or(UNSUPPORTED_FILE)?;
    if UPLOAD_EXTENSIONS.contains(&ext.as_str()) { Ok(()) } else { Err(UNSUPPORTED_FILE) }
}

fn non_blank(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_owned())
}

// =============================================================================
// MANUAL ENTRY
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManualField {
    FullName,
    EmployeeId,
    DateOfBirth,
    Gender,
    Nationality,
    PhotoUrl,
    HomeAddress,
    WorkPhone,
    WorkEmail,
    PersonalPhone,
    PersonalEmail,
    JobTitle,
    Department,
    HireDate,
    EmploymentType,
    Status,
    Manager,
    UserAccount,
}

/// Form sections in render order.
pub const MANUAL_SECTIONS: [(&str, &[ManualField]); 4] = [
    (
        "Personal",
        &[
            ManualField::FullName,
            ManualField::EmployeeId,
            ManualField::DateOfBirth,
            ManualField::Gender,
            ManualField::Nationality,
            ManualField::PhotoUrl,
        ],
    ),
    (
        "Contact",
        &[
            ManualField::HomeAddress,
            ManualField::WorkPhone,
            ManualField::WorkEmail,
            ManualField::PersonalPhone,
            ManualField::PersonalEmail,
        ],
    ),
    (
        "Employment",
        &[
            ManualField::JobTitle,
            ManualField::Department,
            ManualField::HireDate,
            ManualField::EmploymentType,
            ManualField::Status,
            ManualField::Manager,
        ],
    ),
    ("Account", &[ManualField::UserAccount]),
];

impl ManualField {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::EmployeeId => "Employee ID",
            Self::DateOfBirth => "Date of birth",
            Self::Gender => "Gender",
            Self::Nationality => "Nationality",
            Self::PhotoUrl => "Photo URL",
            Self::HomeAddress => "Home address",
            Self::WorkPhone => "Work phone",
            Self::WorkEmail => "Work email",
            Self::PersonalPhone => "Personal phone",
            Self::PersonalEmail => "Personal email",
            Self::JobTitle => "Job title",
            Self::Department => "Department",
            Self::HireDate => "Hire date",
            Self::EmploymentType => "Employment type",
            Self::Status => "Status",
            Self::Manager => "Manager ID",
            Self::UserAccount => "User account ID",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Self::DateOfBirth | Self::HireDate => InputKind::Date,
            Self::WorkEmail | Self::PersonalEmail => InputKind::Email,
            Self::PhotoUrl => InputKind::Url,
            Self::Gender => InputKind::Select { options: choice_labels::<Gender>, optional: true },
            Self::Department => InputKind::Select { options: choice_labels::<Department>, optional: true },
            Self::EmploymentType => InputKind::Select { options: choice_labels::<EmploymentType>, optional: false },
            Self::Status => InputKind::Select { options: choice_labels::<EmploymentStatus>, optional: false },
            _ => InputKind::Text,
        }
    }

    pub fn required(self) -> bool {
        matches!(self, Self::FullName | Self::EmployeeId | Self::JobTitle | Self::HireDate | Self::WorkEmail)
    }
}

const MANUAL_FIELD_COUNT: usize = ManualField::UserAccount as usize + 1;

/// Raw inputs of the manual-entry form, indexed by [`ManualField`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManualEmployeeForm {
    values: [String; MANUAL_FIELD_COUNT],
}

impl Default for ManualEmployeeForm {
    fn default() -> Self {
        let mut form = Self { values: std::array::from_fn(|_| String::new()) };
        form.set(ManualField::EmploymentType, EmploymentType::default().label().to_owned());
        form.set(ManualField::Status, EmploymentStatus::default().label().to_owned());
        form
    }
}

impl ManualEmployeeForm {
    pub fn set(&mut self, field: ManualField, value: String) {
        self.values[field as usize] = value;
    }

    pub fn get(&self, field: ManualField) -> &str {
        &self.values[field as usize]
    }

    fn optional(&self, field: ManualField) -> Option<String> {
        non_blank(self.get(field))
    }

    /// Build the create payload.
    ///
    /// # Errors
    ///
    /// Returns the notice text when a required field is blank, the work
    /// email is malformed or the hire date does not parse.
    pub fn to_fields(&self) -> Result<EmployeeFields, &'static str> {
        use ManualField as F;

        let missing = MANUAL_SECTIONS
            .iter()
            .flat_map(|(_, fields)| fields.iter())
            .any(|f| f.required() && self.get(*f).trim().is_empty());
        if missing {
            return Err(MISSING_REQUIRED);
        }
        let work_email = self.get(F::WorkEmail).trim();
        if !is_email(work_email) {
            return Err(INVALID_WORK_EMAIL);
        }
        let hire_date = hire_dates::parse_date(self.get(F::HireDate)).ok_or(INVALID_HIRE_DATE)?;

        Ok(EmployeeFields {
            full_name: self.get(F::FullName).trim().to_owned(),
            employee_id: self.get(F::EmployeeId).trim().to_owned(),
            date_of_birth: self.optional(F::DateOfBirth),
            gender: Gender::from_label(self.get(F::Gender)),
            nationality: self.optional(F::Nationality),
            photo_url: self.optional(F::PhotoUrl),
            employment_info: EmploymentInfo {
                job_title: self.get(F::JobTitle).trim().to_owned(),
                manager: self.optional(F::Manager),
                department: Department::from_label(self.get(F::Department)),
                hire_date: hire_dates::format_date(hire_date),
                employment_type: EmploymentType::from_label(self.get(F::EmploymentType)).unwrap_or_default(),
                status: EmploymentStatus::from_label(self.get(F::Status)).unwrap_or_default(),
                termination_date: None,
            },
            contact_info: ContactInfo {
                home_address: self.optional(F::HomeAddress),
                personal_phone_number: self.optional(F::PersonalPhone),
                work_phone_number: self.optional(F::WorkPhone),
                personal_email: self.optional(F::PersonalEmail),
                work_email: work_email.to_owned(),
            },
            user_account: self.optional(F::UserAccount),
        })
    }
}

// =============================================================================
// DETAIL EDIT
// =============================================================================

/// Fields an admin can change from the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    FullName,
    Nationality,
    JobTitle,
    Department,
    EmploymentType,
    Status,
    TerminationDate,
    WorkEmail,
    WorkPhone,
    HomeAddress,
}

impl EditField {
    pub const ALL: [Self; 10] = [
        Self::FullName,
        Self::Nationality,
        Self::JobTitle,
        Self::Department,
        Self::EmploymentType,
        Self::Status,
        Self::TerminationDate,
        Self::WorkEmail,
        Self::WorkPhone,
        Self::HomeAddress,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Nationality => "Nationality",
            Self::JobTitle => "Job title",
            Self::Department => "Department",
            Self::EmploymentType => "Employment type",
            Self::Status => "Status",
            Self::TerminationDate => "Termination date",
            Self::WorkEmail => "Work email",
            Self::WorkPhone => "Work phone",
            Self::HomeAddress => "Home address",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Self::Department => InputKind::Select { options: choice_labels::<Department>, optional: true },
            Self::EmploymentType => InputKind::Select { options: choice_labels::<EmploymentType>, optional: false },
            Self::Status => InputKind::Select { options: choice_labels::<EmploymentStatus>, optional: false },
            Self::TerminationDate => InputKind::Date,
            Self::WorkEmail => InputKind::Email,
            _ => InputKind::Text,
        }
    }
}

/// Edit inputs seeded from a record; only changed inputs reach the patch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeEditForm {
    original: [String; EditField::ALL.len()],
    values: [String; EditField::ALL.len()],
}

fn read_field(employee: &Employee, field: EditField) -> String {
    let f = &employee.fields;
    let info = &f.employment_info;
    let contact = &f.contact_info;
    match field {
        EditField::FullName => f.full_name.clone(),
        EditField::Nationality => f.nationality.clone().unwrap_or_default(),
        EditField::JobTitle => info.job_title.clone(),
        EditField::Department => info.department.map(|d| d.label().to_owned()).unwrap_or_default(),
        EditField::EmploymentType => info.employment_type.label().to_owned(),
        EditField::Status => info.status.label().to_owned(),
        EditField::TerminationDate => info
            .termination_date
            .as_deref()
            .and_then(hire_dates::parse_date)
            .map(hire_dates::format_date)
            .unwrap_or_default(),
        EditField::WorkEmail => contact.work_email.clone(),
        EditField::WorkPhone => contact.work_phone_number.clone().unwrap_or_default(),
        EditField::HomeAddress => contact.home_address.clone().unwrap_or_default(),
    }
}

impl EmployeeEditForm {
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        let original = EditField::ALL.map(|f| read_field(employee, f));
        Self { values: original.clone(), original }
    }

    pub fn set(&mut self, field: EditField, value: String) {
        self.values[field as usize] = value;
    }

    pub fn get(&self, field: EditField) -> &str {
        &self.values[field as usize]
    }

    fn changed(&self, field: EditField) -> Option<String> {
        let value = self.values[field as usize].trim();
        (value != self.original[field as usize].trim()).then(|| value.to_owned())
    }

    /// Build a patch holding only the inputs that differ from the seed.
    ///
    /// # Errors
    ///
    /// Returns the notice text when nothing changed, a changed required
    /// text is blank, or the work email is malformed.
    pub fn to_patch(&self) -> Result<EmployeePatch, &'static str> {
        use EditField as F;

        for field in [F::FullName, F::JobTitle, F::WorkEmail] {
            if self.changed(field).is_some_and(|v| v.is_empty()) {
                return Err(MISSING_REQUIRED);
            }
        }
        let work_email = self.changed(F::WorkEmail);
        if work_email.as_deref().is_some_and(|e| !is_email(e)) {
            return Err(INVALID_WORK_EMAIL);
        }

        let info = EmploymentInfoPatch {
            job_title: self.changed(F::JobTitle),
            department: self.changed(F::Department).map(|v| Department::from_label(&v)),
            employment_type: self.changed(F::EmploymentType).and_then(|v| EmploymentType::from_label(&v)),
            status: self.changed(F::Status).and_then(|v| EmploymentStatus::from_label(&v)),
            termination_date: self.changed(F::TerminationDate).map(|v| Some(v).filter(|d| !d.is_empty())),
        };
        let contact = ContactInfoPatch {
            work_email,
            work_phone_number: self.changed(F::WorkPhone),
            home_address: self.changed(F::HomeAddress),
        };
        let patch = EmployeePatch {
            full_name: self.changed(F::FullName),
            nationality: self.changed(F::Nationality),
            employment_info: (info != EmploymentInfoPatch::default()).then_some(info),
            contact_info: (contact != ContactInfoPatch::default()).then_some(contact),
        };
        if patch.is_empty() { Err(NOTHING_CHANGED) } else { Ok(patch) }
    }
}
