//! Wire DTOs for the remote employee-records API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON (with Mongo-style `_id`
//! identifiers) so serde round-trips stay lossless. Enum variants serialize to
//! the same display strings the server stores (`"Web-Dev"`, `"On Leave"`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// Access level attached to a user account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular employee. Older servers send `"EMPLOYEE"` for this role.
    #[serde(alias = "EMPLOYEE")]
    User,
    Developer,
    Teamlead,
    Hr,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Developer => "DEVELOPER",
            Self::Teamlead => "TEAMLEAD",
            Self::Hr => "HR",
            Self::Admin => "ADMIN",
        }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// An authenticated user as returned by `/user/login` and `/user/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
}

/// Payload for `POST /user/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupData {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for `POST /user/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Partial profile update for `PUT /user/update`. Absent fields are left as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

// =============================================================================
// EMPLOYEE ENUMS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[default]
    #[serde(rename = "Web-Dev")]
    WebDev,
    #[serde(rename = "Mobile-Dev")]
    MobileDev,
    #[serde(rename = "Data-Analyst")]
    DataAnalyst,
    #[serde(rename = "HR")]
    Hr,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Intern,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[default]
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

/// Select-box helpers shared by the employee enums.
///
/// `label` is the exact wire string, so form `<option value>`s and CSV cells
/// use the same text the server stores.
pub trait Choice: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == raw)
    }
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female, Self::Other];

    fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl Choice for Department {
    const ALL: &'static [Self] = &[Self::WebDev, Self::MobileDev, Self::DataAnalyst, Self::Hr];

    fn label(self) -> &'static str {
        match self {
            Self::WebDev => "Web-Dev",
            Self::MobileDev => "Mobile-Dev",
            Self::DataAnalyst => "Data-Analyst",
            Self::Hr => "HR",
        }
    }
}

impl Choice for EmploymentType {
    const ALL: &'static [Self] = &[Self::FullTime, Self::PartTime, Self::Contract, Self::Intern];

    fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
            Self::Intern => "Intern",
        }
    }
}

impl Choice for EmploymentStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::OnLeave, Self::Terminated];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Terminated => "Terminated",
        }
    }
}

// =============================================================================
// EMPLOYEE RECORDS
// =============================================================================

/// Job-related fields nested under `employmentInfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentInfo {
    pub job_title: String,
    /// Identifier of the managing employee, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    /// ISO date (`YYYY-MM-DD`) or full ISO timestamp.
    pub hire_date: String,
    pub employment_type: EmploymentType,
    pub status: EmploymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<String>,
}

/// Contact fields nested under `contactInfo`. Only the work email is required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_email: Option<String>,
    pub work_email: String,
}

/// The fields of an employee record a client may author.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    pub full_name: String,
    /// Human-facing employee code (distinct from the record `_id`).
    pub employee_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub employment_info: EmploymentInfo,
    pub contact_info: ContactInfo,
    /// Identifier of the linked login account, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_account: Option<String>,
}

/// A stored employee record: the authored fields plus the server identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: EmployeeFields,
}

/// Partial employment update nested inside [`EmployeePatch`].
///
/// `department` and `termination_date` are clearable: `Some(None)` is sent
/// as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Option<Department>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmploymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_date: Option<Option<String>>,
}

/// Partial contact update nested inside [`EmployeePatch`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_address: Option<String>,
}

/// Body for `PATCH /employee/:id`. Only present fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_info: Option<EmploymentInfoPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfoPatch>,
}

impl EmployeePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.nationality.is_none()
            && self.employment_info.is_none()
            && self.contact_info.is_none()
    }
}

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Common response body: `{success, message, user | employee | employees}`.
///
/// Every field is optional so one type can decode every endpoint's reply and
/// error bodies alike.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub employees: Option<Vec<Employee>>,
}
