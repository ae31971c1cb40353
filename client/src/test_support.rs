//! Helpers shared by unit tests.

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use crate::net::types::{ContactInfo, Employee, EmployeeFields, EmploymentInfo, Role, User};

/// Poll a future once and return its output.
///
/// Off-browser, every remote call resolves immediately with
/// `ApiError::Unavailable`, so async operations complete on the first poll.
pub fn block_on_ready<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}

/// An employee with the required fields filled in.
pub fn employee(id: &str, full_name: &str, hire_date: &str) -> Employee {
    Employee {
        id: id.to_owned(),
        fields: EmployeeFields {
            full_name: full_name.to_owned(),
            employee_id: format!("EMP-{id}"),
            employment_info: EmploymentInfo {
                job_title: "Engineer".to_owned(),
                hire_date: hire_date.to_owned(),
                ..EmploymentInfo::default()
            },
            contact_info: ContactInfo {
                work_email: format!("{id}@corp.example"),
                ..ContactInfo::default()
            },
            ..EmployeeFields::default()
        },
    }
}

pub fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role,
        is_verified: true,
    }
}
