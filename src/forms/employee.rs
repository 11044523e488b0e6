use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::domain::employee::{NewEmployee, UpdateEmployee};
use crate::forms::FieldError;

/// Upper bound on employee names, counted in characters.
pub const NAME_MAX_CHARS: usize = 10;

/// Checks the employee field rules shared by the create and edit forms:
/// a required name of at most [`NAME_MAX_CHARS`] characters, a required
/// department, and a well-formed email address.
///
/// Returns one entry per violated rule; an empty list means the input may
/// be persisted.
pub fn validate_employee_fields(name: &str, department: &str, email: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.push(FieldError::new(
            "name",
            format!("Name must be at most {NAME_MAX_CHARS} characters"),
        ));
    }

    if department.trim().is_empty() {
        errors.push(FieldError::new("department", "Department is required"));
    }

    if email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !email.validate_email() {
        errors.push(FieldError::new("email", "Email address is not valid"));
    }

    errors
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
/// Form data for creating an employee.
pub struct AddEmployeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub email: String,
}

impl AddEmployeeForm {
    pub fn validate(&self) -> Vec<FieldError> {
        validate_employee_fields(&self.name, &self.department, &self.email)
    }
}

impl From<&AddEmployeeForm> for NewEmployee {
    fn from(form: &AddEmployeeForm) -> Self {
        Self {
            name: form.name.clone(),
            department: form.department.clone(),
            email: form.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
/// Form data for overwriting an existing employee.
pub struct SaveEmployeeForm {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub email: String,
}

impl SaveEmployeeForm {
    pub fn validate(&self) -> Vec<FieldError> {
        validate_employee_fields(&self.name, &self.department, &self.email)
    }
}

impl From<&SaveEmployeeForm> for UpdateEmployee {
    fn from(form: &SaveEmployeeForm) -> Self {
        Self {
            name: form.name.clone(),
            department: form.department.clone(),
            email: form.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Form data for deleting an employee while keeping the caller's list
/// context for the redirect back.
pub struct DeleteEmployeeForm {
    pub id: i32,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default)]
    pub search_name: String,
    #[serde(default)]
    pub search_dept: String,
    #[serde(default)]
    pub sort_order: String,
}

fn default_page() -> usize {
    1
}
