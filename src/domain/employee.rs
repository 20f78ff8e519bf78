//! The `Employee` record and its request payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Generated by the store on creation; never changes.
    #[schema(value_type = String)]
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "NYC")]
    pub location: String,
    #[schema(example = "Engineer")]
    pub position: String,
    #[schema(example = 90000)]
    pub salary: f64,
    /// Set once at creation.
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Mints a fresh record from validated fields.
    pub fn from_draft(draft: EmployeeDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            location: draft.location,
            position: draft.position,
            salary: draft.salary,
            created_at: Utc::now(),
        }
    }

    /// Replaces the four mutable fields, keeping `id` and `created_at`.
    pub fn apply(&mut self, draft: EmployeeDraft) {
        self.name = draft.name;
        self.location = draft.location;
        self.position = draft.position;
        self.salary = draft.salary;
    }
}

/// Salary as it arrives on the wire: a number, or the text of a form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryInput {
    Number(f64),
    Text(String),
}

/// Body of `POST /api/employeelist` and `PUT /api/employeelist/:id`.
///
/// Every field is optional here so that an absent field is reported as a
/// validation error instead of a body parse failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmployeePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "NYC")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Engineer")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<f64>, example = 90000)]
    pub salary: Option<SalaryInput>,
}

/// The four required fields after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub location: String,
    pub position: String,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required (missing `{0}`)")]
    MissingField(&'static str),
    #[error("Salary must be a non-zero number")]
    InvalidSalary,
}

impl EmployeePayload {
    pub fn new(name: &str, location: &str, position: &str, salary: f64) -> Self {
        Self {
            name: Some(name.to_string()),
            location: Some(location.to_string()),
            position: Some(position.to_string()),
            salary: Some(SalaryInput::Number(salary)),
        }
    }

    /// Checks fields in order and stops at the first failure.
    pub fn validate(&self) -> Result<EmployeeDraft, ValidationError> {
        let name = required_text("name", self.name.as_deref())?;
        let location = required_text("location", self.location.as_deref())?;
        let position = required_text("position", self.position.as_deref())?;
        let salary = required_salary(self.salary.as_ref())?;
        Ok(EmployeeDraft {
            name,
            location,
            position,
            salary,
        })
    }
}

/// Whitespace-only counts as empty; accepted values are kept as sent.
fn required_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn required_salary(value: Option<&SalaryInput>) -> Result<f64, ValidationError> {
    let salary = match value {
        None => return Err(ValidationError::MissingField("salary")),
        Some(SalaryInput::Number(n)) => *n,
        Some(SalaryInput::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(ValidationError::MissingField("salary"));
            }
            s.parse::<f64>().map_err(|_| ValidationError::InvalidSalary)?
        }
    };
    // Zero is the empty salary; negative amounts are allowed.
    if !salary.is_finite() || salary == 0.0 {
        return Err(ValidationError::InvalidSalary);
    }
    Ok(salary)
}
