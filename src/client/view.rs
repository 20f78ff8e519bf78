//! Form-and-list view state.
//!
//! Every mutation follows the same sequence: issue the request, then
//! re-fetch the whole list, then re-render. The list is never patched locally.

use crate::client::api::EmployeeApi;
use crate::domain::employee::{Employee, EmployeePayload, SalaryInput};
use std::fmt::Write as _;
use uuid::Uuid;

pub const FETCH_ERROR: &str = "Failed to fetch employees";
pub const SAVE_ERROR: &str = "Failed to save employee";
pub const DELETE_ERROR: &str = "Failed to delete employee";
pub const EMPTY_LIST: &str = "No employees found. Add your first employee above!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Position,
    Location,
    Salary,
}

impl FormField {
    /// Order in which the form presents its inputs.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Position,
        FormField::Location,
        FormField::Salary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Position => "Position",
            FormField::Location => "Location",
            FormField::Salary => "Salary",
        }
    }
}

/// Text buffer behind the four form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub position: String,
    pub location: String,
    pub salary: String,
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            position: employee.position.clone(),
            location: employee.location.clone(),
            salary: employee.salary.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Position => &self.position,
            FormField::Location => &self.location,
            FormField::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Position => &mut self.position,
            FormField::Location => &mut self.location,
            FormField::Salary => &mut self.salary,
        };
        *slot = value.into();
    }

    /// Sends the inputs as typed; the server does the validating.
    pub fn to_payload(&self) -> EmployeePayload {
        EmployeePayload {
            name: Some(self.name.clone()),
            location: Some(self.location.clone()),
            position: Some(self.position.clone()),
            salary: Some(SalaryInput::Text(self.salary.clone())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Viewing,
    Editing(Uuid),
}

pub struct ClientView<A> {
    api: A,
    employees: Vec<Employee>,
    form: EmployeeForm,
    editing_id: Option<Uuid>,
    loading: bool,
    error: Option<String>,
}

impl<A: EmployeeApi> ClientView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            employees: Vec::new(),
            form: EmployeeForm::default(),
            editing_id: None,
            loading: false,
            error: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mode(&self) -> ViewMode {
        match self.editing_id {
            Some(id) => ViewMode::Editing(id),
            None => ViewMode::Viewing,
        }
    }

    /// Replaces the list with the server's. Returns false on failure, leaving
    /// the old list in place.
    pub async fn refresh(&mut self) -> bool {
        self.loading = true;
        let ok = self.fetch().await;
        self.loading = false;
        ok
    }

    async fn fetch(&mut self) -> bool {
        match self.api.list().await {
            Ok(employees) => {
                self.employees = employees;
                self.error = None;
                true
            }
            Err(e) => {
                log::warn!("fetching employees failed: {}", e);
                self.error = Some(FETCH_ERROR.to_string());
                false
            }
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn begin_edit(&mut self, employee: &Employee) {
        self.form = EmployeeForm::from_employee(employee);
        self.editing_id = Some(employee.id);
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.form = EmployeeForm::default();
        self.editing_id = None;
    }

    /// Creates or updates depending on the editing target.
    ///
    /// On success the form is reset and the list re-fetched. On failure the
    /// form, the editing target and the list are left as they were.
    pub async fn submit(&mut self) -> bool {
        self.loading = true;
        let payload = self.form.to_payload();
        let result = match self.editing_id {
            Some(id) => self.api.update(id, &payload).await,
            None => self.api.create(&payload).await,
        };
        let ok = match result {
            Ok(saved) => {
                log::debug!("saved employee {}", saved.id);
                self.reset_form();
                self.fetch().await;
                true
            }
            Err(e) => {
                log::warn!("saving employee failed: {}", e);
                self.error = Some(SAVE_ERROR.to_string());
                false
            }
        };
        self.loading = false;
        ok
    }

    /// Deletes after `confirm` agrees. A declined confirmation issues no request.
    pub async fn delete(&mut self, id: Uuid, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }
        self.loading = true;
        let ok = match self.api.delete(id).await {
            Ok(_) => {
                self.fetch().await;
                true
            }
            Err(e) => {
                log::warn!("deleting employee {} failed: {}", id, e);
                self.error = Some(DELETE_ERROR.to_string());
                false
            }
        };
        self.loading = false;
        ok
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let heading = match self.mode() {
            ViewMode::Viewing => "Add New Employee",
            ViewMode::Editing(_) => "Edit Employee",
        };
        let _ = writeln!(out, "== {} ==", heading);
        if let Some(error) = &self.error {
            let _ = writeln!(out, "! {}", error);
        }
        for field in FormField::ALL {
            let _ = writeln!(out, "  {}: {}", field.label(), self.form.get(field));
        }

        let _ = writeln!(out, "\n== Employee List ==");
        if self.loading && self.employees.is_empty() {
            let _ = writeln!(out, "Loading employees...");
        } else if self.employees.is_empty() {
            let _ = writeln!(out, "{}", EMPTY_LIST);
        }
        for (idx, e) in self.employees.iter().enumerate() {
            let _ = writeln!(
                out,
                "[{}] {} | {} | {} | ${} | created {}",
                idx + 1,
                e.name,
                e.position,
                e.location,
                format_salary(e.salary),
                e.created_at.format("%Y-%m-%d")
            );
        }
        out
    }
}

/// Thousands-separated salary, with cents only when there are any.
pub fn format_salary(salary: f64) -> String {
    let cents = (salary.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if salary < 0.0 { "-" } else { "" };
    if frac == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, frac)
    }
}
