//! Client View: a form-and-list front end for the employee API.

pub mod api;
pub mod view;

pub use api::{ClientError, EmployeeApi, HttpEmployeeApi};
pub use view::{ClientView, EmployeeForm, FormField, ViewMode};
