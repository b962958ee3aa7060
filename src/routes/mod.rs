//! HTTP route modules for the HRMS service.
//!
//! - `employees`: CRUD over the Employee resource

pub mod employees;
