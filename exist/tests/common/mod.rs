//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for the company-shaped documents
//! used throughout the integration suites.

use exist::{Map, Value};

/// Builder for company documents with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::CompanyFixture;
/// let company = CompanyFixture::new()
///     .with_employee("Benjy")
///     .with_name_getters()
///     .build();
/// ```
#[allow(dead_code)]
pub struct CompanyFixture {
    employees: Vec<Option<String>>,
    getters: bool,
}

#[allow(dead_code)]
impl CompanyFixture {
    /// Creates a fixture with an empty `employees` array.
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            getters: false,
        }
    }

    /// Adds an employee with a `name`.
    pub fn with_employee(mut self, name: impl Into<String>) -> Self {
        self.employees.push(Some(name.into()));
        self
    }

    /// Adds an employee without any fields.
    pub fn with_blank_employee(mut self) -> Self {
        self.employees.push(None);
        self
    }

    /// Gives every employee a `getName` method returning its own `name`.
    pub fn with_name_getters(mut self) -> Self {
        self.getters = true;
        self
    }

    /// Builds the document: `{ employees: [ { name?, getName? }, ... ] }`.
    pub fn build(self) -> Value {
        let employees = self
            .employees
            .into_iter()
            .map(|name| {
                let mut employee = Map::new();
                if let Some(name) = name {
                    employee.insert("name".to_string(), Value::from(name));
                }
                if self.getters {
                    employee.insert("getName".to_string(), name_getter());
                }
                Value::Map(employee)
            })
            .collect();

        let mut company = Map::new();
        company.insert("employees".to_string(), Value::Array(employees));
        Value::Map(company)
    }
}

/// A method returning the receiver's `name` member.
pub fn name_getter() -> Value {
    Value::function(|this, _args| this["name"].clone())
}

/// Shorthand for `{ employees: [ { name: "Benjy" } ] }`.
#[allow(dead_code)]
pub fn benjy_company() -> Value {
    CompanyFixture::new().with_employee("Benjy").build()
}

/// Shorthand for `{ employees: [ {} ] }`.
#[allow(dead_code)]
pub fn blank_company() -> Value {
    CompanyFixture::new().with_blank_employee().build()
}
