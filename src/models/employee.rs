//! Diesel models backing the employee table.

use diesel::prelude::*;

use crate::domain::employee::{
    Employee as DomainEmployee, NewEmployee as DomainNewEmployee,
    UpdateEmployee as DomainUpdateEmployee,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::employees)]
/// Diesel model for [`crate::domain::employee::Employee`].
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub department: String,
    pub email: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
/// Insertable form of [`Employee`].
pub struct NewEmployee<'a> {
    pub name: &'a str,
    pub department: &'a str,
    pub email: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::employees)]
/// Data used when overwriting an [`Employee`] record.
pub struct UpdateEmployee<'a> {
    pub name: &'a str,
    pub department: &'a str,
    pub email: &'a str,
}

impl From<Employee> for DomainEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            department: employee.department,
            email: employee.email,
        }
    }
}

impl<'a> From<&'a DomainNewEmployee> for NewEmployee<'a> {
    fn from(employee: &'a DomainNewEmployee) -> Self {
        Self {
            name: &employee.name,
            department: &employee.department,
            email: &employee.email,
        }
    }
}

impl<'a> From<&'a DomainUpdateEmployee> for UpdateEmployee<'a> {
    fn from(employee: &'a DomainUpdateEmployee) -> Self {
        Self {
            name: &employee.name,
            department: &employee.department,
            email: &employee.email,
        }
    }
}
