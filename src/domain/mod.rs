//! Domain entities exposed by the employee service layer.

pub mod employee;
