//! Database models shared across the employee repository.

pub mod config;
pub mod employee;
