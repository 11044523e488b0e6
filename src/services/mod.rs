pub mod employee;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
