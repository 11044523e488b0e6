use serde::{Deserialize, Serialize};

/// One person record as stored in the employee table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub department: String,
    pub email: String,
}

/// Employee data for insertion; storage assigns the id.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub email: String,
}

/// Replacement values for every employee field except the id.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateEmployee {
    pub name: String,
    pub department: String,
    pub email: String,
}
