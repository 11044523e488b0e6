use crate::db::DbPool;
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod employee;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Sort orders accepted by the employee list, parsed from the `sortOrder`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    DeptAsc,
    DeptDesc,
    #[default]
    IdAsc,
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        match value {
            "name_asc" => SortOrder::NameAsc,
            "name_desc" => SortOrder::NameDesc,
            "dept_asc" => SortOrder::DeptAsc,
            "dept_desc" => SortOrder::DeptDesc,
            // Unrecognized keys select the id default rather than erroring.
            _ => SortOrder::IdAsc,
        }
    }
}

impl SortOrder {
    /// Key echoed back into list links; the id default has no key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::NameAsc => "name_asc",
            SortOrder::NameDesc => "name_desc",
            SortOrder::DeptAsc => "dept_asc",
            SortOrder::DeptDesc => "dept_desc",
            SortOrder::IdAsc => "",
        }
    }
}

/// Read query over the employee table: optional substring filters on name
/// and department (always AND-composed), a sort order and the requested
/// page.
#[derive(Debug, Clone)]
pub struct EmployeeListQuery {
    pub search_name: Option<String>,
    pub search_dept: Option<String>,
    pub sort: SortOrder,
    pub page: usize,
}

impl EmployeeListQuery {
    pub fn new() -> Self {
        Self {
            search_name: None,
            search_dept: None,
            sort: SortOrder::default(),
            page: 1,
        }
    }

    pub fn search_name(mut self, name: impl Into<String>) -> Self {
        self.search_name = Some(name.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn search_dept(mut self, dept: impl Into<String>) -> Self {
        self.search_dept = Some(dept.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

impl Default for EmployeeListQuery {
    fn default() -> Self {
        Self::new()
    }
}

pub trait EmployeeReader {
    fn get_employee_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>>;
    /// Returns the total number of records matching the filters together
    /// with the records inside the clamped page window.
    fn list_employees(&self, query: EmployeeListQuery)
    -> RepositoryResult<(usize, Vec<Employee>)>;
    /// Every record in id order, for the CSV export.
    fn list_all_employees(&self) -> RepositoryResult<Vec<Employee>>;
}

pub trait EmployeeWriter {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
    fn update_employee(
        &self,
        employee_id: i32,
        updates: &UpdateEmployee,
    ) -> RepositoryResult<Employee>;
    /// Removes the record and returns it, so callers can report what was
    /// deleted.
    fn delete_employee(&self, employee_id: i32) -> RepositoryResult<Employee>;
}

/// Diesel-backed repository handing out pooled SQLite connections.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> Result<crate::db::DbConnection, RepositoryError> {
        Ok(self.pool.get()?)
    }
}
