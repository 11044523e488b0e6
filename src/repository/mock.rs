//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repository::errors::RepositoryResult;
use crate::repository::{EmployeeListQuery, EmployeeReader, EmployeeWriter};

mock! {
    pub Repository {}

    impl EmployeeReader for Repository {
        fn get_employee_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>>;
        fn list_employees(
            &self,
            query: EmployeeListQuery,
        ) -> RepositoryResult<(usize, Vec<Employee>)>;
        fn list_all_employees(&self) -> RepositoryResult<Vec<Employee>>;
    }

    impl EmployeeWriter for Repository {
        fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
        fn update_employee(
            &self,
            employee_id: i32,
            updates: &UpdateEmployee,
        ) -> RepositoryResult<Employee>;
        fn delete_employee(&self, employee_id: i32) -> RepositoryResult<Employee>;
    }
}
