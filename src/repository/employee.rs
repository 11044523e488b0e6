//! Repository implementation for employee records.

use diesel::prelude::*;

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::models::employee::{
    Employee as DbEmployee, NewEmployee as DbNewEmployee, UpdateEmployee as DbUpdateEmployee,
};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, clamp_page};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, EmployeeListQuery, EmployeeReader, EmployeeWriter, SortOrder,
};

impl EmployeeReader for DieselRepository {
    fn get_employee_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let employee = employees::table
            .find(id)
            .first::<DbEmployee>(&mut conn)
            .optional()?;

        Ok(employee.map(Into::into))
    }

    fn list_employees(
        &self,
        query: EmployeeListQuery,
    ) -> RepositoryResult<(usize, Vec<Employee>)> {
        use crate::schema::employees;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = employees::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(name) = &query.search_name {
                items = items.filter(employees::name.like(format!("%{name}%")));
            }
            if let Some(dept) = &query.search_dept {
                items = items.filter(employees::department.like(format!("%{dept}%")));
            }
            items
        };

        // Count and fetch share one transaction so the clamped offset is
        // computed against the same rows the window is read from.
        let (total, items) = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let total = query_builder().count().get_result::<i64>(conn)? as usize;

            let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
            let page = clamp_page(query.page, total_pages) as i64;
            let per_page = DEFAULT_ITEMS_PER_PAGE as i64;

            let window = query_builder();
            // Ties fall back to the id so page windows stay stable.
            let window = match query.sort {
                SortOrder::NameAsc => window.order((employees::name.asc(), employees::id.asc())),
                SortOrder::NameDesc => window.order((employees::name.desc(), employees::id.asc())),
                SortOrder::DeptAsc => {
                    window.order((employees::department.asc(), employees::id.asc()))
                }
                SortOrder::DeptDesc => {
                    window.order((employees::department.desc(), employees::id.asc()))
                }
                SortOrder::IdAsc => window.order(employees::id.asc()),
            };

            let items = window
                .limit(per_page)
                .offset((page - 1) * per_page)
                .load::<DbEmployee>(conn)?;

            Ok((total, items))
        })?;

        Ok((total, items.into_iter().map(Into::into).collect()))
    }

    fn list_all_employees(&self) -> RepositoryResult<Vec<Employee>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let rows = employees::table
            .order(employees::id.asc())
            .load::<DbEmployee>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;

        let db_new_employee: DbNewEmployee = new_employee.into();

        let employee = diesel::insert_into(employees::table)
            .values(&db_new_employee)
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(employee.into())
    }

    fn update_employee(
        &self,
        employee_id: i32,
        updates: &UpdateEmployee,
    ) -> RepositoryResult<Employee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;

        let changes: DbUpdateEmployee = updates.into();

        let employee = diesel::update(employees::table.find(employee_id))
            .set(&changes)
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(employee.into())
    }

    fn delete_employee(&self, employee_id: i32) -> RepositoryResult<Employee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;

        let employee = conn.transaction::<DbEmployee, diesel::result::Error, _>(|conn| {
            let employee = employees::table
                .find(employee_id)
                .first::<DbEmployee>(conn)?;

            diesel::delete(employees::table.find(employee_id)).execute(conn)?;

            Ok(employee)
        })?;

        Ok(employee.into())
    }
}
