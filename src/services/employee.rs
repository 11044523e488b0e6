//! Services handling the employee list, form submissions and the CSV
//! export.

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::dto::employee::{EmployeeListData, ListQuery};
use crate::forms::employee::{AddEmployeeForm, SaveEmployeeForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated, clamp_page};
use crate::repository::errors::RepositoryError;
use crate::repository::{EmployeeListQuery, EmployeeReader, EmployeeWriter, SortOrder};
use crate::services::{ServiceError, ServiceResult};

/// Name of the attachment produced by the CSV export.
pub const EXPORT_FILE_NAME: &str = "EmployeeList.csv";

const CSV_HEADER: &str = "Id,Name,Department,Email";

/// Loads one page of the employee list for the index template.
///
/// Filters are trimmed and dropped when empty, unknown sort keys fall back
/// to ascending id order, and the requested page is clamped into the valid
/// range for the filtered set.
pub fn list_employees<R>(repo: &R, query: ListQuery) -> ServiceResult<EmployeeListData>
where
    R: EmployeeReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let sort = SortOrder::from(query.sort_order.as_deref().unwrap_or(""));

    let search_name = query
        .search_name
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let search_dept = query
        .search_dept
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = EmployeeListQuery::new().sort(sort).page(page);
    if let Some(name) = &search_name {
        list_query = list_query.search_name(name.clone());
    }
    if let Some(dept) = &search_dept {
        list_query = list_query.search_dept(dept.clone());
    }

    log::info!(
        "Listing employees: name={:?} dept={:?} sort={:?} page={page}",
        search_name,
        search_dept,
        sort
    );

    let (total, employees) = repo.list_employees(list_query).map_err(|err| {
        log::error!("Failed to list employees: {err}");
        ServiceError::from(err)
    })?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let page = clamp_page(page, total_pages);

    Ok(EmployeeListData {
        employees: Paginated::new(employees, page, total_pages),
        search_name,
        search_dept,
        sort_order: sort.as_str(),
    })
}

/// Fetches the employee shown in the edit form.
pub fn get_employee<R>(repo: &R, employee_id: i32) -> ServiceResult<Employee>
where
    R: EmployeeReader + ?Sized,
{
    repo.get_employee_by_id(employee_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the add-employee form and persists a new record.
pub fn create_employee<R>(repo: &R, form: &AddEmployeeForm) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let new_employee = NewEmployee::from(form);

    let employee = repo.create_employee(&new_employee).map_err(|err| {
        log::error!("Failed to create employee: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Created employee: {} ({})", employee.name, employee.department);

    Ok(employee)
}

/// Validates the edit form and overwrites every field of the record except
/// the id.
pub fn update_employee<R>(repo: &R, form: &SaveEmployeeForm) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let updates = UpdateEmployee::from(form);

    let employee = repo.update_employee(form.id, &updates).map_err(|err| {
        if !matches!(err, RepositoryError::NotFound) {
            log::error!("Failed to update employee {}: {err}", form.id);
        }
        ServiceError::from(err)
    })?;

    log::info!("Updated employee: {} ({})", employee.name, employee.department);

    Ok(employee)
}

/// Deletes the employee if present. Deletions are logged at warn level so
/// they stand out from routine writes.
pub fn delete_employee<R>(repo: &R, employee_id: i32) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let employee = repo.delete_employee(employee_id).map_err(|err| {
        if !matches!(err, RepositoryError::NotFound) {
            log::error!("Failed to delete employee {employee_id}: {err}");
        }
        ServiceError::from(err)
    })?;

    log::warn!("Deleted employee: {} ({})", employee.name, employee.department);

    Ok(employee)
}

/// Serializes the entire employee table, in id order, as CSV text.
///
/// Field values are written verbatim: an embedded comma or line break is
/// not quoted and corrupts the row layout. Kept as-is for compatibility
/// with the historical export format.
pub fn export_csv<R>(repo: &R) -> ServiceResult<String>
where
    R: EmployeeReader + ?Sized,
{
    let employees = repo.list_all_employees().map_err(|err| {
        log::error!("Failed to export employees: {err}");
        ServiceError::from(err)
    })?;

    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for employee in &employees {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            employee.id, employee.name, employee.department, employee.email
        ));
    }

    Ok(csv)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    #[test]
    fn create_rejects_invalid_forms_before_touching_storage() {
        // No expectations set: any repository call panics the test.
        let repo = MockRepository::new();
        let form = AddEmployeeForm {
            name: "Maximiliane".into(),
            department: "Engineering".into(),
            email: "max@example.com".into(),
        };

        let err = create_employee(&repo, &form).unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn update_rejects_invalid_forms_before_touching_storage() {
        let repo = MockRepository::new();
        let form = SaveEmployeeForm {
            id: 1,
            name: "Ann".into(),
            department: "QA".into(),
            email: "not-an-email".into(),
        };

        let err = update_employee(&repo, &form).unwrap_err();
        match err {
            ServiceError::Validation(errors) => {
                assert_eq!(errors[0].field, "email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn storage_failures_surface_as_repository_errors() {
        let mut repo = MockRepository::new();
        repo.expect_create_employee()
            .times(1)
            .returning(|_| Err(RepositoryError::ConnectionError("pool timeout".into())));

        let form = AddEmployeeForm {
            name: "Ann".into(),
            department: "QA".into(),
            email: "ann@example.com".into(),
        };

        let err = create_employee(&repo, &form).unwrap_err();
        assert!(matches!(err, ServiceError::Repository(_)));
    }

    #[test]
    fn delete_maps_missing_records_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_employee()
            .times(1)
            .returning(|_| Err(RepositoryError::NotFound));

        let err = delete_employee(&repo, 42).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn list_echoes_trimmed_filters_and_applied_sort() {
        let mut repo = MockRepository::new();
        repo.expect_list_employees()
            .times(1)
            .withf(|query| {
                query.search_name.as_deref() == Some("Ann")
                    && query.search_dept.is_none()
                    && query.sort == SortOrder::NameDesc
            })
            .returning(|_| Ok((0, Vec::new())));

        let data = list_employees(
            &repo,
            ListQuery {
                search_name: Some("  Ann  ".into()),
                search_dept: Some("   ".into()),
                sort_order: Some("name_desc".into()),
                page: None,
            },
        )
        .unwrap();

        assert_eq!(data.search_name.as_deref(), Some("Ann"));
        assert_eq!(data.search_dept, None);
        assert_eq!(data.sort_order, "name_desc");
        assert_eq!(data.employees.page, 1);
    }

    #[test]
    fn export_writes_the_header_even_for_an_empty_table() {
        let mut repo = MockRepository::new();
        repo.expect_list_all_employees()
            .times(1)
            .returning(|| Ok(Vec::new()));

        assert_eq!(export_csv(&repo).unwrap(), "Id,Name,Department,Email\n");
    }

    #[test]
    fn export_joins_fields_without_escaping() {
        let mut repo = MockRepository::new();
        repo.expect_list_all_employees().times(1).returning(|| {
            Ok(vec![Employee {
                id: 1,
                name: "Ruth,Ann".into(),
                department: "R&D".into(),
                email: "ruth@example.com".into(),
            }])
        });

        let csv = export_csv(&repo).unwrap();
        // The embedded comma is written verbatim; consumers see five fields.
        assert_eq!(csv, "Id,Name,Department,Email\n1,Ruth,Ann,R&D,ruth@example.com\n");
    }
}
