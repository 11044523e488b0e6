//! DTOs shaped for the employee list and form templates.

use crate::domain::employee::Employee;
use crate::pagination::Paginated;

/// Raw list parameters as they arrive from the query string.
#[derive(Debug, Default)]
pub struct ListQuery {
    pub search_name: Option<String>,
    pub search_dept: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<usize>,
}

/// Data required to render the employee index page.
#[derive(Debug)]
pub struct EmployeeListData {
    /// Windowed records plus pagination metadata.
    pub employees: Paginated<Employee>,
    /// Name filter applied to the listing, echoed into the search form.
    pub search_name: Option<String>,
    /// Department filter applied to the listing.
    pub search_dept: Option<String>,
    /// Key of the applied sort order; empty for the id default.
    pub sort_order: &'static str,
}
