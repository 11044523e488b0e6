use employee_manager::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use employee_manager::repository::errors::RepositoryError;
use employee_manager::repository::{
    DieselRepository, EmployeeListQuery, EmployeeReader, EmployeeWriter, SortOrder,
};

mod common;

fn seed(repo: &DieselRepository, name: &str, department: &str) -> Employee {
    repo.create_employee(&NewEmployee {
        name: name.into(),
        department: department.into(),
        email: format!("{}@example.com", name.to_lowercase()),
    })
    .unwrap()
}

#[test]
fn test_employee_repository_crud() {
    let test_db = common::TestDb::new("test_employee_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let alice = seed(&repo, "Alice", "Engineering");
    let bob = seed(&repo, "Bob", "Support");
    assert!(alice.id < bob.id);

    let fetched = repo.get_employee_by_id(alice.id).unwrap().unwrap();
    assert_eq!(fetched, alice);

    let updated = repo
        .update_employee(
            bob.id,
            &UpdateEmployee {
                name: "Bobby".into(),
                department: "Finance".into(),
                email: "bobby@example.com".into(),
            },
        )
        .unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.name, "Bobby");
    assert_eq!(updated.department, "Finance");
    assert_eq!(updated.email, "bobby@example.com");

    let deleted = repo.delete_employee(alice.id).unwrap();
    assert_eq!(deleted.name, "Alice");
    assert!(repo.get_employee_by_id(alice.id).unwrap().is_none());

    let (total, items) = repo.list_employees(EmployeeListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Bobby");
}

#[test]
fn test_missing_ids_surface_as_not_found() {
    let test_db = common::TestDb::new("test_missing_ids_surface_as_not_found.db");
    let repo = DieselRepository::new(test_db.pool());

    seed(&repo, "Alice", "Engineering");

    let err = repo.delete_employee(999).unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));

    let err = repo
        .update_employee(
            999,
            &UpdateEmployee {
                name: "Ghost".into(),
                department: "Nowhere".into(),
                email: "ghost@example.com".into(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));

    // Neither failure touched the table.
    let (total, _) = repo.list_employees(EmployeeListQuery::new()).unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_filters_compose_with_and_semantics() {
    let test_db = common::TestDb::new("test_filters_compose_with_and_semantics.db");
    let repo = DieselRepository::new(test_db.pool());

    seed(&repo, "Anna", "Engineering");
    seed(&repo, "Anton", "Support");
    seed(&repo, "Boris", "Engineering");

    let (total, items) = repo
        .list_employees(EmployeeListQuery::new().search_name("An").search_dept("Eng"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Anna");

    // A single filter matches the wider set.
    let (total, _) = repo
        .list_employees(EmployeeListQuery::new().search_name("An"))
        .unwrap();
    assert_eq!(total, 2);

    let (total, items) = repo
        .list_employees(EmployeeListQuery::new().search_name("Zed"))
        .unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[test]
fn test_sort_orders() {
    let test_db = common::TestDb::new("test_sort_orders.db");
    let repo = DieselRepository::new(test_db.pool());

    seed(&repo, "B", "Support");
    seed(&repo, "A", "Engineering");
    seed(&repo, "C", "Finance");

    let names = |sort: SortOrder| -> Vec<String> {
        let (_, items) = repo
            .list_employees(EmployeeListQuery::new().sort(sort))
            .unwrap();
        items.into_iter().map(|e| e.name).collect()
    };

    assert_eq!(names(SortOrder::NameAsc), vec!["A", "B", "C"]);
    assert_eq!(names(SortOrder::NameDesc), vec!["C", "B", "A"]);
    assert_eq!(names(SortOrder::DeptAsc), vec!["A", "C", "B"]);
    assert_eq!(names(SortOrder::DeptDesc), vec!["B", "C", "A"]);
    // Default: insertion order.
    assert_eq!(names(SortOrder::IdAsc), vec!["B", "A", "C"]);
}

#[test]
fn test_sort_ties_resolve_in_insertion_order() {
    let test_db = common::TestDb::new("test_sort_ties_resolve_in_insertion_order.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = seed(&repo, "Sam", "Engineering");
    let second = seed(&repo, "Sam", "Support");

    let (_, items) = repo
        .list_employees(EmployeeListQuery::new().sort(SortOrder::NameDesc))
        .unwrap();
    assert_eq!(
        items.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[test]
fn test_page_windows_cover_the_set_exactly() {
    let test_db = common::TestDb::new("test_page_windows_cover_the_set_exactly.db");
    let repo = DieselRepository::new(test_db.pool());

    let seeded: Vec<i32> = (0..12)
        .map(|i| seed(&repo, &format!("Emp{i:02}"), "Engineering").id)
        .collect();

    let mut collected = Vec::new();
    for page in 1..=3 {
        let (total, items) = repo
            .list_employees(EmployeeListQuery::new().page(page))
            .unwrap();
        assert_eq!(total, 12);
        assert!(items.len() <= 5);
        collected.extend(items.into_iter().map(|e| e.id));
    }

    // Concatenated pages reproduce the full set, no duplicates or holes.
    assert_eq!(collected, seeded);
}

#[test]
fn test_out_of_range_pages_are_clamped() {
    let test_db = common::TestDb::new("test_out_of_range_pages_are_clamped.db");
    let repo = DieselRepository::new(test_db.pool());

    for i in 0..12 {
        seed(&repo, &format!("Emp{i:02}"), "Engineering");
    }

    let (_, first_page) = repo
        .list_employees(EmployeeListQuery::new().page(1))
        .unwrap();
    let (_, clamped_low) = repo
        .list_employees(EmployeeListQuery::new().page(0))
        .unwrap();
    assert_eq!(clamped_low, first_page);
    assert_eq!(clamped_low.len(), 5);

    let (_, last_page) = repo
        .list_employees(EmployeeListQuery::new().page(3))
        .unwrap();
    let (_, clamped_high) = repo
        .list_employees(EmployeeListQuery::new().page(9999))
        .unwrap();
    assert_eq!(clamped_high, last_page);
    assert_eq!(clamped_high.len(), 2);
}

#[test]
fn test_list_all_returns_everything_in_id_order() {
    let test_db = common::TestDb::new("test_list_all_returns_everything_in_id_order.db");
    let repo = DieselRepository::new(test_db.pool());

    seed(&repo, "B", "Support");
    seed(&repo, "A", "Engineering");

    let all = repo.list_all_employees().unwrap();
    assert_eq!(
        all.iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
        vec!["B", "A"]
    );
    assert!(all[0].id < all[1].id);
}
