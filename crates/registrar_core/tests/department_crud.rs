use registrar_core::{Department, DepartmentStore, StoreError, ValidationError};
use time::macros::date;

fn engineering() -> Department {
    Department::new(
        "Computer Engineering",
        Some("https://ce.example.edu".to_string()),
        date!(1992 - 09 - 01),
    )
}

#[test]
fn add_then_find_is_case_insensitive() {
    let mut store = DepartmentStore::new();
    store.add(engineering()).unwrap();

    let found = store.find_by_name("computer engineering").unwrap();
    assert_eq!(found.name, "Computer Engineering");
    assert!(store.exists("COMPUTER ENGINEERING"));
    assert!(store.find_by_name("Physics").is_none());
}

#[test]
fn duplicate_name_is_rejected_case_insensitively() {
    let mut store = DepartmentStore::new();
    store.add(engineering()).unwrap();

    let duplicate = Department::new("COMPUTER engineering", None, date!(2001 - 01 - 01));
    let err = store.add(duplicate).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { entity: "department", .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn empty_name_is_rejected() {
    let mut store = DepartmentStore::new();
    let err = store
        .add(Department::new("   ", None, date!(1992 - 09 - 01)))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::InvalidValue(ValidationError::EmptyField("department name"))
    );
    assert!(store.is_empty());
}

#[test]
fn remove_missing_department_reports_not_found() {
    let mut store = DepartmentStore::new();
    let err = store.remove("Philosophy").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "department", .. }));
}

#[test]
fn update_changes_homepage_and_nothing_else() {
    let mut store = DepartmentStore::new();
    store.add(engineering()).unwrap();

    let revised = Department::new(
        "computer engineering",
        Some("https://new.example.edu".to_string()),
        date!(2020 - 01 - 01),
    );
    store.update(&revised).unwrap();

    let stored = store.find_by_name("Computer Engineering").unwrap();
    assert_eq!(stored.homepage.as_deref(), Some("https://new.example.edu"));
    assert_eq!(stored.name, "Computer Engineering");
    assert_eq!(stored.founded, date!(1992 - 09 - 01));
}

#[test]
fn update_missing_department_reports_not_found() {
    let mut store = DepartmentStore::new();
    let err = store.update(&engineering()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "department", .. }));
}

#[test]
fn list_keeps_insertion_order() {
    let mut store = DepartmentStore::new();
    store.add(engineering()).unwrap();
    store
        .add(Department::new("Mathematics", None, date!(1955 - 10 - 01)))
        .unwrap();
    store
        .add(Department::new("Physics", None, date!(1948 - 02 - 15)))
        .unwrap();

    let names: Vec<&str> = store.list().iter().map(|dept| dept.name.as_str()).collect();
    assert_eq!(names, ["Computer Engineering", "Mathematics", "Physics"]);
}
