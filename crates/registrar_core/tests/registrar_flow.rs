use registrar_core::{
    Course, Department, Registrar, RegistrarError, StoreError, Student,
};
use time::macros::date;

fn seeded() -> Registrar {
    let mut registrar = Registrar::new();
    registrar
        .add_department(Department::new(
            "Computer Engineering",
            Some("https://ce.example.edu".to_string()),
            date!(1992 - 09 - 01),
        ))
        .unwrap();
    registrar
        .add_department(Department::new("Mathematics", None, date!(1955 - 10 - 01)))
        .unwrap();
    registrar
        .add_course(Course::new("Database Systems", "CENG445", 3))
        .unwrap();
    registrar
        .add_course(Course::new("Compiler Design", "CENG444", 5))
        .unwrap();
    registrar
        .add_student(Student::new(
            "Ada",
            "Lovelace",
            192_113_001,
            date!(2000 - 05 - 15),
            "Computer Engineering",
        ))
        .unwrap();
    registrar
}

fn student(first: &str, last: &str, number: u32) -> Student {
    Student::new(first, last, number, date!(2001 - 03 - 03), "Computer Engineering")
}

#[test]
fn department_with_enrolled_students_cannot_be_removed() {
    let mut registrar = seeded();

    let err = registrar.remove_department("computer engineering").unwrap_err();
    assert_eq!(
        err,
        RegistrarError::DepartmentInUse {
            name: "computer engineering".to_string(),
            dependents: 1,
        }
    );
    assert!(registrar.departments().exists("Computer Engineering"));

    // Once the student is gone the department can go too.
    registrar.remove_student(192_113_001).unwrap();
    registrar.remove_department("Computer Engineering").unwrap();
    assert!(!registrar.departments().exists("Computer Engineering"));
}

#[test]
fn removing_an_unknown_department_reports_not_found() {
    let mut registrar = seeded();
    let err = registrar.remove_department("Philosophy").unwrap_err();
    assert!(matches!(
        err,
        RegistrarError::Store(StoreError::NotFound { entity: "department", .. })
    ));
}

#[test]
fn empty_departments_can_be_removed() {
    let mut registrar = seeded();
    registrar.remove_department("Mathematics").unwrap();
    assert_eq!(registrar.departments().len(), 1);
}

#[test]
fn student_removal_cascades_into_grade_records() {
    let mut registrar = seeded();
    registrar.record_grade(192_113_001, "CENG445", "AA").unwrap();
    registrar.record_grade(192_113_001, "CENG444", "BB").unwrap();
    assert_eq!(registrar.grade_book().len(), 2);

    registrar.remove_student(192_113_001).unwrap();

    assert!(registrar.grade_book().is_empty());
    assert!(!registrar.students().exists(192_113_001));
}

#[test]
fn adding_a_student_requires_an_existing_department() {
    let mut registrar = seeded();

    let mut stray = student("Grace", "Hopper", 192_113_002);
    stray.department = "Philosophy".to_string();
    let err = registrar.add_student(stray).unwrap_err();
    assert!(matches!(
        err,
        RegistrarError::Store(StoreError::NotFound { entity: "department", .. })
    ));
    assert_eq!(registrar.students().len(), 1);
}

#[test]
fn grade_operations_resolve_their_keys_first() {
    let mut registrar = seeded();

    let err = registrar.record_grade(999_999_999, "CENG445", "AA").unwrap_err();
    assert!(matches!(
        err,
        RegistrarError::Store(StoreError::NotFound { entity: "student", .. })
    ));

    let err = registrar.record_grade(192_113_001, "CENG999", "AA").unwrap_err();
    assert!(matches!(
        err,
        RegistrarError::Store(StoreError::NotFound { entity: "course", .. })
    ));

    assert!(registrar.grade_book().is_empty());
}

#[test]
fn grade_of_distinguishes_missing_records_from_missing_keys() {
    let mut registrar = seeded();
    assert_eq!(registrar.grade_of(192_113_001, "CENG445").unwrap(), None);

    registrar.record_grade(192_113_001, "CENG445", "cb").unwrap();
    assert_eq!(
        registrar.grade_of(192_113_001, "ceng445").unwrap(),
        Some("CB".parse().unwrap())
    );

    assert!(registrar.grade_of(192_113_009, "CENG445").is_err());
}

#[test]
fn revise_grade_overwrites_an_existing_record() {
    let mut registrar = seeded();
    registrar.record_grade(192_113_001, "CENG445", "DD").unwrap();

    registrar.revise_grade(192_113_001, "CENG445", "aa").unwrap();
    assert_eq!(
        registrar.grade_of(192_113_001, "CENG445").unwrap(),
        Some("AA".parse().unwrap())
    );
}

#[test]
fn course_removal_leaves_grade_records_in_place() {
    let mut registrar = seeded();
    registrar.record_grade(192_113_001, "CENG445", "AA").unwrap();

    registrar.remove_course("CENG445").unwrap();

    // The record keeps its course snapshot and the GPA still counts it.
    assert!(!registrar.courses().exists("CENG445"));
    let courses = registrar.courses_of(192_113_001).unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].code, "CENG445");
    assert_eq!(registrar.gpa_of(192_113_001).unwrap(), 4.0);
}

#[test]
fn ranking_is_descending_and_stable_for_equal_gpas() {
    let mut registrar = seeded();
    registrar
        .add_student(student("Grace", "Hopper", 192_113_002))
        .unwrap();
    registrar
        .add_student(student("Edsger", "Dijkstra", 192_113_003))
        .unwrap();

    // GPAs 3.0, 2.0, 3.0 in insertion order.
    registrar.record_grade(192_113_001, "CENG445", "CB").unwrap();
    registrar.record_grade(192_113_002, "CENG445", "DD").unwrap();
    registrar.record_grade(192_113_003, "CENG445", "CB").unwrap();

    let ranking = registrar.rank_by_gpa();
    let numbers: Vec<u32> = ranking.iter().map(|entry| entry.student.number).collect();
    assert_eq!(numbers, [192_113_001, 192_113_003, 192_113_002]);
    assert_eq!(ranking[0].gpa, 3.0);
    assert_eq!(ranking[1].gpa, 3.0);
    assert_eq!(ranking[2].gpa, 2.0);
}

#[test]
fn ranking_includes_students_without_records_at_zero() {
    let mut registrar = seeded();
    registrar
        .add_student(student("Grace", "Hopper", 192_113_002))
        .unwrap();
    registrar.record_grade(192_113_002, "CENG444", "FD").unwrap();

    let ranking = registrar.rank_by_gpa();
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].student.number, 192_113_002);
    assert_eq!(ranking[1].student.number, 192_113_001);
    assert_eq!(ranking[1].gpa, 0.0);
}

#[test]
fn update_flows_delegate_to_the_stores() {
    let mut registrar = seeded();

    registrar
        .update_department(&Department::new(
            "Computer Engineering",
            Some("https://moved.example.edu".to_string()),
            date!(1992 - 09 - 01),
        ))
        .unwrap();
    assert_eq!(
        registrar
            .departments()
            .find_by_name("Computer Engineering")
            .unwrap()
            .homepage
            .as_deref(),
        Some("https://moved.example.edu")
    );

    registrar
        .update_course(&Course::new("Advanced Databases", "CENG445", 3))
        .unwrap();
    assert_eq!(
        registrar.courses().find_by_code("CENG445").unwrap().name,
        "Advanced Databases"
    );

    let mut revised = registrar.students().find_by_number(192_113_001).unwrap().clone();
    revised.last_name = "King".to_string();
    registrar.update_student(&revised).unwrap();
    assert_eq!(
        registrar.students().find_by_number(192_113_001).unwrap().last_name,
        "King"
    );
}
