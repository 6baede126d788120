use registrar_core::{Course, Department, GradeRecord, LetterGrade, Student};
use time::macros::date;

#[test]
fn entities_round_trip_through_serde_json() {
    let department = Department::new(
        "Computer Engineering",
        Some("https://ce.example.edu".to_string()),
        date!(1992 - 09 - 01),
    );
    let json = serde_json::to_string(&department).unwrap();
    let back: Department = serde_json::from_str(&json).unwrap();
    assert_eq!(back, department);

    let student = Student::new(
        "Ada",
        "Lovelace",
        192_113_001,
        date!(2000 - 05 - 15),
        "Computer Engineering",
    );
    let json = serde_json::to_string(&student).unwrap();
    let back: Student = serde_json::from_str(&json).unwrap();
    assert_eq!(back, student);
}

#[test]
fn grade_records_round_trip_with_their_course_snapshot() {
    let record = GradeRecord {
        student_number: 192_113_001,
        course: Course::new("Database Systems", "CENG445", 3),
        grade: LetterGrade::BA,
    };
    let json = serde_json::to_string(&record).unwrap();
    let back: GradeRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn letter_grades_serialize_as_their_symbols() {
    assert_eq!(serde_json::to_string(&LetterGrade::AA).unwrap(), "\"AA\"");
    assert_eq!(
        serde_json::from_str::<LetterGrade>("\"FD\"").unwrap(),
        LetterGrade::FD
    );
}
