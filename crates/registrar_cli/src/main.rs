//! Demo collaborator for the academic records core.
//!
//! # Responsibility
//! - Drive every core operation group once against a seeded dataset.
//! - Write the ranked GPA report, the one artifact the wider system
//!   persists.
//! - Own all user-facing output: the core itself never prints or logs
//!   business events.

use log::info;
use registrar_core::validate::parse_date;
use registrar_core::{
    default_log_level, init_logging, Course, Department, LetterGrade, RankedStudent, Registrar,
    Student,
};
use std::io::Write;
use std::path::Path;
use time::Date;

const REPORT_FILE: &str = "gpa_report.txt";

fn main() {
    let log_dir = std::env::temp_dir().join("registrar-logs");
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("logging disabled: {err}");
            }
        }
        None => eprintln!("logging disabled: log directory is not valid UTF-8"),
    }

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut registrar = seed()?;

    println!("departments:");
    for department in registrar.departments().list() {
        match &department.homepage {
            Some(url) => println!("  {} ({url})", department.name),
            None => println!("  {}", department.name),
        }
    }

    println!("students:");
    for student in registrar.students().list() {
        println!(
            "  {} {} - No: {} - {}",
            student.first_name, student.last_name, student.number, student.department
        );
    }

    // A department with enrolled students refuses deletion.
    if let Err(err) = registrar.remove_department("Computer Engineering") {
        info!("event=department_remove status=rejected detail={err}");
        println!("department removal rejected as expected: {err}");
    }

    // Removing a student drags that student's grade records along.
    let records_before = registrar.grade_book().len();
    registrar.remove_student(192_113_003)?;
    info!(
        "event=student_remove status=ok number=192113003 records_dropped={}",
        records_before - registrar.grade_book().len()
    );

    let ranking = registrar.rank_by_gpa();
    println!("ranking:");
    for (index, entry) in ranking.iter().enumerate() {
        println!("  {}", format_report_line(index + 1, entry));
    }

    write_report(Path::new(REPORT_FILE), &ranking)?;
    info!("event=report_write status=ok students={}", ranking.len());
    println!("ranked GPA report written to {REPORT_FILE}");
    Ok(())
}

fn seed() -> Result<Registrar, Box<dyn std::error::Error>> {
    let mut registrar = Registrar::new();

    registrar.add_department(Department::new(
        "Computer Engineering",
        Some("https://ce.example.edu".to_string()),
        seed_date("01.09.1992")?,
    ))?;
    registrar.add_department(Department::new(
        "Mathematics",
        None,
        seed_date("01.10.1955")?,
    ))?;

    registrar.add_course(Course::new("Database Systems", "CENG445", 3))?;
    registrar.add_course(Course::new("Compiler Design", "CENG444", 5))?;
    registrar.add_course(Course::new("Linear Algebra", "MATH260", 4))?;

    registrar.add_student(Student::new(
        "Ada",
        "Lovelace",
        192_113_001,
        seed_date("15.05.2000")?,
        "Computer Engineering",
    ))?;
    registrar.add_student(Student::new(
        "Grace",
        "Hopper",
        192_113_002,
        seed_date("09.12.1999")?,
        "Computer Engineering",
    ))?;
    registrar.add_student(Student::new(
        "Emmy",
        "Noether",
        192_113_003,
        seed_date("23.03.2001")?,
        "Mathematics",
    ))?;

    registrar.record_grade(192_113_001, "CENG445", "AA")?;
    registrar.record_grade(192_113_001, "CENG444", "CC")?;
    // Raw console-style input: the core normalizes case and whitespace.
    registrar.record_grade(192_113_002, "ceng445", " bb ")?;
    registrar.record_grade(
        192_113_002,
        "MATH260",
        LetterGrade::from_score(77).as_str(),
    )?;
    registrar.record_grade(192_113_003, "MATH260", "AA")?;

    // A late regrade goes through the revision path.
    registrar.revise_grade(192_113_002, "CENG445", "BA")?;

    Ok(registrar)
}

fn seed_date(input: &str) -> Result<Date, String> {
    parse_date(input).ok_or_else(|| format!("invalid seed date `{input}`"))
}

/// One report line: `<rank>. <first> <last> - No: <number> - GPA: <x.xx>`.
fn format_report_line(rank: usize, entry: &RankedStudent) -> String {
    format!(
        "{rank}. {} {} - No: {} - GPA: {:.2}",
        entry.student.first_name, entry.student.last_name, entry.student.number, entry.gpa
    )
}

/// Writes the ranked report, one line per student, highest GPA first.
fn write_report(path: &Path, ranking: &[RankedStudent]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for (index, entry) in ranking.iter().enumerate() {
        writeln!(file, "{}", format_report_line(index + 1, entry))?;
    }
    Ok(())
}
