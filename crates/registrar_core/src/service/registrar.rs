//! Cross-store orchestration.
//!
//! # Responsibility
//! - Own all four stores and expose the single mutation path for every
//!   operation needing cross-store visibility.
//! - Resolve students and courses by key for the grade operations.
//! - Produce the stable descending-GPA ranking.
//!
//! # Invariants
//! - A department cannot be removed while any student references it.
//! - Removing a student clears that student's grade records first; no
//!   record survives its student.
//! - Removing a course leaves grade records untouched: records keep the
//!   course snapshot they were graded with.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::course::Course;
use crate::model::department::Department;
use crate::model::grade::LetterGrade;
use crate::model::student::Student;
use crate::store::course_store::CourseStore;
use crate::store::department_store::DepartmentStore;
use crate::store::grade_book::GradeBook;
use crate::store::student_store::StudentStore;
use crate::store::StoreError;

pub type RegistrarResult<T> = Result<T, RegistrarError>;

/// Orchestration-level failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrarError {
    /// Failure reported by one of the stores.
    Store(StoreError),
    /// Department removal blocked by enrolled students.
    DepartmentInUse { name: String, dependents: usize },
}

impl Display for RegistrarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::DepartmentInUse { name, dependents } => write!(
                f,
                "department `{name}` still has {dependents} enrolled student(s)"
            ),
        }
    }
}

impl Error for RegistrarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::DepartmentInUse { .. } => None,
        }
    }
}

impl From<StoreError> for RegistrarError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One row of the descending-GPA ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStudent {
    pub student: Student,
    pub gpa: f64,
}

/// Facade owning the four stores. Every rule that spans stores lives
/// here, as explicit orchestration at the call site; the stores
/// themselves never see each other.
#[derive(Debug, Default)]
pub struct Registrar {
    departments: DepartmentStore,
    courses: CourseStore,
    students: StudentStore,
    grades: GradeBook,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    // Read access. Mutations go through the methods below so the cascade
    // rules cannot be bypassed.

    pub fn departments(&self) -> &DepartmentStore {
        &self.departments
    }

    pub fn courses(&self) -> &CourseStore {
        &self.courses
    }

    pub fn students(&self) -> &StudentStore {
        &self.students
    }

    pub fn grade_book(&self) -> &GradeBook {
        &self.grades
    }

    pub fn add_department(&mut self, department: Department) -> RegistrarResult<()> {
        Ok(self.departments.add(department)?)
    }

    pub fn update_department(&mut self, department: &Department) -> RegistrarResult<()> {
        Ok(self.departments.update(department)?)
    }

    /// Removes a department, rejecting with `DepartmentInUse` while any
    /// student references it.
    pub fn remove_department(&mut self, name: &str) -> RegistrarResult<()> {
        if !self.departments.exists(name) {
            return Err(StoreError::NotFound {
                entity: "department",
                key: name.trim().to_string(),
            }
            .into());
        }
        let dependents = self.students.count_in_department(name);
        if dependents > 0 {
            return Err(RegistrarError::DepartmentInUse {
                name: name.trim().to_string(),
                dependents,
            });
        }
        self.departments.remove(name)?;
        Ok(())
    }

    pub fn add_course(&mut self, course: Course) -> RegistrarResult<()> {
        Ok(self.courses.add(course)?)
    }

    pub fn update_course(&mut self, course: &Course) -> RegistrarResult<()> {
        Ok(self.courses.update(course)?)
    }

    /// Removes a course. Does not cascade into the grade book: existing
    /// records keep their course snapshot.
    pub fn remove_course(&mut self, code: &str) -> RegistrarResult<()> {
        Ok(self.courses.remove(code)?)
    }

    /// Adds a student; the referenced department must already exist.
    pub fn add_student(&mut self, student: Student) -> RegistrarResult<()> {
        if !self.departments.exists(&student.department) {
            return Err(StoreError::NotFound {
                entity: "department",
                key: student.department.clone(),
            }
            .into());
        }
        Ok(self.students.add(student)?)
    }

    pub fn update_student(&mut self, student: &Student) -> RegistrarResult<()> {
        Ok(self.students.update(student)?)
    }

    /// Removes a student together with every grade record naming them.
    pub fn remove_student(&mut self, number: u32) -> RegistrarResult<()> {
        let student = self.resolve_student(number)?;
        self.grades.clear_records_for(&student);
        self.students.remove(number)?;
        Ok(())
    }

    /// Records a grade for the (student, course) pair resolved by key.
    pub fn record_grade(&mut self, number: u32, code: &str, letter: &str) -> RegistrarResult<()> {
        let (student, course) = self.resolve_pair(number, code)?;
        Ok(self.grades.add_grade(&student, &course, letter)?)
    }

    /// Revises an existing grade for the pair resolved by key.
    pub fn revise_grade(&mut self, number: u32, code: &str, letter: &str) -> RegistrarResult<()> {
        let (student, course) = self.resolve_pair(number, code)?;
        Ok(self.grades.update_grade(&student, &course, letter)?)
    }

    /// Stored letter for the pair resolved by key. `Ok(None)` when the
    /// pair exists but has no grade record.
    pub fn grade_of(&self, number: u32, code: &str) -> RegistrarResult<Option<LetterGrade>> {
        let (student, course) = self.resolve_pair(number, code)?;
        Ok(self.grades.find_letter(&student, &course))
    }

    /// Courses the student has any grade record for, in insertion order.
    pub fn courses_of(&self, number: u32) -> RegistrarResult<Vec<Course>> {
        let student = self.resolve_student(number)?;
        Ok(self.grades.courses_of(&student))
    }

    /// Credit-weighted GPA for the student resolved by number.
    pub fn gpa_of(&self, number: u32) -> RegistrarResult<f64> {
        let student = self.resolve_student(number)?;
        Ok(self.grades.compute_gpa(&student))
    }

    /// All students ranked by GPA, highest first. The sort is stable:
    /// students with equal GPAs keep their insertion order.
    pub fn rank_by_gpa(&self) -> Vec<RankedStudent> {
        let mut ranking: Vec<RankedStudent> = self
            .students
            .list()
            .iter()
            .map(|student| RankedStudent {
                student: student.clone(),
                gpa: self.grades.compute_gpa(student),
            })
            .collect();
        ranking.sort_by(|a, b| b.gpa.total_cmp(&a.gpa));
        ranking
    }

    fn resolve_student(&self, number: u32) -> RegistrarResult<Student> {
        Ok(self
            .students
            .find_by_number(number)
            .ok_or(StoreError::NotFound {
                entity: "student",
                key: number.to_string(),
            })?
            .clone())
    }

    fn resolve_pair(&self, number: u32, code: &str) -> RegistrarResult<(Student, Course)> {
        let student = self.resolve_student(number)?;
        let course = self
            .courses
            .find_by_code(code)
            .ok_or_else(|| StoreError::NotFound {
                entity: "course",
                key: code.trim().to_string(),
            })?
            .clone();
        Ok((student, course))
    }
}
