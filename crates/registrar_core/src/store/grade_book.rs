//! Grade records and GPA computation.
//!
//! # Responsibility
//! - Own every grade record and enforce one record per (student, course)
//!   pair.
//! - Derive the credit-weighted grade point average.
//!
//! # Invariants
//! - Letters are stored normalized: trimmed, upper-case.
//! - Records keep insertion order.
//! - A record snapshots its course at grading time; later course-store
//!   changes or removals do not reach it.

use crate::model::course::Course;
use crate::model::grade::{GradeRecord, LetterGrade};
use crate::model::student::Student;
use crate::store::{StoreError, StoreResult};

const ENTITY: &str = "grade record";

/// In-memory grade record collection in insertion order.
#[derive(Debug, Default)]
pub struct GradeBook {
    records: Vec<GradeRecord>,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a letter grade for the (student, course) pair. Fails with
    /// `InvalidValue` for letters outside the nine-symbol table and
    /// `DuplicateKey` when the pair is already graded; revising an
    /// existing grade goes through `update_grade`.
    pub fn add_grade(&mut self, student: &Student, course: &Course, letter: &str) -> StoreResult<()> {
        let grade = letter
            .parse::<LetterGrade>()
            .map_err(StoreError::InvalidValue)?;
        if self.find_record(student.number, &course.code).is_some() {
            return Err(StoreError::DuplicateKey {
                entity: ENTITY,
                key: pair_key(student.number, &course.code),
            });
        }
        self.records
            .push(GradeRecord::new(student.number, course.clone(), grade));
        Ok(())
    }

    /// Overwrites the letter of an existing record in place, keeping the
    /// record's identity. Fails with `NotFound` when the pair has no
    /// record yet.
    pub fn update_grade(
        &mut self,
        student: &Student,
        course: &Course,
        letter: &str,
    ) -> StoreResult<()> {
        let grade = letter
            .parse::<LetterGrade>()
            .map_err(StoreError::InvalidValue)?;
        let record = self
            .records
            .iter_mut()
            .find(|record| record.is_for(student.number, &course.code))
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: pair_key(student.number, &course.code),
            })?;
        record.grade = grade;
        Ok(())
    }

    /// Stored letter for the (student, course) pair, if any. Pure lookup.
    pub fn find_letter(&self, student: &Student, course: &Course) -> Option<LetterGrade> {
        self.find_record(student.number, &course.code)
            .map(|record| record.grade)
    }

    /// Courses this student has a grade record for, in insertion order.
    /// Re-derived from live records on every call.
    pub fn courses_of(&self, student: &Student) -> Vec<Course> {
        self.records
            .iter()
            .filter(|record| record.student_number == student.number)
            .map(|record| record.course.clone())
            .collect()
    }

    /// Credit-weighted grade point average over the student's records:
    /// `Σ(coefficient × credits) / Σ(credits)`. Returns `0.0` when the
    /// student has zero total credit weight, a defined result rather
    /// than an error.
    pub fn compute_gpa(&self, student: &Student) -> f64 {
        let mut total_credits: u32 = 0;
        let mut weighted_sum = 0.0;
        for record in self
            .records
            .iter()
            .filter(|record| record.student_number == student.number)
        {
            total_credits += record.course.credits;
            weighted_sum += record.grade.coefficient() * f64::from(record.course.credits);
        }
        if total_credits == 0 {
            return 0.0;
        }
        weighted_sum / f64::from(total_credits)
    }

    /// Removes every record naming `student` and returns how many were
    /// removed. Safe to call for students without records; part of the
    /// student-deletion cascade.
    pub fn clear_records_for(&mut self, student: &Student) -> usize {
        let before = self.records.len();
        self.records
            .retain(|record| record.student_number != student.number);
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find_record(&self, student_number: u32, course_code: &str) -> Option<&GradeRecord> {
        self.records
            .iter()
            .find(|record| record.is_for(student_number, course_code))
    }
}

fn pair_key(student_number: u32, course_code: &str) -> String {
    format!("{student_number}/{}", course_code.trim().to_uppercase())
}
