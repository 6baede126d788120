//! Letter grades and grade records.
//!
//! # Responsibility
//! - Define the fixed nine-symbol letter scale and its 4.00-system
//!   coefficients.
//! - Define the record shape owned by the grade book.
//!
//! # Invariants
//! - The coefficient table is fixed; every symbol outside it is a
//!   validation error, never a sentinel value.
//! - A record's identity is the (student number, course code) pair.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::model::course::Course;
use crate::model::ValidationError;

/// Nine-symbol letter grade on the 4.00 coefficient scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    AA,
    BA,
    BB,
    CB,
    CC,
    DC,
    DD,
    FD,
    FF,
}

impl LetterGrade {
    /// Numeric coefficient on the 4.00 scale.
    pub fn coefficient(self) -> f64 {
        match self {
            Self::AA => 4.00,
            Self::BA => 3.50,
            Self::BB => 3.25,
            Self::CB => 3.00,
            Self::CC => 2.50,
            Self::DC => 2.25,
            Self::DD => 2.00,
            Self::FD => 1.50,
            Self::FF => 0.00,
        }
    }

    /// Maps a 0–100 numeric score to its letter grade.
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Self::AA
        } else if score >= 85 {
            Self::BA
        } else if score >= 80 {
            Self::BB
        } else if score >= 75 {
            Self::CB
        } else if score >= 70 {
            Self::CC
        } else if score >= 65 {
            Self::DC
        } else if score >= 60 {
            Self::DD
        } else if score >= 50 {
            Self::FD
        } else {
            Self::FF
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AA => "AA",
            Self::BA => "BA",
            Self::BB => "BB",
            Self::CB => "CB",
            Self::CC => "CC",
            Self::DC => "DC",
            Self::DD => "DD",
            Self::FD => "FD",
            Self::FF => "FF",
        }
    }
}

impl FromStr for LetterGrade {
    type Err = ValidationError;

    /// Trims and upper-cases before matching, so `" aa "` parses as `AA`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::AA),
            "BA" => Ok(Self::BA),
            "BB" => Ok(Self::BB),
            "CB" => Ok(Self::CB),
            "CC" => Ok(Self::CC),
            "DC" => Ok(Self::DC),
            "DD" => Ok(Self::DD),
            "FD" => Ok(Self::FD),
            "FF" => Ok(Self::FF),
            _ => Err(ValidationError::UnknownLetterGrade(
                input.trim().to_string(),
            )),
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One student's grade in one course. Owned exclusively by the grade book;
/// callers never mutate records directly.
///
/// The record embeds the course as it was graded, so it stays meaningful
/// after the course leaves its store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    /// Graded student's number.
    pub student_number: u32,
    /// Snapshot of the course at grading time.
    pub course: Course,
    pub grade: LetterGrade,
}

impl GradeRecord {
    pub(crate) fn new(student_number: u32, course: Course, grade: LetterGrade) -> Self {
        Self {
            student_number,
            course,
            grade,
        }
    }

    /// Matches the composite (student, course) identity.
    pub fn is_for(&self, student_number: u32, course_code: &str) -> bool {
        self.student_number == student_number && self.course.matches_code(course_code)
    }
}
