//! Student record
//!
//! Passive value holder; validation belongs to the roster and the codec.

use std::fmt;

use super::DELIMITER;

/// A single student's {roll number, name, email, course, marks} tuple
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    roll_no: i32,
    name: String,
    email: String,
    course: String,
    marks: f64,
}

impl Student {
    /// Create a record from all five fields
    pub fn new(
        roll_no: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: f64,
    ) -> Self {
        Self {
            roll_no,
            name: name.into(),
            email: email.into(),
            course: course.into(),
            marks,
        }
    }

    pub fn roll_no(&self) -> i32 {
        self.roll_no
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    /// Lowercased name, the key of the roster's name index
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Delimiter-joined persisted form: roll, name, email, course, marks
    pub fn to_line(&self) -> String {
        let d = DELIMITER;
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            self.roll_no,
            self.name,
            self.email,
            self.course,
            format_marks(self.marks)
        )
    }
}

/// Multi-line human-readable form used by the menu
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll No: {}\nName: {}\nEmail: {}\nCourse: {}\nMarks: {}",
            self.roll_no,
            self.name,
            self.email,
            self.course,
            format_marks(self.marks)
        )
    }
}

/// Shortest round-trippable form, keeping `.0` on integral values (90 → "90.0")
fn format_marks(marks: f64) -> String {
    format!("{:?}", marks)
}
