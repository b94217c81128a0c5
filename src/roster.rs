//! Roster Module
//!
//! The authoritative in-memory roster and its secondary indexes.
//!
//! ## Responsibilities
//! - Own the ordered record sequence (display and save order)
//! - Keep the name and roll-number indexes in step with every mutation
//! - Validate records on add
//! - Load from / save to the backing file through the codec

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use crate::codec;
use crate::error::{Result, RosterError};
use crate::record::Student;

/// In-memory student roster
///
/// ## Indexes
///
/// - `by_name`: lowercased name → every record with that name, in insertion
///   order (duplicate names are allowed)
/// - `by_roll`: roll number → the most recently indexed record with that
///   roll (duplicate rolls are allowed, last write wins)
///
/// Sorting only reorders `students`; both indexes are order-independent.
#[derive(Debug, Default)]
pub struct Roster {
    /// Records in canonical order
    students: Vec<Student>,

    /// Lowercased name → records sharing that name
    by_name: HashMap<String, Vec<Student>>,

    /// Roll number → record
    by_roll: HashMap<i32, Student>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster with the contents of `path`
    ///
    /// Never fails: a missing or unreadable file leaves the roster empty,
    /// and malformed lines are skipped. Returns the number of records loaded.
    pub fn load(&mut self, path: &Path) -> usize {
        self.students.clear();
        self.by_name.clear();
        self.by_roll.clear();

        for student in codec::read_students(path) {
            self.index(&student);
            self.students.push(student);
        }

        tracing::debug!("Loaded {} students from {}", self.students.len(), path.display());
        self.students.len()
    }

    /// Write every record to `path` in roster order, replacing its contents
    pub fn save(&self, path: &Path) -> Result<()> {
        codec::encode_file(path, &self.students)?;
        tracing::debug!("Saved {} students to {}", self.students.len(), path.display());
        Ok(())
    }

    /// Append a record
    ///
    /// Rejected with `InvalidRecord` (and nothing added) when name, email
    /// or course is blank, or marks is NaN. Duplicate names and rolls are
    /// accepted.
    pub fn add(&mut self, student: Student) -> Result<()> {
        for (field, value) in [
            ("name", student.name()),
            ("email", student.email()),
            ("course", student.course()),
        ] {
            if value.trim().is_empty() {
                return Err(RosterError::InvalidRecord(format!("{} is empty", field)));
            }
        }
        if student.marks().is_nan() {
            return Err(RosterError::InvalidRecord("marks is not a number".to_string()));
        }

        tracing::debug!("Adding roll {} ({})", student.roll_no(), student.name());
        self.index(&student);
        self.students.push(student);
        Ok(())
    }

    /// Case-insensitive exact name lookup; returns a snapshot
    pub fn search_by_name(&self, name: &str) -> Vec<Student> {
        self.by_name
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Roll-number lookup through the roll index
    pub fn find_by_roll(&self, roll_no: i32) -> Option<&Student> {
        self.by_roll.get(&roll_no)
    }

    /// Remove every record whose name matches `name` case-insensitively
    ///
    /// Returns the number of records removed; `0` means nothing matched and
    /// nothing changed.
    ///
    /// Roll-index cleanup is keyed on the name, not on the removed records:
    /// any roll slot currently held by a record with this name is dropped.
    pub fn delete_by_name(&mut self, name: &str) -> usize {
        let key = name.to_lowercase();
        let removed = match self.by_name.remove(&key) {
            Some(list) if !list.is_empty() => list.len(),
            _ => return 0,
        };

        self.students.retain(|s| s.name_key() != key);
        self.by_roll.retain(|_, s| s.name_key() != key);

        tracing::debug!("Deleted {} students named {:?}", removed, name);
        removed
    }

    /// Stable sort by marks, ascending or descending
    pub fn sort_by_marks(&mut self, ascending: bool) {
        if ascending {
            self.students.sort_by(|a, b| a.marks().total_cmp(&b.marks()));
        } else {
            self.students.sort_by(|a, b| b.marks().total_cmp(&a.marks()));
        }
    }

    /// Stable, case-insensitive sort by name
    pub fn sort_by_name(&mut self) {
        self.students.sort_by_cached_key(Student::name_key);
    }

    /// Print every record followed by a blank line
    pub fn view_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for student in &self.students {
            writeln!(out, "{}", student)?;
            writeln!(out)?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Borrow the records in canonical order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Owned copy of the records; later mutations do not affect it
    pub fn students_snapshot(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn index(&mut self, student: &Student) {
        self.by_roll.insert(student.roll_no(), student.clone());
        self.by_name
            .entry(student.name_key())
            .or_default()
            .push(student.clone());
    }
}
