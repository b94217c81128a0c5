//! Codec Reader
//!
//! Decodes the backing file into records.

use std::fs;
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::record::{Student, DELIMITER, FIELD_COUNT};

/// Outcome of decoding a whole file
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Well-formed records, in file order
    pub students: Vec<Student>,

    /// One `MalformedLine` error per skipped line
    pub skipped: Vec<RosterError>,
}

impl DecodeReport {
    /// Number of lines that were skipped
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Parse a single persisted line (1-based `line_no` is used for diagnostics)
///
/// The line must split into exactly five fields; trailing empty fields
/// count. All fields are trimmed, roll must parse as an integer and marks
/// as a float, and name, email and course must be non-empty.
pub fn parse_line(line_no: usize, line: &str) -> Result<Student> {
    let malformed = |reason: String| RosterError::MalformedLine {
        line: line_no,
        reason,
    };

    let parts: Vec<&str> = line.split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            parts.len()
        )));
    }

    let roll_no: i32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| malformed(format!("invalid roll number {:?}", parts[0].trim())))?;
    let name = parts[1].trim();
    let email = parts[2].trim();
    let course = parts[3].trim();
    let marks = parse_marks(parts[4].trim())
        .ok_or_else(|| malformed(format!("invalid marks {:?}", parts[4].trim())))?;

    for (field, value) in [("name", name), ("email", email), ("course", course)] {
        if value.is_empty() {
            return Err(malformed(format!("empty {}", field)));
        }
    }

    Ok(Student::new(roll_no, name, email, course, marks))
}

/// Parse a marks value
///
/// Only the spellings `NaN` and `Infinity` (optionally signed) are accepted
/// for non-finite values; `inf`, `nan` and other case variants are rejected.
fn parse_marks(text: &str) -> Option<f64> {
    let unsigned = text.trim_start_matches(['+', '-']);
    let lowered = unsigned.to_ascii_lowercase();
    if matches!(lowered.as_str(), "nan" | "inf" | "infinity") {
        if unsigned != "NaN" && unsigned != "Infinity" {
            return None;
        }
    }
    text.parse().ok()
}

/// Decode every line of `text`, keeping well-formed records in order
pub fn decode_str(text: &str) -> DecodeReport {
    let mut report = DecodeReport::default();

    for (idx, line) in text.lines().enumerate() {
        match parse_line(idx + 1, line) {
            Ok(student) => report.students.push(student),
            Err(e) => report.skipped.push(e),
        }
    }

    report
}

/// Decode the file at `path`
///
/// A missing file decodes to an empty report. Bytes that are not valid
/// UTF-8 are replaced rather than rejected.
pub fn decode_file(path: &Path) -> Result<DecodeReport> {
    if !path.exists() {
        return Ok(DecodeReport::default());
    }

    let bytes = fs::read(path)?;
    Ok(decode_str(&String::from_utf8_lossy(&bytes)))
}

/// Best-effort decode: skipped lines and read failures are logged, never returned
pub fn read_students(path: &Path) -> Vec<Student> {
    match decode_file(path) {
        Ok(report) => {
            for skipped in &report.skipped {
                tracing::warn!("Skipping line in {}: {}", path.display(), skipped);
            }
            report.students
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
