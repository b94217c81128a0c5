//! Record Module
//!
//! The student record held by the roster and persisted by the codec.
//!
//! ## Line Form
//! ```text
//! roll,name,email,course,marks
//! ```
//! Fields are joined by [`DELIMITER`] without quoting or escaping, so a
//! value containing the delimiter will not survive a reload.

mod student;

pub use student::Student;

/// Field delimiter of the persisted line form
pub const DELIMITER: char = ',';

/// Number of fields in one persisted line
pub const FIELD_COUNT: usize = 5;
