//! Codec Writer
//!
//! Encodes records into the backing file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::Student;

/// Write one line per record, each terminated by `\n`
pub fn encode_to<W: Write>(writer: &mut W, students: &[Student]) -> Result<()> {
    for student in students {
        writer.write_all(student.to_line().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Overwrite the file at `path` with `students`, in order
pub fn encode_file(path: &Path, students: &[Student]) -> Result<()> {
    // File::create truncates any previous contents
    let mut writer = BufWriter::new(File::create(path)?);
    encode_to(&mut writer, students)?;
    writer.get_ref().sync_all()?;
    Ok(())
}

/// Best-effort encode: failures are logged and otherwise ignored
///
/// Fire-and-forget counterpart of [`encode_file`] for callers that want no
/// outcome; `Roster::save` reports failures instead.
pub fn write_students(path: &Path, students: &[Student]) {
    if let Err(e) = encode_file(path, students) {
        tracing::warn!("Failed to write {}: {}", path.display(), e);
    }
}
