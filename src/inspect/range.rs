//! Random byte-range reads
//!
//! Reads raw bytes at an offset and decodes them as UTF-8. Offsets are
//! byte positions, so a range may cut a multi-byte character; the cut
//! bytes come back as replacement characters.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::Result;

/// Read up to `length` bytes starting at `offset`
///
/// Clamping rules:
/// - negative `offset` → 0, `offset` past EOF → EOF
/// - `length` is clamped to `[0, file_len - offset]`
///
/// A missing file yields an empty string.
pub fn read_range(path: &Path, offset: i64, length: i64) -> Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }

    let mut file = File::open(path)?;
    let file_len = i64::try_from(file.metadata()?.len()).unwrap_or(i64::MAX);

    let start = offset.clamp(0, file_len);
    let count = length.clamp(0, file_len - start);

    file.seek(SeekFrom::Start(start as u64))?;
    let mut buf = Vec::with_capacity(count as usize);
    file.take(count as u64).read_to_end(&mut buf)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Best-effort variant of [`read_range`]: failures are logged and yield ""
pub fn read_range_lossy(path: &Path, offset: i64, length: i64) -> String {
    read_range(path, offset, length).unwrap_or_else(|e| {
        tracing::warn!("Random read of {} failed: {}", path.display(), e);
        String::new()
    })
}
