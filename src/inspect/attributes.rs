//! File attributes
//!
//! Metadata report for the backing file.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Metadata snapshot of a single path
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    /// Absolute form of the inspected path
    pub path: PathBuf,

    pub exists: bool,
    pub readable: bool,
    pub writable: bool,

    /// Size in bytes (0 when absent)
    pub size: u64,

    /// Last modification time (`None` when absent or unsupported)
    pub modified: Option<SystemTime>,
}

/// Describe `path` without touching its contents
pub fn describe(path: &Path) -> FileReport {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(_) => {
            return FileReport {
                path: absolute,
                exists: false,
                readable: false,
                writable: false,
                size: 0,
                modified: None,
            };
        }
    };

    // Probe by opening; never creates or truncates
    let readable = File::open(path).is_ok();
    let writable = metadata.is_file() && OpenOptions::new().write(true).open(path).is_ok();

    FileReport {
        path: absolute,
        exists: true,
        readable,
        writable,
        size: metadata.len(),
        modified: metadata.modified().ok(),
    }
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.path.display())?;
        writeln!(f, "Exists: {}", self.exists)?;
        writeln!(f, "Readable: {}", self.readable)?;
        writeln!(f, "Writable: {}", self.writable)?;
        writeln!(f, "Size(bytes): {}", self.size)?;
        match self.modified {
            Some(time) => {
                let local: DateTime<Local> = time.into();
                write!(f, "Last Modified: {}", local.format("%a %b %d %H:%M:%S %Z %Y"))
            }
            None => write!(f, "Last Modified: N/A"),
        }
    }
}
