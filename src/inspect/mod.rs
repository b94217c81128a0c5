//! Inspect Module
//!
//! Looks at the backing file directly, independent of the in-memory roster.
//!
//! ## Responsibilities
//! - Report metadata: absolute path, existence, permissions, size, mtime
//! - Bounded raw reads at an arbitrary byte offset
//!
//! A missing file is never an error here: `describe` yields an "absent"
//! report and `read_range` yields an empty string.

mod attributes;
mod range;

pub use attributes::{describe, FileReport};
pub use range::{read_range, read_range_lossy};
