//! Codec Module
//!
//! Converts between the backing text file and an ordered sequence of
//! [`Student`](crate::record::Student) records.
//!
//! ## Responsibilities
//! - Decode one record per line, skipping lines that do not parse
//! - Encode records in roster order, truncating the target file
//! - Offer strict (`Result`) and best-effort entry points
//!
//! ## Best-effort Contract
//! `read_students` and `write_students` never fail. A missing file
//! decodes to an empty sequence, and any I/O failure is logged and
//! degrades to an empty sequence (read) or a no-op (write). An empty
//! result is therefore ambiguous; use `decode_file` / `encode_file`
//! when the caller needs to tell the cases apart.

mod reader;
mod writer;

pub use reader::{decode_file, decode_str, parse_line, read_students, DecodeReport};
pub use writer::{encode_file, encode_to, write_students};
