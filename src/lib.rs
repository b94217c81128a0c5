//! # Rollbook
//!
//! A small student roster backed by a flat delimited text file:
//! - Ordered in-memory roster with name and roll-number indexes
//! - Best-effort persistence that tolerates malformed lines
//! - File metadata reports and raw byte-range reads
//! - Interactive numbered menu over any line-oriented input
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Interactive Session                      │
//! │                  (menu over stdin/stdout)                    │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//! ┌──────────────▼──────────────┐   ┌───────────▼───────────────┐
//! │           Roster             │   │         Inspect           │
//! │  students + by_name/by_roll  │   │  describe / read_range    │
//! └──────────────┬──────────────┘   └───────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!         ┌─────────────┐               ┌──────────────┐
//!         │    Codec    │──────────────▶│ students.txt │
//!         │ (read/write)│               └──────────────┘
//!         └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod codec;
pub mod inspect;
pub mod roster;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RosterError, Result};
pub use config::Config;
pub use record::Student;
pub use roster::Roster;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Rollbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
