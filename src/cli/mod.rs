//! CLI Module
//!
//! Interactive numbered menu driving a [`Roster`](crate::roster::Roster).
//!
//! ## Responsibilities
//! - Render the menu and parse the choice
//! - Prompt for record fields, re-prompting on bad numbers
//! - Route each choice to the roster or the inspect helpers
//!
//! The session is generic over `BufRead`/`Write` so it runs the same
//! against stdin/stdout or in-memory buffers.

mod menu;
mod session;

pub use menu::MenuChoice;
pub use session::Session;
