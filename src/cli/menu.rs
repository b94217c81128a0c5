//! Menu choices

use std::io::{self, Write};

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    SearchByName,
    DeleteByName,
    SortByMarks,
    SortByName,
    FileAttributes,
    RandomRead,
    SaveAndExit,

    /// Anything that is not a number from 1 to 9
    Invalid,
}

impl MenuChoice {
    /// Parse a (trimmed) menu line
    pub fn parse(line: &str) -> Self {
        match line.trim().parse::<i32>() {
            Ok(1) => Self::Add,
            Ok(2) => Self::ViewAll,
            Ok(3) => Self::SearchByName,
            Ok(4) => Self::DeleteByName,
            Ok(5) => Self::SortByMarks,
            Ok(6) => Self::SortByName,
            Ok(7) => Self::FileAttributes,
            Ok(8) => Self::RandomRead,
            Ok(9) => Self::SaveAndExit,
            _ => Self::Invalid,
        }
    }

    /// Write the full menu followed by the choice prompt
    pub fn render<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "Capstone Student Menu")?;
        writeln!(out, "1. Add Student")?;
        writeln!(out, "2. View All Students")?;
        writeln!(out, "3. Search by Name")?;
        writeln!(out, "4. Delete by Name")?;
        writeln!(out, "5. Sort by Marks")?;
        writeln!(out, "6. Sort by Name")?;
        writeln!(out, "7. File Attributes")?;
        writeln!(out, "8. Random Read Demo")?;
        writeln!(out, "9. Save and Exit")?;
        write!(out, "Enter choice: ")?;
        out.flush()
    }
}
