//! Interactive session
//!
//! Blocking request/response loop: render menu, read a line, run one
//! operation, repeat until save-and-exit or end of input.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::Result;
use crate::inspect;
use crate::record::Student;
use crate::roster::Roster;

use super::MenuChoice;

/// What the loop does after handling a choice
enum Step {
    Continue,
    Exit,
}

/// Menu session over a line-oriented input and an output sink
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run until the user saves and exits, or the input is exhausted
    ///
    /// The roster is saved to the configured data file before returning,
    /// even when the loop stopped on an I/O error. Errors are still
    /// returned so the caller can log them.
    pub fn run(&mut self, roster: &mut Roster) -> Result<()> {
        let outcome = self.drive(roster);
        if let Err(e) = &outcome {
            tracing::error!("Session interrupted: {}", e);
        }
        let saved = self.finish(roster);
        outcome.and(saved)
    }

    /// Give back the output sink (used to inspect in-memory sessions)
    pub fn into_output(self) -> W {
        self.output
    }

    fn drive(&mut self, roster: &mut Roster) -> Result<()> {
        if self.config.echo_loaded && !roster.is_empty() {
            writeln!(self.output, "Loaded students from file:")?;
            roster.view_all(&mut self.output)?;
        }

        loop {
            MenuChoice::render(&mut self.output)?;
            let choice = match self.read_line()? {
                Some(line) => MenuChoice::parse(&line),
                None => return Ok(()),
            };

            if let Step::Exit = self.handle(choice, roster)? {
                return Ok(());
            }
        }
    }

    fn handle(&mut self, choice: MenuChoice, roster: &mut Roster) -> Result<Step> {
        match choice {
            MenuChoice::Add => {
                let Some(student) = self.prompt_student()? else {
                    return Ok(Step::Exit);
                };
                match roster.add(student) {
                    Ok(()) => writeln!(self.output, "Student added.\n")?,
                    Err(e) => {
                        tracing::info!("Rejected record: {}", e);
                        writeln!(self.output, "Invalid data. Not added.\n")?;
                    }
                }
            }
            MenuChoice::ViewAll => roster.view_all(&mut self.output)?,
            MenuChoice::SearchByName => {
                let Some(name) = self.prompt("Enter Name to search: ")? else {
                    return Ok(Step::Exit);
                };
                let found = roster.search_by_name(&name);
                if found.is_empty() {
                    writeln!(self.output, "No records found.\n")?;
                }
                for student in &found {
                    writeln!(self.output, "{}\n", student)?;
                }
            }
            MenuChoice::DeleteByName => {
                let Some(name) = self.prompt("Enter Name to delete: ")? else {
                    return Ok(Step::Exit);
                };
                if roster.delete_by_name(&name) > 0 {
                    writeln!(self.output, "Deleted.\n")?;
                } else {
                    writeln!(self.output, "No matching records.\n")?;
                }
            }
            MenuChoice::SortByMarks => {
                let Some(answer) = self.prompt("Sort by marks ascending? (y/n): ")? else {
                    return Ok(Step::Exit);
                };
                roster.sort_by_marks(answer.to_lowercase().starts_with('y'));
                writeln!(self.output, "Sorted Student List by Marks:")?;
                roster.view_all(&mut self.output)?;
            }
            MenuChoice::SortByName => {
                roster.sort_by_name();
                writeln!(self.output, "Sorted Student List by Name:")?;
                roster.view_all(&mut self.output)?;
            }
            MenuChoice::FileAttributes => {
                let report = inspect::describe(&self.config.data_file);
                writeln!(self.output, "{}\n", report)?;
            }
            MenuChoice::RandomRead => {
                let Some(position) = self.prompt("Enter byte position: ")? else {
                    return Ok(Step::Exit);
                };
                let position = position.parse::<i64>().unwrap_or(0);
                let Some(length) = self.prompt("Enter length: ")? else {
                    return Ok(Step::Exit);
                };
                let length = length
                    .parse::<i64>()
                    .unwrap_or(self.config.default_read_length);

                let snippet =
                    inspect::read_range_lossy(&self.config.data_file, position, length);
                writeln!(self.output, "Random read snippet:")?;
                writeln!(self.output, "{}\n", snippet)?;
            }
            MenuChoice::SaveAndExit => return Ok(Step::Exit),
            MenuChoice::Invalid => writeln!(self.output, "Invalid choice.\n")?,
        }

        Ok(Step::Continue)
    }

    /// Save the roster and report the outcome; a failed save is not fatal
    fn finish(&mut self, roster: &Roster) -> Result<()> {
        // Save before writing anything, the output sink may be the thing that failed
        match roster.save(&self.config.data_file) {
            Ok(()) => writeln!(self.output, "Saved. Exiting.")?,
            Err(e) => {
                tracing::error!("Failed to save {}: {}", self.config.data_file.display(), e);
                writeln!(self.output, "Save failed: {}. Exiting.", e)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    // =========================================================================
    // Prompt Helpers
    // =========================================================================

    /// Prompt for all five fields; `None` if input ends part-way
    fn prompt_student(&mut self) -> Result<Option<Student>> {
        let Some(roll_no) = self.prompt_parsed::<i32>("Enter Roll No: ", "Invalid integer")?
        else {
            return Ok(None);
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(None);
        };
        let Some(email) = self.prompt("Enter Email: ")? else {
            return Ok(None);
        };
        let Some(course) = self.prompt("Enter Course: ")? else {
            return Ok(None);
        };
        let Some(marks) = self.prompt_parsed::<f64>("Enter Marks: ", "Invalid number")? else {
            return Ok(None);
        };

        Ok(Some(Student::new(roll_no, name, email, course, marks)))
    }

    /// Prompt until the answer parses as `T`
    fn prompt_parsed<T: std::str::FromStr>(
        &mut self,
        prompt: &str,
        complaint: &str,
    ) -> Result<Option<T>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Ok(value) = line.parse::<T>() {
                return Ok(Some(value));
            }
            write!(self.output, "{}. Try again: ", complaint)?;
            self.output.flush()?;
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next trimmed input line; `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced, so a garbled line is
    /// treated like any other unparseable answer.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("End of input");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
