//! Interactive session tests
//!
//! Tests verify:
//! - Menu routing for every choice
//! - Re-prompting on bad numbers
//! - Save on exit and on end of input

use std::fs;
use std::io::{self, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use rollbook::cli::{MenuChoice, Session};
use rollbook::{Config, Roster, Student};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_file() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("students.txt");
    (temp_dir, path)
}

/// Reader that fails every read
struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "input device gone"))
    }
}

/// Run a session over `input`, returning everything written to the output
fn run_session(path: &Path, roster: &mut Roster, input: &str) -> String {
    let config = Config::builder().data_file(path).build();
    let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config);
    session.run(roster).unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

// =============================================================================
// Menu Parsing Tests
// =============================================================================

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("1"), MenuChoice::Add);
    assert_eq!(MenuChoice::parse(" 5 "), MenuChoice::SortByMarks);
    assert_eq!(MenuChoice::parse("9"), MenuChoice::SaveAndExit);
    assert_eq!(MenuChoice::parse("0"), MenuChoice::Invalid);
    assert_eq!(MenuChoice::parse("10"), MenuChoice::Invalid);
    assert_eq!(MenuChoice::parse("add"), MenuChoice::Invalid);
    assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid);
}

#[test]
fn test_menu_render_lists_all_entries() {
    let mut out = Vec::new();
    MenuChoice::render(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("Capstone Student Menu\n"));
    assert!(text.contains("8. Random Read Demo\n"));
    assert!(text.ends_with("Enter choice: "));
}

// =============================================================================
// Session Flow Tests
// =============================================================================

#[test]
fn test_add_and_save_and_exit() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let out = run_session(&path, &mut roster, "1\n7\nAnn\na@x.com\nCS\n88.5\n9\n");

    assert!(out.contains("Student added."));
    assert!(out.ends_with("Saved. Exiting.\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "7,Ann,a@x.com,CS,88.5\n");
}

#[test]
fn test_add_reprompts_on_bad_numbers() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let out = run_session(
        &path,
        &mut roster,
        "1\nseven\n7\nAnn\na@x.com\nCS\nlots\n88.5\n9\n",
    );

    assert!(out.contains("Invalid integer. Try again: "));
    assert!(out.contains("Invalid number. Try again: "));
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.students()[0].roll_no(), 7);
}

#[test]
fn test_add_rejects_blank_course() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let out = run_session(&path, &mut roster, "1\n7\nAnn\na@x.com\n   \n88.5\n9\n");

    assert!(out.contains("Invalid data. Not added."));
    assert!(roster.is_empty());
}

#[test]
fn test_invalid_choice_message() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let out = run_session(&path, &mut roster, "abc\n42\n9\n");

    assert_eq!(out.matches("Invalid choice.").count(), 2);
}

#[test]
fn test_search_and_delete() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();
    roster
        .add(Student::new(1, "Ann", "a@x.com", "CS", 88.5))
        .unwrap();

    let out = run_session(&path, &mut roster, "3\nANN\n3\nBob\n4\nbob\n4\nann\n9\n");

    assert!(out.contains("Name: Ann"));
    assert!(out.contains("No records found."));
    assert!(out.contains("No matching records."));
    assert!(out.contains("Deleted."));
    assert!(roster.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_sort_by_marks_descending_prints_list() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();
    roster.add(Student::new(1, "Ann", "a@x.com", "CS", 60.0)).unwrap();
    roster.add(Student::new(2, "Bob", "b@x.com", "CS", 80.0)).unwrap();

    let out = run_session(&path, &mut roster, "5\nn\n9\n");

    let (_, sorted) = out.split_once("Sorted Student List by Marks:").unwrap();
    assert_eq!(roster.students()[0].name(), "Bob");
    let bob = sorted.find("Name: Bob").unwrap();
    let ann = sorted.find("Name: Ann").unwrap();
    assert!(bob < ann);
}

#[test]
fn test_sort_by_marks_ascending_on_yes() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();
    roster.add(Student::new(1, "Bob", "b@x.com", "CS", 80.0)).unwrap();
    roster.add(Student::new(2, "Ann", "a@x.com", "CS", 60.0)).unwrap();

    run_session(&path, &mut roster, "5\nYes\n9\n");

    assert_eq!(roster.students()[0].name(), "Ann");
}

#[test]
fn test_sort_by_name() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();
    roster.add(Student::new(1, "bob", "b@x.com", "CS", 80.0)).unwrap();
    roster.add(Student::new(2, "Ann", "a@x.com", "CS", 60.0)).unwrap();

    let out = run_session(&path, &mut roster, "6\n9\n");

    assert!(out.contains("Sorted Student List by Name:"));
    assert_eq!(fs::read_to_string(&path).unwrap().lines().next(), Some("2,Ann,a@x.com,CS,60.0"));
}

#[test]
fn test_file_attributes_and_random_read() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "1,Ann,a@x.com,CS,88.5\n").unwrap();
    let mut roster = Roster::new();
    roster.load(&path);

    let out = run_session(&path, &mut roster, "7\n8\n2\n3\n9\n");

    assert!(out.contains("Exists: true"));
    assert!(out.contains("Size(bytes): 22"));
    assert!(out.contains("Random read snippet:\nAnn\n"));
}

#[test]
fn test_random_read_defaults_on_bad_numbers() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "1,Ann,a@x.com,CS,88.5\n").unwrap();
    let mut roster = Roster::new();
    roster.load(&path);

    // Position defaults to 0, length to 64 (clamped to the file)
    let out = run_session(&path, &mut roster, "8\nhere\nall\n9\n");

    assert!(out.contains("Random read snippet:\n1,Ann,a@x.com,CS,88.5\n"));
}

#[test]
fn test_echoes_loaded_records() {
    let (_temp, path) = setup_temp_file();
    fs::write(&path, "1,Ann,a@x.com,CS,88.5\n").unwrap();
    let mut roster = Roster::new();
    roster.load(&path);

    let out = run_session(&path, &mut roster, "9\n");

    assert!(out.starts_with("Loaded students from file:\nRoll No: 1\n"));
}

#[test]
fn test_no_echo_when_disabled() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();
    roster.add(Student::new(1, "Ann", "a@x.com", "CS", 88.5)).unwrap();

    let config = Config::builder().data_file(&path).echo_loaded(false).build();
    let mut session = Session::new(Cursor::new(b"9\n".to_vec()), Vec::new(), config);
    session.run(&mut roster).unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();

    assert!(out.starts_with("Capstone Student Menu"));
}

// =============================================================================
// End of Input Tests
// =============================================================================

#[test]
fn test_end_of_input_saves() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let out = run_session(&path, &mut roster, "1\n7\nAnn\na@x.com\nCS\n88.5\n");

    assert!(out.ends_with("Saved. Exiting.\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "7,Ann,a@x.com,CS,88.5\n");
}

#[test]
fn test_end_of_input_mid_add_discards_partial_record() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let out = run_session(&path, &mut roster, "1\n7\nAnn\n");

    assert!(roster.is_empty());
    assert!(out.ends_with("Saved. Exiting.\n"));
}

#[test]
fn test_failed_save_is_reported_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing_dir").join("students.txt");
    let mut roster = Roster::new();

    let out = run_session(&path, &mut roster, "9\n");

    assert!(out.contains("Save failed:"));
}

// =============================================================================
// Garbled and Failing Input Tests
// =============================================================================

#[test]
fn test_invalid_utf8_choice_is_invalid_not_fatal() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let mut input = b"1\n7\nAnn\na@x.com\nCS\n88.5\n".to_vec();
    input.extend_from_slice(b"\xff\n9\n");

    let config = Config::builder().data_file(&path).build();
    let mut session = Session::new(Cursor::new(input), Vec::new(), config);
    session.run(&mut roster).unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();

    assert!(out.contains("Invalid choice."));
    assert!(out.ends_with("Saved. Exiting.\n"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "7,Ann,a@x.com,CS,88.5\n");
}

#[test]
fn test_invalid_utf8_number_reprompts() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let mut input = b"1\n".to_vec();
    input.extend_from_slice(b"\xfe\xff\n7\nAnn\na@x.com\nCS\n88.5\n9\n");

    let config = Config::builder().data_file(&path).build();
    let mut session = Session::new(Cursor::new(input), Vec::new(), config);
    session.run(&mut roster).unwrap();
    let out = String::from_utf8(session.into_output()).unwrap();

    assert!(out.contains("Invalid integer. Try again: "));
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_input_failure_still_saves() {
    let (_temp, path) = setup_temp_file();
    let mut roster = Roster::new();

    let input = BufReader::new(Cursor::new(b"1\n7\nAnn\na@x.com\nCS\n88.5\n".to_vec()).chain(BrokenInput));
    let config = Config::builder().data_file(&path).build();
    let mut session = Session::new(input, Vec::new(), config);

    assert!(session.run(&mut roster).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "7,Ann,a@x.com,CS,88.5\n");
}
