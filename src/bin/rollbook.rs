//! Rollbook Binary
//!
//! Loads the roster, runs the interactive menu on stdin/stdout, saves on exit.

use std::io;

use clap::Parser;
use rollbook::cli::Session;
use rollbook::{Config, Roster};
use tracing_subscriber::{fmt, EnvFilter};

/// Rollbook student roster
#[derive(Parser, Debug)]
#[command(name = "rollbook")]
#[command(about = "Interactive student roster backed by a flat text file")]
#[command(version)]
struct Args {
    /// Backing data file
    #[arg(short, long, default_value = "students.txt")]
    data_file: String,

    /// Length used by the random read when the prompted length is not a number
    #[arg(short = 'n', long, default_value = "64")]
    read_length: i64,
}

fn main() {
    // Logs go to stderr so they never interleave with the menu on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_file(&args.data_file)
        .default_read_length(args.read_length)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("{}", e);
        return;
    }

    tracing::info!("Rollbook v{}", rollbook::VERSION);
    tracing::info!("Data file: {}", config.data_file.display());

    let mut roster = Roster::new();
    roster.load(&config.data_file);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    if let Err(e) = session.run(&mut roster) {
        tracing::error!("Session error: {}", e);
    }
}
