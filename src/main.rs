// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use stringmerger::app_controller::{Controller, OUTPUT_FILENAME};

/// CLI Wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// StringMerger - merge original and translated string tables
///
/// Joins two JSON string tables by composite key (editor_id, type, index)
/// and writes the entries that received a non-empty translation to
/// output.json in the current working directory.
#[derive(Parser, Debug)]
#[command(name = "stringmerger")]
#[command(version = "1.0.0")]
#[command(about = "Merge original and translated localization string tables")]
#[command(long_about = "StringMerger joins an original and a translated JSON string table by
composite key (editor_id, type, index) and writes the entries present in
both tables with a non-empty translation to output.json.

EXAMPLES:
    stringmerger original.json translated.json
    stringmerger --log-level debug original.json translated.json

INPUT FORMAT:
    Each input file is a UTF-8 JSON array of objects with the fields
    'editor_id' (string), 'type' (string), 'index' (integer or null) and
    'string' (string). A missing required field or a wrong field type in
    any record aborts the whole run.")]
struct CommandLineOptions {
    /// Path to the original strings JSON file
    #[arg(value_name = "ORIGINAL")]
    original: PathBuf,

    /// Path to the translated strings JSON file
    #[arg(value_name = "TRANSLATED")]
    translated: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Initialize the logger once with info level by default
    // The level is updated after argument parsing if needed
    if CustomLogger::init(LevelFilter::Info).is_err() {
        eprintln!("Error: failed to initialize logger");
        return ExitCode::from(1);
    }

    // Parse command line arguments; usage errors print to standard error
    // and exit with status 1, before any file access
    let cli = match CommandLineOptions::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let is_display = matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = err.print();
            return if is_display {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
        }
    };

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(options: &CommandLineOptions) -> Result<()> {
    let controller = Controller::new();
    controller.run(
        &options.original,
        &options.translated,
        Path::new(OUTPUT_FILENAME),
    )?;

    // The confirmation line is part of the CLI contract and goes to
    // standard output, not through the logger
    println!("Merge successful. Merged JSON saved to {}.", OUTPUT_FILENAME);

    Ok(())
}
