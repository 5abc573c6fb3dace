//! Structure probe for note files.
//!
//! # Responsibility
//! - Load one note file through the in-memory accessor.
//! - Print every structural index as deterministic `key=value` lines.
//! - Optionally remove a heading section and print the resulting text.

use chrono::NaiveDate;
use clap::Parser;
use log::error;
use noteline_core::{
    active_content_end, active_content_start, default_log_level, display_title,
    find_frontmatter_end, find_metadata_line, init_logging, remove_section, smart_prepend_point,
    LineLookup, MemoryNote, NoteDocument,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "noteline_cli")]
#[command(about = "Print the structural line indexes of a note", long_about = None)]
struct Args {
    /// Treat the note as a calendar note. Without a value the date is read
    /// from a `YYYYMMDD` filename.
    #[arg(long, require_equals = true, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    calendar: Option<Option<NaiveDate>>,

    /// Log level used with --log-dir (default depends on build mode)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,

    /// Remove the section under the last heading starting with PREFIX
    #[arg(long, value_name = "PREFIX")]
    remove_section: Option<String>,

    /// Note file to inspect
    path: PathBuf,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| format!("invalid calendar date `{raw}`: {err}"))
}

fn load_note(args: &Args, path: &Path) -> Result<MemoryNote, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read `{}`: {err}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    match args.calendar {
        None => Ok(MemoryNote::project(filename, &text)),
        Some(Some(date)) => Ok(MemoryNote::calendar(date, &text)),
        Some(None) => {
            let stem = filename.split('.').next().unwrap_or_default();
            let date = NaiveDate::parse_from_str(stem, "%Y%m%d")
                .map_err(|err| format!("cannot read date from `{filename}`: {err}"))?;
            Ok(MemoryNote::calendar(date, &text))
        }
    }
}

fn lookup_field(lookup: LineLookup) -> String {
    match lookup {
        LineLookup::Found(index) => index.to_string(),
        LineLookup::EmptyDocument => "empty".to_string(),
        LineLookup::Unterminated => "unterminated".to_string(),
        LineLookup::NotFound => "none".to_string(),
    }
}

fn run(args: Args) -> Result<(), String> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| err.to_string())?;
    }

    let mut note = load_note(&args, &args.path)?;

    println!("note={}", display_title(&note));
    println!("lines={}", note.paragraph_count());
    println!(
        "frontmatter_end={}",
        lookup_field(find_frontmatter_end(note.paragraphs()))
    );
    println!("metadata_line={}", lookup_field(find_metadata_line(&note)));
    println!("smart_prepend={}", smart_prepend_point(&note));
    println!("active_end={}", active_content_end(&note));

    if let Some(prefix) = args.remove_section.as_deref() {
        let lookup = remove_section(&mut note, prefix).map_err(|err| err.to_string())?;
        println!("removed_section={}", lookup_field(lookup));
        println!("{}", note.content());
        return Ok(());
    }

    // Last: an empty or title-only note gains a blank line here.
    let start = active_content_start(&mut note).map_err(|err| err.to_string())?;
    println!("active_start={start}");
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_failed module=cli status=error message={message}");
            eprintln!("noteline_cli {}: {message}", noteline_core::core_version());
            ExitCode::FAILURE
        }
    }
}
