//! Leveled console logger with an append-to-file sink

use crate::error::DukeError;
use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub fn error(message: impl Display) {
    println!("{}", message.to_string().red());
}

pub fn warn(message: impl Display) {
    println!("{}", message.to_string().yellow());
}

pub fn info(message: impl Display) {
    println!("{}", message.to_string().cyan());
}

pub fn success(message: impl Display) {
    println!("{}", message.to_string().green());
}

/// Format a single log file line
fn format_entry(timestamp: DateTime<Utc>, message: &str) -> String {
    format!(
        "[{}]: {}\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        message
    )
}

/// Append a timestamped line to `file` and echo it to the console
pub fn write(file: &Path, message: impl Display) -> Result<(), DukeError> {
    let message = message.to_string();
    let log_err = |source| DukeError::LogWrite {
        path: file.to_path_buf(),
        source,
    };

    let mut handle = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .map_err(log_err)?;
    handle
        .write_all(format_entry(Utc::now(), &message).as_bytes())
        .map_err(log_err)?;

    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("{} log to file: {}", message.green(), file_name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_entry() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(
            format_entry(ts, "project created"),
            "[2024-03-01T12:30:00.000Z]: project created\n"
        );
    }

    #[test]
    fn test_write_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("duke.log");

        write(&file, "first").unwrap();
        write(&file, "second").unwrap();

        let content = std::fs::read_to_string(&file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('[') && lines[0].ends_with("]: first"));
        assert!(lines[1].ends_with("]: second"));
        // No ANSI escapes in the file
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    fn test_console_levels_accept_any_display() {
        error("error");
        warn(format!("{} items", 3));
        info(42);
        success(&"done");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing").join("duke.log");

        let err = write(&file, "nope").unwrap_err();
        assert!(matches!(err, DukeError::LogWrite { .. }));
    }
}
