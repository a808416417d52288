//! Error types for project scaffolding

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DukeError {
    #[error("Parent directory does not exist: {}", .0.display())]
    ParentMissing(PathBuf),

    #[error("Path exists and is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write log file '{}': {source}", path.display())]
    LogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Setup cancelled.")]
    Cancelled,
}
