//! Project directory resolution and creation

use crate::error::DukeError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Target directory for a new project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    /// Absolute path of the directory
    pub path: PathBuf,
    /// Number of entries already present (0 if the directory does not exist)
    pub existing_entries: usize,
}

impl ProjectDir {
    pub fn is_empty(&self) -> bool {
        self.existing_entries == 0
    }
}

/// Resolve `path` against `cwd` and validate it.
///
/// An empty path or `.` is the current directory itself. The parent must exist,
/// and an existing target must be a directory.
pub fn resolve_project_dir(cwd: &Path, path: &str) -> Result<ProjectDir, DukeError> {
    let target = if path.is_empty() || path == "." {
        cwd.to_path_buf()
    } else {
        let p = PathBuf::from(path);
        if p.is_absolute() {
            p
        } else {
            cwd.join(p)
        }
    };

    if let Some(parent) = target.parent() {
        if !parent.exists() && parent != Path::new("") {
            return Err(DukeError::ParentMissing(parent.to_path_buf()));
        }
    }

    if !target.exists() {
        return Ok(ProjectDir {
            path: target,
            existing_entries: 0,
        });
    }

    if !target.is_dir() {
        return Err(DukeError::NotADirectory(target));
    }

    let existing_entries = std::fs::read_dir(&target)
        .map_err(|source| DukeError::ReadDir {
            path: target.clone(),
            source,
        })?
        .count();

    Ok(ProjectDir {
        path: target,
        existing_entries,
    })
}

/// Create the project directory (no-op if it already exists)
pub async fn create_project_dir(dir: &ProjectDir) -> Result<(), DukeError> {
    fs::create_dir_all(&dir.path)
        .await
        .map_err(|source| DukeError::CreateDir {
            path: dir.path.clone(),
            source,
        })
}
