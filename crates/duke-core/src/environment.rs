//! Process environment seen by the scaffolder
//!
//! Prompts and directory resolution read the working directory and the
//! invoking package manager through this trait so tests can substitute them.

use crate::naming;
use crate::package_manager::{self, PackageManager};
use std::path::PathBuf;

pub trait Environment {
    /// Absolute current working directory
    fn current_dir(&self) -> PathBuf;

    /// Basename of the current working directory
    fn current_dir_name(&self) -> String {
        self.current_dir()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Package manager that launched the CLI
    fn package_manager(&self) -> PackageManager;
}

/// Environment backed by the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn current_dir(&self) -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    fn current_dir_name(&self) -> String {
        naming::current_dir_name()
    }

    fn package_manager(&self) -> PackageManager {
        package_manager::detect_from_env()
    }
}
