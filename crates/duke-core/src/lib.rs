//! Duke Core - Shared library for the `create-duke-app` scaffolder
//!
//! This library turns a handful of answers into a starter project directory.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for name/path parsing, package
//!   manager detection, directory resolution and logging
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` and `Environment` traits,
//!   immutable `CliOptions` and the final `ProjectPlan`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use duke_core::naming::parse_name_and_path;
//!
//! let parsed = parse_name_and_path("dir/@mono/app", || "cwd".to_string());
//! assert_eq!(parsed.app_name, "@mono/app");
//! assert_eq!(parsed.path, "dir/app");
//! ```

pub mod environment;
pub mod error;
pub mod logger;
pub mod naming;
pub mod options;
pub mod package_manager;
pub mod product;
pub mod project;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use environment::{Environment, SystemEnvironment};
pub use error::DukeError;
pub use naming::{parse_name_and_path, ParsedName};
pub use options::{CliFlags, CliOptions, DEFAULT_APP_NAME};
pub use package_manager::PackageManager;
pub use product::ProductConfig;
pub use project::{AvailablePackage, Language, PackageSelection, ProjectPlan, ProjectType};

#[cfg(feature = "tui")]
pub use tui::run;
