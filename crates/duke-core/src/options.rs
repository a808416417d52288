//! Command-line options, built once from parsed flags

/// Name used when the user provides none
pub const DEFAULT_APP_NAME: &str = "my-duke-app";

/// Boolean switches accepted on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliFlags {
    /// Do not initialize a git repository
    pub no_git: bool,
    /// Do not run the package manager's install command
    pub no_install: bool,
    /// Skip every prompt and take the default answer
    pub default: bool,
}

/// Options resolved from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    app_name: Option<String>,
    flags: CliFlags,
}

impl CliOptions {
    /// Blank names are treated as not provided
    pub fn new(app_name: Option<String>, flags: CliFlags) -> Self {
        let app_name = app_name.filter(|name| !name.trim().is_empty());
        Self { app_name, flags }
    }

    /// App name given on the command line, if any
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    /// App name given on the command line, or `default`
    pub fn app_name_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.app_name().unwrap_or(default)
    }

    pub fn flags(&self) -> CliFlags {
        self.flags
    }
}
