//! Package manager detection

use std::fmt;

/// Environment variable set by npm, pnpm and yarn when running a binary
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Binary name of the package manager
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Pick a package manager from an `npm_config_user_agent` value.
    ///
    /// The value looks like `pnpm/8.6.0 npm/? node/v20.3.0 linux x64`, so only
    /// the prefix matters. Anything unrecognised falls back to npm.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.starts_with("yarn") => PackageManager::Yarn,
            Some(ua) if ua.starts_with("pnpm") => PackageManager::Pnpm,
            _ => PackageManager::Npm,
        }
    }

    /// Command that installs the project dependencies
    pub fn install_command(&self) -> String {
        format!("{} install", self.name())
    }

    /// Command that starts the development server
    pub fn run_command(&self, script: &str) -> String {
        format!("{} run {}", self.name(), script)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the package manager from an injected user agent lookup
pub fn detect_package_manager<F>(user_agent: F) -> PackageManager
where
    F: FnOnce() -> Option<String>,
{
    PackageManager::from_user_agent(user_agent().as_deref())
}

/// Detect the package manager from the process environment
pub fn detect_from_env() -> PackageManager {
    detect_package_manager(|| std::env::var(USER_AGENT_ENV).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_yarn() {
        let pm = PackageManager::from_user_agent(Some("yarn/1.22.19 npm/? node/v18.16.0"));
        assert_eq!(pm, PackageManager::Yarn);
    }

    #[test]
    fn test_detects_pnpm() {
        let pm = PackageManager::from_user_agent(Some("pnpm/8.6.0 npm/? node/v20.3.0 linux x64"));
        assert_eq!(pm, PackageManager::Pnpm);
    }

    #[test]
    fn test_npm_and_unknown_fall_back_to_npm() {
        assert_eq!(
            PackageManager::from_user_agent(Some("npm/9.6.7 node/v20.3.0")),
            PackageManager::Npm
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("bun/1.0.0")),
            PackageManager::Npm
        );
        assert_eq!(PackageManager::from_user_agent(Some("")), PackageManager::Npm);
        assert_eq!(PackageManager::from_user_agent(None), PackageManager::Npm);
    }

    #[test]
    fn test_prefix_only() {
        // "yarn" appearing later in the string does not count
        let pm = PackageManager::from_user_agent(Some("npm/9.0.0 yarn/1.0.0"));
        assert_eq!(pm, PackageManager::Npm);
    }

    #[test]
    fn test_injected_detector() {
        assert_eq!(
            detect_package_manager(|| Some("pnpm/9.0.0".to_string())),
            PackageManager::Pnpm
        );
        assert_eq!(detect_package_manager(|| None), PackageManager::Npm);
    }

    #[test]
    fn test_commands() {
        assert_eq!(PackageManager::Yarn.install_command(), "yarn install");
        assert_eq!(PackageManager::Pnpm.run_command("dev"), "pnpm run dev");
        assert_eq!(PackageManager::Npm.to_string(), "npm");
    }
}
