//! Project choices and the final plan

use crate::package_manager::PackageManager;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Kind of starter project to scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectType {
    #[default]
    ReactSpa,
    ReactFirebaseSpa,
    ReactNative,
    Next,
    NodeJs,
    NodeJsMicroservices,
}

impl ProjectType {
    /// All project types in prompt order
    pub const ALL: [ProjectType; 6] = [
        ProjectType::ReactSpa,
        ProjectType::ReactFirebaseSpa,
        ProjectType::ReactNative,
        ProjectType::Next,
        ProjectType::NodeJs,
        ProjectType::NodeJsMicroservices,
    ];

    /// Stable identifier, also accepted by `FromStr`
    pub fn value(&self) -> &'static str {
        match self {
            ProjectType::ReactSpa => "react-spa",
            ProjectType::ReactFirebaseSpa => "react-fb-spa",
            ProjectType::ReactNative => "react-native",
            ProjectType::Next => "next",
            ProjectType::NodeJs => "nodejs",
            ProjectType::NodeJsMicroservices => "nodejs-mcs",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::ReactSpa => "React SPA Project",
            ProjectType::ReactFirebaseSpa => "React & Firebase Project",
            ProjectType::ReactNative => "React native Project",
            ProjectType::Next => "NextJs Project",
            ProjectType::NodeJs => "Nodejs Project",
            ProjectType::NodeJsMicroservices => "Nodejs Microservice Project",
        }
    }

    /// Short label shown once the choice is made
    pub fn short(&self) -> &'static str {
        match self {
            ProjectType::ReactSpa => "React - SPA Project",
            ProjectType::ReactFirebaseSpa => "React Firebase Project",
            ProjectType::ReactNative => "React Native",
            ProjectType::Next => "NextJs",
            ProjectType::NodeJs => "Nodejs",
            ProjectType::NodeJsMicroservices => "Nodejs Microservices",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.value() == s)
            .ok_or_else(|| format!("Unknown project type: {}", s))
    }
}

/// Language offered in the language prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    TypeScript,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TypeScript, Language::JavaScript];

    pub fn value(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Projects are always generated in TypeScript.
    /// Returns the language to use and whether the choice was overridden.
    pub fn resolve(self) -> (Language, bool) {
        (Language::TypeScript, self != Language::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional packages that can be enabled in a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AvailablePackage {
    EnvVariables,
}

impl AvailablePackage {
    pub const ALL: [AvailablePackage; 1] = [AvailablePackage::EnvVariables];

    pub fn name(&self) -> &'static str {
        match self {
            AvailablePackage::EnvVariables => "envVariables",
        }
    }

    /// Whether the package is enabled regardless of the user's selection
    pub fn always_in_use(&self) -> bool {
        matches!(self, AvailablePackage::EnvVariables)
    }

    /// Packages the user is asked about
    pub fn promptable() -> Vec<AvailablePackage> {
        Self::ALL
            .into_iter()
            .filter(|p| !p.always_in_use())
            .collect()
    }
}

impl fmt::Display for AvailablePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// In-use flag for every available package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSelection {
    in_use: BTreeMap<AvailablePackage, bool>,
}

impl PackageSelection {
    pub fn from_selected(selected: &[AvailablePackage]) -> Self {
        let in_use = AvailablePackage::ALL
            .into_iter()
            .map(|p| (p, p.always_in_use() || selected.contains(&p)))
            .collect();
        Self { in_use }
    }

    pub fn in_use(&self, package: AvailablePackage) -> bool {
        self.in_use.get(&package).copied().unwrap_or(false)
    }

    /// Packages that are enabled, in declaration order
    pub fn enabled(&self) -> Vec<AvailablePackage> {
        self.in_use
            .iter()
            .filter(|(_, used)| **used)
            .map(|(p, _)| *p)
            .collect()
    }
}

/// Every answer needed to create the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    /// Name recorded in the project metadata
    pub app_name: String,
    /// Directory path as typed, scope segments removed
    pub path: String,
    pub project_type: ProjectType,
    pub language: Language,
    pub packages: PackageSelection,
    /// Initialize a git repository
    pub git: bool,
    /// Install dependencies
    pub install: bool,
    pub package_manager: PackageManager,
}

impl ProjectPlan {
    /// Human-readable recap of the plan
    pub fn summary_lines(&self) -> Vec<String> {
        let packages = self
            .packages
            .enabled()
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>();
        let yes_no = |b: bool| if b { "yes" } else { "no" };

        vec![
            format!("Name: {}", self.app_name),
            format!("Directory: {}", self.path),
            format!("Project: {}", self.project_type.short()),
            format!("Language: {}", self.language),
            format!(
                "Packages: {}",
                if packages.is_empty() {
                    "none".to_string()
                } else {
                    packages.join(", ")
                }
            ),
            format!("Git: {}", yes_no(self.git)),
            format!(
                "Install: {} ({})",
                yes_no(self.install),
                self.package_manager.install_command()
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> ProjectPlan {
        ProjectPlan {
            app_name: "@mono/app".to_string(),
            path: "dir/app".to_string(),
            project_type: ProjectType::Next,
            language: Language::TypeScript,
            packages: PackageSelection::from_selected(&[]),
            git: true,
            install: false,
            package_manager: PackageManager::Pnpm,
        }
    }

    #[test]
    fn test_project_type_values_round_trip() {
        let values: Vec<&str> = ProjectType::ALL.iter().map(|t| t.value()).collect();
        assert_eq!(
            values,
            ["react-spa", "react-fb-spa", "react-native", "next", "nodejs", "nodejs-mcs"]
        );
        for t in ProjectType::ALL {
            assert_eq!(t.value().parse::<ProjectType>().unwrap(), t);
        }
        assert!("vue".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_default_project_type_is_first() {
        assert_eq!(ProjectType::default(), ProjectType::ALL[0]);
    }

    #[test]
    fn test_language_always_resolves_to_typescript() {
        assert_eq!(Language::TypeScript.resolve(), (Language::TypeScript, false));
        assert_eq!(Language::JavaScript.resolve(), (Language::TypeScript, true));
    }

    #[test]
    fn test_env_variables_not_promptable() {
        assert!(!AvailablePackage::promptable().contains(&AvailablePackage::EnvVariables));
    }

    #[test]
    fn test_env_variables_always_in_use() {
        let selection = PackageSelection::from_selected(&[]);
        assert!(selection.in_use(AvailablePackage::EnvVariables));
        assert_eq!(selection.enabled(), vec![AvailablePackage::EnvVariables]);
    }

    #[test]
    fn test_summary_lines() {
        let lines = sample_plan().summary_lines();
        assert_eq!(lines[0], "Name: @mono/app");
        assert_eq!(lines[1], "Directory: dir/app");
        assert_eq!(lines[2], "Project: NextJs");
        assert_eq!(lines[3], "Language: TypeScript");
        assert_eq!(lines[4], "Packages: envVariables");
        assert_eq!(lines[5], "Git: yes");
        assert_eq!(lines[6], "Install: no (pnpm install)");
    }
}
