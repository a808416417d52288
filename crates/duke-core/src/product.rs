//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to define its identity and the
//! instructions printed after the project directory is created.

use crate::project::ProjectPlan;

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// App name used when the user provides none
    fn default_app_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, plan: &ProjectPlan) -> Vec<String> {
        let mut steps = Vec::new();
        let pm = plan.package_manager;

        if !plan.path.is_empty() && plan.path != "." {
            steps.push(format!("cd {}", plan.path));
        }

        if plan.git {
            steps.push("git init".to_string());
        }

        if plan.install {
            steps.push(pm.install_command());
        }

        steps.push(pm.run_command("dev"));

        steps
    }
}
