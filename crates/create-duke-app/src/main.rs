//! create-duke-app - Project scaffolding for TypeScript starter projects

use anyhow::Result;
use clap::{ArgAction, Parser};
use duke_core::logger;
use duke_core::tui::CreateArgs;
use duke_core::{
    CliFlags, CliOptions, DukeError, ProductConfig, SystemEnvironment, DEFAULT_APP_NAME,
};
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const AFTER_HELP: &str = "The duke cli was inspired by easiness and simplicity \
and has been used to build awesome apps like";

/// Duke product configuration
#[derive(Clone)]
pub struct DukeConfig;

impl ProductConfig for DukeConfig {
    fn name(&self) -> &'static str {
        "create-duke-app"
    }

    fn display_name(&self) -> &'static str {
        "create-duke-app"
    }

    fn default_app_name(&self) -> &'static str {
        DEFAULT_APP_NAME
    }

    fn cli_description(&self) -> &'static str {
        "A CLI tool to quickly scaffold ts projects with your own structure or default setups"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-duke-app")]
#[command(
    about = "A CLI tool to quickly scaffold ts projects with your own structure or default setups"
)]
#[command(version = CLI_VERSION, disable_version_flag = true)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// The name of the application, as well as the name of the directory to create
    #[arg(value_name = "dir")]
    pub dir: Option<String>,

    /// Explicitly tell the CLI to not initialize a new git repo in the project
    #[arg(long = "noGit", alias = "no-git")]
    pub no_git: bool,

    /// Explicitly tell the CLI to not run the package manager's install command
    #[arg(long = "noInstall", alias = "no-install")]
    pub no_install: bool,

    /// Bypass the CLI and use all default options to bootstrap a new project
    #[arg(short = 'y', long = "default")]
    pub default: bool,

    /// Append a record of the created project to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Display the version number
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        let flags = CliFlags {
            no_git: args.no_git,
            no_install: args.no_install,
            default: args.default,
        };
        CreateArgs {
            options: CliOptions::new(args.dir, flags),
            log_file: args.log_file,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = DukeConfig;

    let result = duke_core::run(&config, args.into(), &SystemEnvironment).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        match e.downcast_ref::<DukeError>() {
            Some(DukeError::Cancelled) => logger::warn(&e),
            _ => logger::error(format!("{:#}", e)),
        }
        std::process::exit(1);
    }

    Ok(())
}
