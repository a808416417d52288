//! Charm-style CLI prompts using cliclack

use crate::environment::Environment;
use crate::logger;
use crate::naming::parse_name_and_path;
use crate::options::CliOptions;
use crate::package_manager::PackageManager;
use crate::product::ProductConfig;
use crate::project::{AvailablePackage, Language, PackageSelection, ProjectPlan, ProjectType};
use crate::scaffold::{self, ProjectDir};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Options parsed from the command line
    pub options: CliOptions,

    /// Append a record of the created project to this file
    pub log_file: Option<PathBuf>,
}

/// Run the CLI with interactive prompts
pub async fn run<C, E>(config: &C, args: CreateArgs, env: &E) -> Result<ProjectPlan>
where
    C: ProductConfig,
    E: Environment,
{
    cliclack::intro(config.display_name())?;

    let flags = args.options.flags();
    let yes = flags.default;

    // Step 1: Project name (the positional argument skips the prompt)
    let raw_name = prompt_app_name(config, &args.options, yes)?;

    // Step 2: Project type
    let project_type = prompt_project_type(yes)?;

    // Step 3: Language (always TypeScript)
    let language = prompt_language(yes)?;

    // Step 4: Optional packages
    let packages = prompt_packages(yes)?;

    // Step 5: Git
    let git = if flags.no_git {
        cliclack::log::info("Skipping git initialization (--noGit)")?;
        false
    } else {
        prompt_git(yes)?
    };

    // Step 6: Install
    let package_manager = env.package_manager();
    let install = if flags.no_install {
        cliclack::log::info("Skipping dependency installation (--noInstall)")?;
        false
    } else {
        prompt_install(package_manager, yes)?
    };

    // Step 7: Resolve name and directory
    let (app_name, path) = parse_name_and_path(&raw_name, || env.current_dir_name()).into_parts();

    let plan = ProjectPlan {
        app_name,
        path,
        project_type,
        language,
        packages: PackageSelection::from_selected(&packages),
        git,
        install,
        package_manager,
    };

    // Step 8: Create the directory
    let project_dir = select_directory(env, &plan.path, yes)?;
    create_project(&project_dir).await?;

    // Step 9: Summary, log file and next steps
    cliclack::note("Project", plan.summary_lines().join("\n"))?;

    if let Some(log_file) = &args.log_file {
        logger::write(
            log_file,
            format!(
                "Created {} ({}) in {}",
                plan.app_name,
                plan.project_type,
                project_dir.path.display()
            ),
        )
        .context("Failed to record project in log file")?;
    }

    print_next_steps(config, &plan)?;

    Ok(plan)
}

fn prompt_app_name<C: ProductConfig>(
    config: &C,
    options: &CliOptions,
    yes: bool,
) -> Result<String> {
    if let Some(name) = options.app_name() {
        cliclack::log::info(format!("Using project name: {}", name))?;
        return Ok(name.to_string());
    }

    let default_name = config.default_app_name();
    if yes {
        return Ok(default_name.to_string());
    }

    let input: String = cliclack::input("What will your project be called?")
        .placeholder(default_name)
        .default_input(default_name)
        .interact()?;

    let trimmed = input.trim();
    Ok(if trimmed.is_empty() {
        default_name.to_string()
    } else {
        trimmed.to_string()
    })
}

fn prompt_project_type(yes: bool) -> Result<ProjectType> {
    let project_type = if yes {
        ProjectType::default()
    } else {
        let mut select = cliclack::select("What project do you want to build");
        for t in ProjectType::ALL {
            select = select.item(t, t.display_name(), t.short());
        }
        select.initial_value(ProjectType::default()).interact()?
    };

    cliclack::log::success(format!("Great! Initializing a {} project", project_type))?;

    Ok(project_type)
}

fn prompt_language(yes: bool) -> Result<Language> {
    let chosen = if yes {
        Language::default()
    } else {
        let mut select = cliclack::select("Will you be using JavaScript or TypeScript?");
        for lang in Language::ALL {
            select = select.item(lang, lang.display_name(), "");
        }
        select.initial_value(Language::TypeScript).interact()?
    };

    let (language, coerced) = chosen.resolve();
    if coerced {
        cliclack::log::error("Wrong answer, using TypeScript instead...")?;
    } else {
        cliclack::log::success("Good choice! Using TypeScript!")?;
    }

    Ok(language)
}

fn prompt_packages(yes: bool) -> Result<Vec<AvailablePackage>> {
    let selectable = AvailablePackage::promptable();
    if yes || selectable.is_empty() {
        return Ok(Vec::new());
    }

    let mut multi = cliclack::multiselect("Which packages would you like to enable?");
    for pkg in &selectable {
        multi = multi.item(*pkg, pkg.name(), "");
    }

    let selected: Vec<AvailablePackage> = multi.required(false).interact()?;
    Ok(selected)
}

fn prompt_git(yes: bool) -> Result<bool> {
    let git = if yes {
        true
    } else {
        cliclack::confirm("Initialize a new git repository?")
            .initial_value(true)
            .interact()?
    };

    if git {
        cliclack::log::success("Nice one! Initializing repository!")?;
    } else {
        cliclack::log::info("Sounds good! You can come back and run git init later.")?;
    }

    Ok(git)
}

fn prompt_install(pm: PackageManager, yes: bool) -> Result<bool> {
    let install_command = pm.install_command();

    let install = if yes {
        true
    } else {
        cliclack::confirm(format!("Would you like us to run '{}'?", install_command))
            .initial_value(true)
            .interact()?
    };

    if install {
        cliclack::log::success("Alright. We'll install the dependencies for you!")?;
    } else {
        cliclack::log::info(format!(
            "No worries. You can run '{}' later to install the dependencies.",
            install_command
        ))?;
    }

    Ok(install)
}

fn select_directory<E: Environment>(env: &E, path: &str, yes: bool) -> Result<ProjectDir> {
    let dir = scaffold::resolve_project_dir(&env.current_dir(), path)?;
    cliclack::log::info(format!("Using directory: {}", dir.path.display()))?;

    // Warn if directory exists and has files
    if !dir.is_empty() {
        cliclack::log::warning(format!(
            "Directory has {} existing items",
            dir.existing_entries
        ))?;

        // Auto-confirm with --default flag
        let confirm = if yes {
            true
        } else {
            cliclack::confirm("Continue anyway?")
                .initial_value(true)
                .interact()?
        };

        if !confirm {
            anyhow::bail!(crate::error::DukeError::Cancelled);
        }
    }

    Ok(dir)
}

async fn create_project(dir: &ProjectDir) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project directory...");

    match scaffold::create_project_dir(dir).await {
        Ok(()) => {
            spinner.stop(format!("Created {}", dir.path.display()));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project directory");
            Err(e.into())
        }
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, plan: &ProjectPlan) -> Result<()> {
    let steps = config.next_steps(plan);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
