//! Ordered scaffolding pipeline.
//!
//! A run is planned up front as a list of [`Stage`]s and executed strictly in
//! order. Command stages are awaited one at a time; the directory and file
//! stages fan out internally and finish when every operation has completed
//! or the first one fails. No stage is retried and nothing is cleaned up
//! after a failure.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::commands::CommandSpec;
use crate::error::{Error, Result};
use crate::runner::CommandRunner;
use crate::templates::{self, TemplateFile};
use crate::types::ScaffoldRequest;

/// One step of a scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Create the target directory, or confirm it is empty
    EnsureTarget(Utf8PathBuf),
    /// Run the project generator
    Generate(CommandSpec),
    /// Run a package-manager install or add command
    Install(CommandSpec),
    /// Create the folder tree
    CreateDirectories(&'static [&'static str]),
    /// Write the template files
    WriteFiles(&'static [TemplateFile]),
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnsureTarget(path) => write!(f, "Prepare empty directory {}", path),
            Self::Generate(cmd) => write!(f, "Generate project: {}", cmd),
            Self::Install(cmd) => write!(f, "Install dependencies: {}", cmd),
            Self::CreateDirectories(dirs) => write!(f, "Create {} directories", dirs.len()),
            Self::WriteFiles(files) => write!(f, "Write {} template files", files.len()),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub project_dir: Utf8PathBuf,
    pub commands_run: Vec<String>,
    pub directories: Vec<Utf8PathBuf>,
    pub files: Vec<Utf8PathBuf>,
}

/// Executes scaffold plans relative to a base directory
pub struct Scaffolder<'a> {
    base_dir: Utf8PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> Scaffolder<'a> {
    /// Create a scaffolder rooted at `base_dir` (normally the working directory)
    pub fn new(base_dir: impl Into<Utf8PathBuf>, runner: &'a dyn CommandRunner) -> Self {
        Self {
            base_dir: base_dir.into(),
            runner,
        }
    }

    /// Directory the generator runs in
    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    /// Absolute path of the project a request would create
    pub fn project_dir(&self, request: &ScaffoldRequest) -> Utf8PathBuf {
        self.base_dir.join(request.app_name())
    }

    /// Build the ordered stage list for a request without running anything
    pub fn plan(&self, request: &ScaffoldRequest) -> Vec<Stage> {
        let project_dir = self.project_dir(request);
        let pm = request.package_manager();

        let mut stages = vec![
            Stage::EnsureTarget(project_dir.clone()),
            Stage::Generate(pm.create_command(request.app_name(), &self.base_dir)),
        ];

        if request.install() {
            stages.extend(pm.install_commands(&project_dir).into_iter().map(Stage::Install));
        }

        stages.push(Stage::CreateDirectories(templates::DIRECTORIES));
        stages.push(Stage::WriteFiles(templates::FILES));
        stages
    }

    /// Run every stage in order, stopping at the first failure
    pub async fn scaffold(&self, request: &ScaffoldRequest) -> Result<ScaffoldReport> {
        let project_dir = self.project_dir(request);
        info!(
            "Scaffolding '{}' with {} in {}",
            request.app_name(),
            request.package_manager(),
            project_dir
        );

        let mut report = ScaffoldReport {
            project_dir: project_dir.clone(),
            ..Default::default()
        };

        for stage in self.plan(request) {
            debug!("Stage: {}", stage);
            match stage {
                Stage::EnsureTarget(path) => ensure_target_dir(request.app_name(), &path).await?,
                Stage::Generate(cmd) => {
                    info!("Generating project with {}", cmd.program);
                    self.runner.run(&cmd).await?;
                    report.commands_run.push(cmd.command_line());
                }
                Stage::Install(cmd) => {
                    info!("Running {}", cmd.command_line());
                    self.runner.run(&cmd).await?;
                    report.commands_run.push(cmd.command_line());
                }
                Stage::CreateDirectories(dirs) => {
                    info!("Creating folder structure");
                    report.directories = templates::create_directories(&project_dir, dirs).await?;
                }
                Stage::WriteFiles(files) => {
                    info!("Writing template files");
                    report.files = templates::write_files(&project_dir, files).await?;
                }
            }
        }

        info!("Project '{}' scaffolded at {}", request.app_name(), project_dir);
        Ok(report)
    }
}

/// Create `path` if it is missing; fail if it already has entries
pub async fn ensure_target_dir(name: &str, path: &Utf8Path) -> Result<()> {
    let exists = tokio::fs::try_exists(path)
        .await
        .map_err(|e| Error::file_system(path.as_str(), e))?;

    if exists {
        let mut entries = tokio::fs::read_dir(path)
            .await
            .map_err(|e| Error::file_system(path.as_str(), e))?;

        let first = entries
            .next_entry()
            .await
            .map_err(|e| Error::file_system(path.as_str(), e))?;

        if first.is_some() {
            return Err(Error::directory_not_empty(name, path.as_str()));
        }

        debug!("Reusing empty directory {}", path);
        return Ok(());
    }

    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| Error::file_system(path.as_str(), e))?;
    debug!("Created {}", path);
    Ok(())
}
