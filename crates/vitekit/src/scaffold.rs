//! Scaffold command handler

use anyhow::Result;
use camino::Utf8Path;
use tracing::debug;
use vitekit_scaffold::{CommandRunner, PackageManager, ScaffoldRequest, Scaffolder};

use crate::cli::ScaffoldArgs;
use crate::output;

/// Scaffold a new project under `base_dir`
pub async fn run(
    args: ScaffoldArgs,
    base_dir: &Utf8Path,
    runner: &dyn CommandRunner,
) -> Result<()> {
    let package_manager = PackageManager::resolve(&args.package_manager);
    let request = ScaffoldRequest::new(args.app_name, package_manager, !args.no_install)?;
    let scaffolder = Scaffolder::new(base_dir, runner);
    debug!(
        "Resolved package manager '{}' to {}, base directory {}",
        args.package_manager,
        package_manager,
        scaffolder.base_dir()
    );

    if args.dry_run {
        debug!("Dry run: printing plan only");
        output::header("Scaffold plan");
        output::kv("Base directory", scaffolder.base_dir().as_str());
        output::kv("Project", scaffolder.project_dir(&request).as_str());
        output::kv("Package manager", package_manager.as_str());
        println!();
        let stages: Vec<String> = scaffolder
            .plan(&request)
            .iter()
            .map(ToString::to_string)
            .collect();
        output::steps("Stages:", &stages);
        return Ok(());
    }

    let report = scaffolder.scaffold(&request).await?;

    println!();
    output::success(&format!(
        "Project '{}' created successfully",
        request.app_name()
    ));
    output::kv("Location", report.project_dir.as_str());
    output::kv("Files written", &report.files.len().to_string());

    println!();
    output::steps("Next steps:", &next_steps(&request));

    Ok(())
}

/// Manual follow-up commands after a successful scaffold
fn next_steps(request: &ScaffoldRequest) -> Vec<String> {
    let pm = request.package_manager();
    let mut steps = vec![format!("cd {}", request.app_name())];
    if !request.install() {
        steps.push(format!("{} install", pm));
    }
    steps.push(pm.dev_command());
    steps
}
