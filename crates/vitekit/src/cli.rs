//! CLI argument parsing with clap

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser};

/// vitekit - Scaffold a Vite + React + Redux Toolkit project
#[derive(Parser, Debug)]
#[command(name = "vitekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Name of the directory to create the project in
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub app_name: String,

    /// Package manager used to generate and install (npm, pnpm, yarn, bun)
    #[arg(
        short,
        long,
        default_value = "npm",
        env = "VITEKIT_PACKAGE_MANAGER"
    )]
    pub package_manager: String,

    /// Skip installing dependencies
    #[arg(long, env = "VITEKIT_NO_INSTALL")]
    pub no_install: bool,

    /// Show the steps that would run without running them
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vitekit", "demo"]).unwrap();
        assert_eq!(cli.scaffold.app_name, "demo");
        assert_eq!(cli.scaffold.package_manager, "npm");
        assert!(!cli.scaffold.no_install);
        assert!(!cli.scaffold.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_short_package_manager_and_no_install() {
        let cli = Cli::try_parse_from(["vitekit", "demo", "-p", "bun", "--no-install"]).unwrap();
        assert_eq!(cli.scaffold.package_manager, "bun");
        assert!(cli.scaffold.no_install);
    }

    #[test]
    fn test_unknown_package_manager_is_accepted() {
        let cli = Cli::try_parse_from(["vitekit", "demo", "--package-manager", "deno"]).unwrap();
        assert_eq!(cli.scaffold.package_manager, "deno");
    }

    #[test]
    fn test_app_name_required_and_non_empty() {
        assert!(Cli::try_parse_from(["vitekit"]).is_err());
        assert!(Cli::try_parse_from(["vitekit", ""]).is_err());
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["vitekit", "-vv", "demo"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["vitekit", "demo", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }
}
