//! External command lines for the generator and each package manager

use camino::{Utf8Path, Utf8PathBuf};

use crate::types::PackageManager;

/// Vite template passed to the generator
pub const VITE_TEMPLATE: &str = "react";

/// Dev dependencies added after the initial install
pub const DEV_DEPENDENCIES: &[&str] = &["sass"];

/// Runtime dependencies added after the initial install
pub const DEPENDENCIES: &[&str] = &["@reduxjs/toolkit", "react-redux", "axios", "react-toastify"];

/// A single external command: program, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Utf8PathBuf,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: impl Into<Utf8PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// Shell-like rendering without the working directory
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (in {})", self.command_line(), self.cwd)
    }
}

impl PackageManager {
    /// Generator incantation, run from the parent of the new project
    pub fn create_command(&self, app_name: &str, base_dir: &Utf8Path) -> CommandSpec {
        let args: Vec<&str> = match self {
            Self::Npm => vec!["create", "vite@latest", app_name, "--", "--template", VITE_TEMPLATE],
            Self::Pnpm | Self::Yarn | Self::Bun => {
                vec!["create", "vite", app_name, "--template", VITE_TEMPLATE]
            }
        };
        CommandSpec::new(self.as_str(), args, base_dir)
    }

    /// Install everything declared in package.json
    pub fn install_command(&self, project_dir: &Utf8Path) -> CommandSpec {
        CommandSpec::new(self.as_str(), ["install"], project_dir)
    }

    /// Add packages as dev dependencies
    pub fn add_dev_command(&self, packages: &[&str], project_dir: &Utf8Path) -> CommandSpec {
        let prefix: &[&str] = match self {
            Self::Npm => &["install", "-D"],
            Self::Pnpm | Self::Yarn => &["add", "-D"],
            Self::Bun => &["add", "-d"],
        };
        CommandSpec::new(
            self.as_str(),
            prefix.iter().chain(packages.iter()).copied(),
            project_dir,
        )
    }

    /// Add packages as regular dependencies
    pub fn add_command(&self, packages: &[&str], project_dir: &Utf8Path) -> CommandSpec {
        let verb = match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        };
        CommandSpec::new(
            self.as_str(),
            std::iter::once(verb).chain(packages.iter().copied()),
            project_dir,
        )
    }

    /// The three install steps, in the order they must run
    pub fn install_commands(&self, project_dir: &Utf8Path) -> Vec<CommandSpec> {
        vec![
            self.install_command(project_dir),
            self.add_dev_command(DEV_DEPENDENCIES, project_dir),
            self.add_command(DEPENDENCIES, project_dir),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Utf8PathBuf {
        Utf8PathBuf::from("/work")
    }

    #[test]
    fn test_create_command_per_manager() {
        let cases = [
            (PackageManager::Npm, "npm create vite@latest demo -- --template react"),
            (PackageManager::Pnpm, "pnpm create vite demo --template react"),
            (PackageManager::Yarn, "yarn create vite demo --template react"),
            (PackageManager::Bun, "bun create vite demo --template react"),
        ];

        for (pm, expected) in cases {
            let cmd = pm.create_command("demo", &base());
            assert_eq!(cmd.command_line(), expected);
            assert_eq!(cmd.cwd, base());
        }
    }

    #[test]
    fn test_unknown_manager_uses_npm_incantation() {
        let cmd = PackageManager::resolve("deno").create_command("demo", &base());
        assert_eq!(
            cmd.command_line(),
            "npm create vite@latest demo -- --template react"
        );
    }

    #[test]
    fn test_install_commands_order() {
        let dir = base().join("demo");
        let lines: Vec<String> = PackageManager::Pnpm
            .install_commands(&dir)
            .iter()
            .map(CommandSpec::command_line)
            .collect();

        assert_eq!(
            lines,
            vec![
                "pnpm install",
                "pnpm add -D sass",
                "pnpm add @reduxjs/toolkit react-redux axios react-toastify",
            ]
        );
    }

    #[test]
    fn test_npm_and_bun_add_flags() {
        let dir = base().join("demo");
        assert_eq!(
            PackageManager::Npm.add_dev_command(&["sass"], &dir).command_line(),
            "npm install -D sass"
        );
        assert_eq!(
            PackageManager::Npm.add_command(&["axios"], &dir).command_line(),
            "npm install axios"
        );
        assert_eq!(
            PackageManager::Bun.add_dev_command(&["sass"], &dir).command_line(),
            "bun add -d sass"
        );
    }

    #[test]
    fn test_display_includes_cwd() {
        let cmd = PackageManager::Yarn.install_command(Utf8Path::new("/work/demo"));
        assert_eq!(cmd.to_string(), "yarn install (in /work/demo)");
    }
}
