//! Child-process execution

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::commands::CommandSpec;
use crate::error::{Error, Result};

/// Runs external commands to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command, failing if it cannot start or exits non-zero
    async fn run(&self, spec: &CommandSpec) -> Result<()>;
}

/// Runs commands as real child processes sharing the parent's stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<()> {
        let program =
            which::which(&spec.program).map_err(|_| Error::command_not_found(&spec.program))?;

        debug!("Running: {}", spec);
        let status = Command::new(program)
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Error::process_spawn(spec.command_line(), e))?;

        if !status.success() {
            return Err(Error::process_failed(spec.command_line(), status.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn spec_in(dir: &TempDir, program: &str, args: &[&str]) -> CommandSpec {
        let cwd = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        CommandSpec::new(program, args.iter().copied(), cwd)
    }

    #[tokio::test]
    async fn test_missing_program() {
        let dir = TempDir::new().unwrap();
        let spec = spec_in(&dir, "vitekit-definitely-not-installed", &[]);

        let err = SystemRunner::new().run(&spec).await.unwrap_err();
        assert!(matches!(err, Error::CommandNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::ExternalProcessFailed);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_status_is_checked() {
        let dir = TempDir::new().unwrap();

        assert!(SystemRunner::new()
            .run(&spec_in(&dir, "true", &[]))
            .await
            .is_ok());

        let err = SystemRunner::new()
            .run(&spec_in(&dir, "false", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ProcessFailed { .. }));
        assert!(err.to_string().contains("`false`"));
    }
}
