//! Error types for vitekit-scaffold

use thiserror::Error;

/// Result type alias using vitekit-scaffold's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Broad failure classes a scaffold run can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Checked before any mutation (bad name, populated target)
    PreconditionFailed,
    /// The generator or a package-manager subcommand failed
    ExternalProcessFailed,
    /// A directory or file could not be created or written
    FileSystemFailed,
}

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid application name
    #[error("Invalid app name '{name}': must be a single non-empty path segment")]
    InvalidAppName { name: String },

    /// Target directory already has content
    #[error("Directory '{name}' is not empty ({path})")]
    DirectoryNotEmpty { name: String, path: String },

    /// Executable not found in PATH
    #[error("Required command not found: {program}. Is it installed and in PATH?")]
    CommandNotFound { program: String },

    /// Child process could not be started
    #[error("Failed to run `{command}`")]
    ProcessSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Child process exited unsuccessfully
    #[error("`{command}` failed with {status}")]
    ProcessFailed { command: String, status: String },

    /// File-system operation failed
    #[error("File system error at {path}")]
    FileSystem {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an invalid app name error
    pub fn invalid_app_name(name: impl Into<String>) -> Self {
        Self::InvalidAppName { name: name.into() }
    }

    /// Create a directory not empty error
    pub fn directory_not_empty(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::DirectoryNotEmpty {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(program: impl Into<String>) -> Self {
        Self::CommandNotFound {
            program: program.into(),
        }
    }

    /// Create a process spawn error
    pub fn process_spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::ProcessSpawn {
            command: command.into(),
            source,
        }
    }

    /// Create a process failed error
    pub fn process_failed(command: impl Into<String>, status: impl Into<String>) -> Self {
        Self::ProcessFailed {
            command: command.into(),
            status: status.into(),
        }
    }

    /// Create a file-system error
    pub fn file_system(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAppName { .. } | Self::DirectoryNotEmpty { .. } => {
                ErrorKind::PreconditionFailed
            }
            Self::CommandNotFound { .. }
            | Self::ProcessSpawn { .. }
            | Self::ProcessFailed { .. } => ErrorKind::ExternalProcessFailed,
            Self::FileSystem { .. } => ErrorKind::FileSystemFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_empty_names_the_directory() {
        let err = Error::directory_not_empty("demo", "/tmp/demo");
        assert!(err.to_string().contains("demo"));
        assert_eq!(err.kind(), ErrorKind::PreconditionFailed);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            Error::process_failed("npm install", "exit status: 1").kind(),
            ErrorKind::ExternalProcessFailed
        );
        assert_eq!(
            Error::command_not_found("pnpm").kind(),
            ErrorKind::ExternalProcessFailed
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            Error::file_system("/readonly", io).kind(),
            ErrorKind::FileSystemFailed
        );
    }
}
