//! Core types for a scaffold run

use tracing::warn;

use crate::error::{Error, Result};

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Get all supported package managers
    pub fn all() -> Vec<Self> {
        vec![Self::Npm, Self::Pnpm, Self::Yarn, Self::Bun]
    }

    /// Get the executable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Parse a known manager name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        let s_lower = s.trim().to_lowercase();
        Self::all().into_iter().find(|pm| pm.as_str() == s_lower)
    }

    /// Comma-separated list of accepted names
    pub fn valid_names() -> String {
        Self::all()
            .iter()
            .map(|pm| pm.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve a user-supplied value, falling back to npm for anything unknown
    pub fn resolve(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!(
                "Unknown package manager '{}' (expected one of: {}), falling back to npm",
                s,
                Self::valid_names()
            );
            Self::Npm
        })
    }

    /// Script runner line shown in the next-steps hint
    pub fn dev_command(&self) -> String {
        match self {
            Self::Npm => "npm run dev".to_string(),
            other => format!("{} dev", other.as_str()),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scaffold invocation, fixed for the duration of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    app_name: String,
    package_manager: PackageManager,
    install: bool,
}

impl ScaffoldRequest {
    /// Create a request, validating the app name
    pub fn new(
        app_name: impl Into<String>,
        package_manager: PackageManager,
        install: bool,
    ) -> Result<Self> {
        let app_name = app_name.into();
        validate_app_name(&app_name)?;

        Ok(Self {
            app_name,
            package_manager,
            install,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }

    /// Whether dependencies are installed after generation
    pub fn install(&self) -> bool {
        self.install
    }
}

/// The name becomes a directory under the working directory, so it must be
/// a single segment that cannot climb out of it.
fn validate_app_name(name: &str) -> Result<()> {
    if name.trim().is_empty()
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(Error::invalid_app_name(name));
    }
    Ok(())
}
