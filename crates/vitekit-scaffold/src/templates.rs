//! Fixed project tree written over the generator's output.
//!
//! Contents are compiled into the binary from `templates/react/`. Nothing is
//! substituted: every project gets byte-identical files.

use camino::{Utf8Path, Utf8PathBuf};
use futures::future::try_join_all;
use tracing::debug;

use crate::error::{Error, Result};

/// A file emitted into every new project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the project root
    pub path: &'static str,
    pub contents: &'static str,
}

macro_rules! template {
    ($path:literal) => {
        TemplateFile {
            path: $path,
            contents: include_str!(concat!("../templates/react/", $path)),
        }
    };
}

/// Directories created under the project root
pub const DIRECTORIES: &[&str] = &[
    "src/__tests__",
    "src/assets",
    "src/components/ui",
    "src/api",
    "src/utils",
    "src/hooks",
    "src/redux",
    "src/styles/abstracts",
    "src/styles/pages",
    "public",
];

/// Files written into the project, relative to its root
pub const FILES: &[TemplateFile] = &[
    template!("src/components/Layout.jsx"),
    template!("src/utils/deepClone.js"),
    template!("src/utils/routes.js"),
    template!("src/hooks/useAppState.js"),
    template!("src/redux/initialState.js"),
    template!("src/redux/appSlice.js"),
    template!("src/redux/store.js"),
    template!("src/api/client.js"),
    template!("src/redux/actions.js"),
    template!("src/__tests__/setupTests.js"),
    template!("public/config.json"),
    template!("src/styles/abstracts/_colors.scss"),
    template!("src/styles/abstracts/_variables.scss"),
    template!("src/styles/abstracts/_mixins.scss"),
    template!("src/styles/_main.scss"),
    template!("src/App.jsx"),
    template!("src/main.jsx"),
];

/// Key in `public/config.json` holding the API base address
pub const API_BASE_URL_KEY: &str = "API_BASE_URL";

/// Value shipped for [`API_BASE_URL_KEY`]
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Look up a template by its relative path
pub fn find(path: &str) -> Option<&'static TemplateFile> {
    FILES.iter().find(|file| file.path == path)
}

/// Create all directories concurrently
pub async fn create_directories(root: &Utf8Path, dirs: &[&str]) -> Result<Vec<Utf8PathBuf>> {
    let futures = dirs.iter().map(|dir| {
        let path = root.join(dir);
        async move {
            tokio::fs::create_dir_all(&path)
                .await
                .map_err(|e| Error::file_system(path.as_str(), e))?;
            Ok::<_, Error>(path)
        }
    });

    try_join_all(futures).await
}

/// Write all files concurrently, creating parent directories as needed
pub async fn write_files(root: &Utf8Path, files: &[TemplateFile]) -> Result<Vec<Utf8PathBuf>> {
    let futures = files.iter().map(|file| write_file(root, file));
    try_join_all(futures).await
}

async fn write_file(root: &Utf8Path, file: &TemplateFile) -> Result<Utf8PathBuf> {
    let path = root.join(file.path);

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::file_system(parent.as_str(), e))?;
    }

    tokio::fs::write(&path, file.contents)
        .await
        .map_err(|e| Error::file_system(path.as_str(), e))?;

    debug!("Wrote {}", path);
    Ok(path)
}
