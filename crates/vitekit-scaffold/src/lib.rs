//! # vitekit-scaffold
//!
//! Scaffolding library behind the `vitekit` CLI:
//! - Target directory validation
//! - `create-vite` invocation for npm, pnpm, yarn or bun
//! - Dependency installation (sass, Redux Toolkit, react-redux, axios, react-toastify)
//! - A fixed folder tree and set of template files
//!
//! # Example
//!
//! ```no_run
//! use vitekit_scaffold::{PackageManager, ScaffoldRequest, Scaffolder, SystemRunner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ScaffoldRequest::new("demo", PackageManager::Pnpm, true)?;
//! let runner = SystemRunner::new();
//! let scaffolder = Scaffolder::new("/tmp", &runner);
//!
//! for stage in scaffolder.plan(&request) {
//!     println!("{}", stage);
//! }
//!
//! let report = scaffolder.scaffold(&request).await?;
//! println!("Created {}", report.project_dir);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod runner;
pub mod scaffold;
pub mod templates;
pub mod types;

pub use commands::CommandSpec;
pub use error::{Error, ErrorKind, Result};
pub use runner::{CommandRunner, SystemRunner};
pub use scaffold::{ScaffoldReport, Scaffolder, Stage};
pub use templates::TemplateFile;
pub use types::{PackageManager, ScaffoldRequest};
