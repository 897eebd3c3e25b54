//! Brand Core - Shared library for the base/brand component layering CLIs
//!
//! This library wraps the `shadcn` component scaffolder so that every generated
//! component lives twice in a project:
//!
//! - a **base** copy, kept exactly as the scaffolder produced it
//! - a **brand** wrapper that re-exports the base component and is the place
//!   for project-specific styling and behavior
//!
//! It is used by multiple CLI binaries (`brand-ui`, `shadowfax`) that share the
//! same commands but differ in product identity and project config file name.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - alias path resolution, JSON config store,
//!   scaffolder subprocess runner, brand wrapper templating
//! - **Layer 2: Commands** - `init`, `add`, `update`, `brand list`, each driven by
//!   a [`Project`] bound to a [`ProductConfig`]
//! - **Layer 3: Entry point** - [`run`] executes a [`Command`] and reports errors
//!
//! # Example Usage
//!
//! ```ignore
//! use brand_core::{run, Command, ProductConfig};
//!
//! let code = run(MyProduct, std::env::current_dir()?, Command::Add {
//!     component: "button".to_string(),
//! })
//! .await;
//! std::process::exit(code);
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod product;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types for convenience
pub use commands::{run, Command};
pub use config::{ConfigError, ConfigStore, ProjectConfig, ScaffoldConfig};
pub use error::CommandError;
pub use paths::resolve_alias;
pub use product::ProductConfig;
pub use project::Project;
pub use runtime::{ScaffoldTool, ToolConfig, ToolError};
