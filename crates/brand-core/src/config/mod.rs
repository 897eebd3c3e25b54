//! Project and scaffolder configuration files
//!
//! Two flat JSON files live in the project root:
//! - the project config (`.brand-uirc.json` or similar, named by the product)
//!   holding the base and brand directories
//! - shadcn's `components.json`, of which only `aliases.components` is touched

pub mod alias;
pub mod project;
pub mod scaffold;
pub mod store;

use std::path::PathBuf;
use thiserror::Error;

pub use alias::AliasOverride;
pub use project::ProjectConfig;
pub use scaffold::{ScaffoldConfig, SCAFFOLD_CONFIG_FILE};
pub use store::ConfigStore;

/// Errors produced while reading or writing config files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist yet; the project needs `init`
    #[error("{} not found", .file.display())]
    NotInitialized { file: PathBuf },

    #[error("Failed to read {}", .file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", .file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}", .file.display())]
    Write {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
