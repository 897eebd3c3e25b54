//! Command-level errors and how they are reported

use crate::commands::Command;
use crate::config::ConfigError;
use crate::output;
use crate::runtime::ToolError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a command failed
#[derive(Debug, Error)]
pub enum CommandError {
    /// A required config file is missing
    #[error("Project not initialized ({} not found)", .file.display())]
    NotInitialized { file: PathBuf },

    /// The scaffolder failed or could not be started
    #[error(transparent)]
    ToolFailed(#[from] ToolError),

    /// `update` was asked about a component that was never added
    #[error("Component {name} not found in base directory.")]
    ComponentNotFound { name: String },

    /// `brand` was given a subcommand it does not know
    #[error("Unknown subcommand: {name}")]
    UnknownSubcommand {
        name: String,
        available: &'static [&'static str],
    },

    /// Any other I/O or parse failure
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotInitialized { file } => CommandError::NotInitialized { file },
            other => CommandError::Other(other.into()),
        }
    }
}

impl CommandError {
    /// Print the error for `command` the way users see it
    pub fn report(&self, command: &Command, program: &str) {
        match self {
            CommandError::NotInitialized { .. } => {
                output::error(format!(
                    "Error: Project not initialized. Run \"{} init\" first.",
                    program
                ));
            }
            CommandError::ToolFailed(err) => {
                let mut headline = format!("Error running {} {}", err.tool(), err.subcommand());
                if matches!(command, Command::Init) {
                    headline.push_str(". Please ensure you have a Next.js project set up.");
                }
                output::error(headline);
                output::error_detail(err);
            }
            CommandError::ComponentNotFound { name } => {
                output::error(format!("Error: {}", self));
                output::hint(format!("Try adding it first with: {} add {}", program, name));
            }
            CommandError::UnknownSubcommand { available, .. } => {
                output::error(self);
                output::hint(format!("Available subcommands: {}", available.join(", ")));
            }
            CommandError::Other(err) => {
                output::error(format!("{} {:#}", command.error_prefix(), err));
            }
        }
    }
}
