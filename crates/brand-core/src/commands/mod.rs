//! The CLI commands and their shared entry point

pub mod add;
pub mod brand;
pub mod init;
pub mod update;

use crate::error::CommandError;
use crate::product::ProductConfig;
use crate::project::Project;
use crate::runtime::{self, INTERRUPT_EXIT_CODE};
use std::path::PathBuf;

/// A parsed command, independent of the binary's argument parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize shadcn and the base/brand structure
    Init,
    /// Add a component to base and generate its brand wrapper
    Add { component: String },
    /// Placeholder: check that a component exists
    Update { component: String },
    /// Manage brand overrides (`list`)
    Brand { subcommand: String },
}

impl Command {
    /// Prefix for generic errors raised by this command
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Command::Init => "Error during initialization:",
            Command::Add { .. } => "Error adding component:",
            Command::Update { .. } => "Error updating component:",
            Command::Brand { .. } => "Error in brand command:",
        }
    }
}

/// Run `command` against the project at `root` and return the exit code
pub async fn run<C: ProductConfig>(product: C, root: PathBuf, command: Command) -> i32 {
    let project = Project::new(product, root);
    let result = execute(&project, &command).await;
    exit_code(&project, &command, result)
}

/// Dispatch a command to its implementation
pub async fn execute<C: ProductConfig>(
    project: &Project<C>,
    command: &Command,
) -> Result<(), CommandError> {
    match command {
        Command::Init => init::run(project).await,
        Command::Add { component } => add::run(project, component).await.map(|_| ()),
        Command::Update { component } => update::run(project, component).await,
        Command::Brand { subcommand } => brand::run(project, subcommand).await,
    }
}

fn exit_code<C: ProductConfig>(
    project: &Project<C>,
    command: &Command,
    result: Result<(), CommandError>,
) -> i32 {
    match result {
        // Interrupted after the scaffolder exited; the command was let finish
        Ok(()) if runtime::interrupted() => INTERRUPT_EXIT_CODE,
        Ok(()) => 0,
        Err(err) => {
            err.report(command, project.product().name());
            if runtime::interrupted() {
                INTERRUPT_EXIT_CODE
            } else {
                1
            }
        }
    }
}
