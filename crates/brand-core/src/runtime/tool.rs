//! Running the shadcn scaffolder
//!
//! The scaffolder is an opaque subprocess. Its standard streams are attached to
//! our terminal so its own prompts and output stay visible, and only its exit
//! status is inspected.

use super::signal::DeferInterrupt;
use crate::product::ProductConfig;
use colored::Colorize;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Configuration for the scaffolder command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Name for user-facing messages (e.g., "shadcn")
    pub display_name: String,
    /// Program followed by its leading arguments (e.g., `pnpm dlx shadcn@latest`)
    pub command: Vec<String>,
}

impl ToolConfig {
    /// Parse a whitespace-separated command line. Returns `None` if it is blank.
    pub fn parse(display_name: &str, command_line: &str) -> Option<Self> {
        let command: Vec<String> = command_line.split_whitespace().map(String::from).collect();
        if command.is_empty() {
            return None;
        }
        Some(Self {
            display_name: display_name.to_string(),
            command,
        })
    }

    /// Build from a product, honoring its environment variable override
    pub fn from_product<C: ProductConfig>(config: &C) -> Self {
        let name = config.scaffold_tool_name();
        std::env::var(config.scaffold_command_env())
            .ok()
            .and_then(|line| Self::parse(name, &line))
            .or_else(|| Self::parse(name, config.default_scaffold_command()))
            .unwrap_or_else(|| Self {
                display_name: name.to_string(),
                command: vec![name.to_string()],
            })
    }
}

/// Failure to run a scaffolder subcommand
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{tool} {subcommand} could not be started ({program})")]
    Spawn {
        tool: String,
        subcommand: String,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} {subcommand} exited with {status}")]
    Failed {
        tool: String,
        subcommand: String,
        status: ExitStatus,
    },
}

impl ToolError {
    /// Name of the scaffolder
    pub fn tool(&self) -> &str {
        match self {
            ToolError::Spawn { tool, .. } | ToolError::Failed { tool, .. } => tool,
        }
    }

    /// The scaffolder subcommand that failed (`init`, `add`)
    pub fn subcommand(&self) -> &str {
        match self {
            ToolError::Spawn { subcommand, .. } | ToolError::Failed { subcommand, .. } => {
                subcommand
            }
        }
    }
}

/// Runs scaffolder subcommands inside a project directory
#[derive(Debug, Clone)]
pub struct ScaffoldTool {
    config: ToolConfig,
    working_dir: PathBuf,
}

impl ScaffoldTool {
    /// Create a runner that executes in `working_dir`
    pub fn new(config: ToolConfig, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            working_dir: working_dir.into(),
        }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Full command line for a set of arguments, for display
    pub fn command_line(&self, args: &[&str]) -> String {
        self.config
            .command
            .iter()
            .map(String::as_str)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run `<tool> init`
    pub async fn init(&self) -> Result<(), ToolError> {
        self.run(&["init"]).await
    }

    /// Run `<tool> add <component>`
    pub async fn add(&self, component: &str) -> Result<(), ToolError> {
        self.run(&["add", component]).await
    }

    async fn run(&self, args: &[&str]) -> Result<(), ToolError> {
        let subcommand = args.first().copied().unwrap_or_default().to_string();
        let (program, leading) = match self.config.command.split_first() {
            Some((program, leading)) => (program.as_str(), leading),
            None => (self.config.display_name.as_str(), &[][..]),
        };

        println!("{} {}", "Running:".dimmed(), self.command_line(args).yellow());

        let _child = DeferInterrupt::enter();
        let status = TokioCommand::new(program)
            .args(leading)
            .args(args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ToolError::Spawn {
                tool: self.config.display_name.clone(),
                subcommand: subcommand.clone(),
                program: program.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolError::Failed {
                tool: self.config.display_name.clone(),
                subcommand,
                status,
            })
        }
    }
}
