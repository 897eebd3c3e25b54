//! brand-ui CLI - base/brand layering for shadcn components

use brand_core::runtime::install_interrupt_handler;
use brand_core::ProductConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// brand-ui product configuration
#[derive(Clone)]
pub struct BrandUiConfig;

impl ProductConfig for BrandUiConfig {
    fn name(&self) -> &'static str {
        "brand-ui"
    }

    fn project_config_file(&self) -> &'static str {
        ".brand-uirc.json"
    }

    fn scaffold_command_env(&self) -> &'static str {
        "BRAND_UI_SCAFFOLD_CMD"
    }
}

#[derive(Parser, Debug)]
#[command(name = "brand-ui")]
#[command(about = "CLI to manage shadcn components with base/brand layering")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the base and brand component structure
    Init,
    /// Add a shadcn component to the base folder
    Add {
        /// Name of the shadcn component to add
        component_name: String,
    },
    /// Update a previously added shadcn component
    Update {
        /// Name of the component to update
        component_name: String,
    },
    /// Manage brand overrides or tokens
    Brand {
        /// Brand subcommand to run
        subcommand: String,
    },
}

impl From<Command> for brand_core::Command {
    fn from(command: Command) -> Self {
        match command {
            Command::Init => brand_core::Command::Init,
            Command::Add { component_name } => brand_core::Command::Add {
                component: component_name,
            },
            Command::Update { component_name } => brand_core::Command::Update {
                component: component_name,
            },
            Command::Brand { subcommand } => brand_core::Command::Brand { subcommand },
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = brand_core::output::show_cursor();
        default_panic(info);
    }));

    install_interrupt_handler();

    // Usage errors exit 1 like every other failure; --help and --version exit 0
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let code = brand_core::run(BrandUiConfig, root, args.command.into()).await;
    std::process::exit(code);
}
