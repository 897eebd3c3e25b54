//! Scaffolder invocation and process-level signal handling
//!
//! This module provides:
//! - The shadcn subprocess runner
//! - Ctrl+C handling that lets a running scaffolder finish its own cleanup

pub mod signal;
pub mod tool;

pub use signal::{install_interrupt_handler, interrupted, INTERRUPT_EXIT_CODE};
pub use tool::{ScaffoldTool, ToolConfig, ToolError};
