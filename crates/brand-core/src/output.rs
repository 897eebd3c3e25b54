//! Terminal status lines
//!
//! Progress and results go to stdout, errors and warnings to stderr. Colors are
//! dropped automatically when `NO_COLOR` is set.

use colored::Colorize;
use std::fmt::Display;

/// A new phase of work, preceded by a blank line
pub fn step(message: impl Display) {
    println!();
    println!("{}", message.to_string().blue());
}

/// A completed action
pub fn success(message: impl Display) {
    println!("{}", format!("✓ {}", message).green());
}

/// Plain information
pub fn info(message: impl Display) {
    println!("{}", message.to_string().yellow());
}

/// A follow-up suggestion
pub fn hint(message: impl Display) {
    println!("{}", message.to_string().dimmed());
}

/// Something unexpected that does not stop the command
pub fn warning(message: impl Display) {
    eprintln!("{} {}", "Warning:".yellow(), message);
}

/// An error headline
pub fn error(message: impl Display) {
    eprintln!("{}", message.to_string().red());
}

/// Additional detail under an error headline
pub fn error_detail(message: impl Display) {
    eprintln!("  {}", message.to_string().dimmed());
}

/// Make the cursor visible again, e.g. after a child's prompt was interrupted
pub fn show_cursor() -> std::io::Result<()> {
    console::Term::stderr().show_cursor()
}
