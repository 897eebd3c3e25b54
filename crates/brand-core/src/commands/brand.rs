//! `brand <subcommand>`: manage brand overrides

use crate::error::CommandError;
use crate::output;
use crate::paths::COMPONENT_EXTENSION;
use crate::product::ProductConfig;
use crate::project::Project;
use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Subcommands `brand` understands
pub const BRAND_SUBCOMMANDS: &[&str] = &["list"];

pub async fn run<C: ProductConfig>(
    project: &Project<C>,
    subcommand: &str,
) -> Result<(), CommandError> {
    let config = project.store().read_project_config().await?;

    match subcommand {
        "list" => {
            let brand_dir = project.resolve(&config.brand_dir);
            let overrides = list_overrides(&brand_dir)?;
            print_overrides(project, &overrides);
            Ok(())
        }
        other => Err(CommandError::UnknownSubcommand {
            name: other.to_string(),
            available: BRAND_SUBCOMMANDS,
        }),
    }
}

/// Component names with a brand override in `brand_dir`, sorted by name
pub fn list_overrides(brand_dir: &Path) -> Result<Vec<String>> {
    let suffix = format!(".{}", COMPONENT_EXTENSION);
    let mut names = Vec::new();

    for entry in WalkDir::new(brand_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| {
            format!("Failed to list brand overrides in {}", brand_dir.display())
        })?;
        let file_name = entry.file_name().to_string_lossy();
        if let Some(name) = file_name.strip_suffix(suffix.as_str()) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

fn print_overrides<C: ProductConfig>(project: &Project<C>, overrides: &[String]) {
    if overrides.is_empty() {
        output::info("No brand overrides found.");
        output::hint(format!(
            "Try adding a component first with: {} add button",
            project.product().name()
        ));
        return;
    }

    output::step("Brand overrides:");
    for name in overrides {
        output::success(name);
    }
}
