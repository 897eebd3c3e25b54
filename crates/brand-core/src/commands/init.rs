//! `init`: set up shadcn and the base/brand directories

use crate::config::ProjectConfig;
use crate::error::CommandError;
use crate::output;
use crate::product::ProductConfig;
use crate::project::Project;
use anyhow::Context;
use tokio::fs;

/// Run shadcn's own init, then point it at the base directory.
///
/// Safe to repeat: existing base and brand components are left in place.
pub async fn run<C: ProductConfig>(project: &Project<C>) -> Result<(), CommandError> {
    let tool_name = project.tool().config().display_name.clone();
    output::step(format!("Initializing {}...", tool_name));
    project.tool().init().await?;

    let store = project.store();
    let mut scaffold = store
        .read_scaffold_config()
        .await
        .with_context(|| format!("{} init did not leave a readable components.json", tool_name))?;

    let config = ProjectConfig::default();

    scaffold.set_components_alias(&config.base_dir);
    store
        .write_scaffold_config(&scaffold)
        .await
        .context("Failed to update components.json")?;
    output::success("Updated components.json with base directory");

    store
        .write_project_config(&config)
        .await
        .context("Failed to write project configuration")?;
    output::success(format!(
        "Created configuration file: {}",
        project.product().project_config_file()
    ));

    let (base_dir, brand_dir) = project.layout(&config);

    fs::create_dir_all(&base_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", base_dir.display()))?;
    output::success(format!("Created base components directory: {}", config.base_dir));

    fs::create_dir_all(&brand_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", brand_dir.display()))?;
    output::success(format!("Created brand components directory: {}", config.brand_dir));

    output::step("Initialization complete! You can now start adding components.");
    output::hint(format!("Try running: {} add button", project.product().name()));

    Ok(())
}
