//! `update`: placeholder that only checks the base component exists

use crate::error::CommandError;
use crate::output;
use crate::product::ProductConfig;
use crate::project::Project;
use anyhow::Context;
use tokio::fs;

pub async fn run<C: ProductConfig>(
    project: &Project<C>,
    component: &str,
) -> Result<(), CommandError> {
    let config = project.store().read_project_config().await?;
    let base_path = project.component_path(&config.base_dir, component);

    let exists = fs::try_exists(&base_path)
        .await
        .with_context(|| format!("Failed to check {}", base_path.display()))?;
    if !exists {
        return Err(CommandError::ComponentNotFound {
            name: component.to_string(),
        });
    }

    // Nothing is fetched or merged yet; the base and brand files are left as is.
    output::info("Note: Update functionality is a placeholder in this MVP.");
    output::step("In a full implementation, this would:");
    output::hint("- Fetch latest component version");
    output::hint("- Merge changes while preserving customizations");
    output::hint("- Update dependencies if needed");

    Ok(())
}
