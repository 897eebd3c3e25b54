//! `add`: generate a component with shadcn and layer it into base and brand

use crate::config::{AliasOverride, ProjectConfig};
use crate::error::CommandError;
use crate::output;
use crate::paths::{component_file_name, relative_import, resolve_alias, TEMP_SCAFFOLD_DIR};
use crate::product::ProductConfig;
use crate::project::Project;
use crate::templates::{render_brand_component, rewrite_utils_import};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Files written by a successful `add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedComponent {
    pub base_path: PathBuf,
    pub brand_path: PathBuf,
}

/// Add `component` via shadcn, move it into the base directory and create its
/// brand wrapper. An existing brand wrapper of the same name is overwritten.
pub async fn run<C: ProductConfig>(
    project: &Project<C>,
    component: &str,
) -> Result<AddedComponent, CommandError> {
    let store = project.store();
    let config = store.read_project_config().await?;
    let scaffold = store.read_scaffold_config().await?;

    let current_alias = scaffold.components_alias();
    if current_alias != config.base_dir {
        output::warning(format!(
            "components.json points at {}, it will be reset to {}",
            current_alias, config.base_dir
        ));
    }

    output::step(format!(
        "Adding {} component via {}...",
        component,
        project.tool().config().display_name
    ));

    let alias = AliasOverride::apply(store, scaffold, TEMP_SCAFFOLD_DIR, &config.base_dir)
        .await
        .context("Failed to point components.json at the scaffold directory")?;

    let outcome = scaffold_component(project, &config, component).await;
    let restored = alias.restore().await;

    let added = match (outcome, restored) {
        (Ok(added), Ok(())) => added,
        (Ok(_), Err(err)) => {
            return Err(anyhow::Error::new(err)
                .context("Failed to restore components.json")
                .into())
        }
        (Err(err), Ok(())) => return Err(err),
        (Err(err), Err(restore_err)) => {
            output::warning(format!("Failed to restore components.json: {}", restore_err));
            return Err(err);
        }
    };

    output::step("Component added successfully!");
    output::hint(format!(
        "You can now customize the brand override in: {}",
        display_path(project.root(), &added.brand_path)
    ));

    Ok(added)
}

/// Everything between pointing shadcn at the scaffold directory and restoring it
async fn scaffold_component<C: ProductConfig>(
    project: &Project<C>,
    config: &ProjectConfig,
    component: &str,
) -> Result<AddedComponent, CommandError> {
    project.tool().add(component).await?;

    let file_name = component_file_name(component);
    let scaffold_dir = project.resolve(TEMP_SCAFFOLD_DIR);
    let generated_path = scaffold_dir.join(&file_name);
    let (base_dir, brand_dir) = project.layout(config);
    let base_path = base_dir.join(&file_name);
    let brand_path = brand_dir.join(&file_name);

    for dir in [&base_dir, &brand_dir] {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    move_file(&generated_path, &base_path).await?;

    let source = fs::read_to_string(&base_path)
        .await
        .with_context(|| format!("Failed to read {}", base_path.display()))?;
    if let Some(rewritten) = rewrite_utils_import(&source) {
        fs::write(&base_path, rewritten)
            .await
            .with_context(|| format!("Failed to write {}", base_path.display()))?;
    }
    output::success(format!(
        "Moved and updated base component: {}",
        display_path(project.root(), &base_path)
    ));

    let base_import = relative_import(
        &resolve_alias(&config.brand_dir),
        &format!("{}/{}", resolve_alias(&config.base_dir), component),
    );
    fs::write(&brand_path, render_brand_component(component, &base_import))
        .await
        .with_context(|| format!("Failed to write {}", brand_path.display()))?;
    output::success(format!(
        "Created brand component: {}",
        display_path(project.root(), &brand_path)
    ));

    remove_if_empty(&scaffold_dir).await;

    Ok(AddedComponent {
        base_path,
        brand_path,
    })
}

/// Move a file, replacing the destination. Falls back to copy and delete when
/// a rename is not possible (e.g. across filesystems).
async fn move_file(from: &Path, to: &Path) -> Result<()> {
    if fs::rename(from, to).await.is_ok() {
        return Ok(());
    }

    fs::copy(from, to).await.with_context(|| {
        format!(
            "Failed to move {} to {}",
            from.display(),
            to.display()
        )
    })?;
    fs::remove_file(from)
        .await
        .with_context(|| format!("Failed to remove {}", from.display()))?;
    Ok(())
}

/// Best-effort cleanup of the scaffold directory
async fn remove_if_empty(dir: &Path) {
    let Ok(mut entries) = fs::read_dir(dir).await else {
        return;
    };
    if let Ok(None) = entries.next_entry().await {
        let _ = fs::remove_dir(dir).await;
    }
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
