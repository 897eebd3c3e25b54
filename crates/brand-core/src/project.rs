//! A project directory bound to a product

use crate::config::{ConfigStore, ProjectConfig};
use crate::paths::{component_file_name, resolve_alias};
use crate::product::ProductConfig;
use crate::runtime::{ScaffoldTool, ToolConfig};
use std::path::{Path, PathBuf};

/// Everything a command needs: product identity, config files, scaffolder
pub struct Project<C: ProductConfig> {
    product: C,
    root: PathBuf,
    store: ConfigStore,
    tool: ScaffoldTool,
}

impl<C: ProductConfig> Project<C> {
    /// Open the project rooted at `root`
    pub fn new(product: C, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let store = ConfigStore::new(&root, product.project_config_file());
        let tool = ScaffoldTool::new(ToolConfig::from_product(&product), &root);
        Self {
            product,
            root,
            store,
            tool,
        }
    }

    /// Replace the scaffolder runner
    pub fn with_tool(mut self, tool: ScaffoldTool) -> Self {
        self.tool = tool;
        self
    }

    pub fn product(&self) -> &C {
        &self.product
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn tool(&self) -> &ScaffoldTool {
        &self.tool
    }

    /// Filesystem path for an alias path such as `@/components/base`
    pub fn resolve(&self, alias_path: &str) -> PathBuf {
        self.root.join(resolve_alias(alias_path))
    }

    /// Path of a component file inside the directory given by `dir_alias`
    pub fn component_path(&self, dir_alias: &str, component: &str) -> PathBuf {
        self.resolve(dir_alias).join(component_file_name(component))
    }

    /// Resolved base and brand directories
    pub fn layout(&self, config: &ProjectConfig) -> (PathBuf, PathBuf) {
        (self.resolve(&config.base_dir), self.resolve(&config.brand_dir))
    }
}
