//! Helpers shared by unit tests

use crate::config::{ConfigStore, ProjectConfig, ScaffoldConfig};
use crate::product::ProductConfig;
use crate::project::Project;
use crate::runtime::{ScaffoldTool, ToolConfig};
use std::path::Path;

#[derive(Clone)]
pub struct TestProduct;

impl ProductConfig for TestProduct {
    fn name(&self) -> &'static str {
        "brand-test"
    }

    fn project_config_file(&self) -> &'static str {
        ".brand-testrc.json"
    }

    fn scaffold_command_env(&self) -> &'static str {
        "BRAND_TEST_SCAFFOLD_CMD_UNUSED"
    }
}

/// Fake shadcn: `init` writes components.json, `add <name>` writes a component
/// into whatever directory the alias points at and records the config it saw.
pub const FAKE_SHADCN: &str = r#"
set -e
case "$1" in
  init)
    printf '%s\n' '{' '  "style": "default",' '  "aliases": {' '    "components": "@/components",' '    "utils": "@/lib/utils"' '  }' '}' > components.json
    ;;
  add)
    cp components.json seen-during-add.json
    mkdir -p src/components/ui
    printf '%s\n' 'import * as React from "react"' 'import { cn } from "src/lib/utils"' "export const $2 = 1" > "src/components/ui/$2.tsx"
    ;;
  *)
    exit 1
    ;;
esac
"#;

/// A runner executing `script` with `sh -c`; arguments arrive as `$1`, `$2`
pub fn sh_tool(script: &str, dir: &Path) -> ScaffoldTool {
    ScaffoldTool::new(
        ToolConfig {
            display_name: "shadcn".to_string(),
            command: vec![
                "sh".to_string(),
                "-c".to_string(),
                script.to_string(),
                "shadcn".to_string(),
            ],
        },
        dir,
    )
}

/// A project using the fake scaffolder
pub fn fake_project(dir: &Path) -> Project<TestProduct> {
    Project::new(TestProduct, dir).with_tool(sh_tool(FAKE_SHADCN, dir))
}

/// Write the state `init` leaves behind, without running the scaffolder
pub async fn initialize(dir: &Path) {
    let store = ConfigStore::new(dir, TestProduct.project_config_file());
    let project_config = ProjectConfig::default();

    let mut scaffold: ScaffoldConfig =
        serde_json::from_str(r#"{"style":"default","aliases":{"utils":"@/lib/utils"}}"#).unwrap();
    scaffold.set_components_alias(&project_config.base_dir);

    store.write_scaffold_config(&scaffold).await.unwrap();
    store.write_project_config(&project_config).await.unwrap();
}

/// Current components alias in components.json
pub async fn components_alias(dir: &Path) -> String {
    ConfigStore::new(dir, TestProduct.project_config_file())
        .read_scaffold_config()
        .await
        .unwrap()
        .components_alias()
        .to_string()
}
