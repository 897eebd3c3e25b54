#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Stand-in for `pnpm dlx shadcn@latest`
const FAKE_SHADCN: &str = r#"#!/bin/sh
set -e
case "$1" in
  init)
    cat > components.json <<'JSON'
{
  "$schema": "https://ui.shadcn.com/schema.json",
  "style": "default",
  "rsc": true,
  "tsx": true,
  "aliases": {
    "components": "@/components",
    "utils": "@/lib/utils"
  }
}
JSON
    ;;
  add)
    cp components.json seen-during-add.json
    mkdir -p src/components/ui
    cat > "src/components/ui/$2.tsx" <<'TSX'
import * as React from "react"
import { cn } from "src/lib/utils"

export interface ComponentProps extends React.HTMLAttributes<HTMLDivElement> {}
TSX
    ;;
  *)
    exit 1
    ;;
esac
"#;

struct TestProject {
    temp: TempDir,
    scaffold_cmd: String,
}

impl TestProject {
    fn new() -> Self {
        Self::with_script(FAKE_SHADCN)
    }

    fn with_script(script: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("app");
        fs::create_dir_all(&project).unwrap();
        let script_path = temp.path().join("fake-shadcn.sh");
        fs::write(&script_path, script).unwrap();
        let scaffold_cmd = format!("sh {}", script_path.display());
        Self { temp, scaffold_cmd }
    }

    fn dir(&self) -> std::path::PathBuf {
        self.temp.path().join("app")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("brand-ui"));
        cmd.current_dir(self.dir())
            .env("BRAND_UI_SCAFFOLD_CMD", &self.scaffold_cmd)
            .env("NO_COLOR", "1");
        cmd
    }

    fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir().join(path)).unwrap()
    }

    fn components_alias(&self) -> String {
        let json: serde_json::Value = serde_json::from_str(&self.read("components.json")).unwrap();
        json["aliases"]["components"].as_str().unwrap().to_string()
    }

    fn init(&self) {
        self.cmd().arg("init").assert().success();
    }
}

fn snapshot(dir: &Path) -> Vec<(String, String)> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let path = entry.path();
            (path.display().to_string(), fs::read_to_string(path).unwrap())
        })
        .collect()
}

#[test]
fn test_init_creates_structure() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file: .brand-uirc.json"))
        .stdout(predicate::str::contains("Try running: brand-ui add button"));

    assert_eq!(project.components_alias(), "@/components/base");
    assert_eq!(
        project.read(".brand-uirc.json"),
        "{\n  \"baseDir\": \"@/components/base\",\n  \"brandDir\": \"@/components/brand\"\n}\n"
    );
    assert!(project.dir().join("src/components/base").is_dir());
    assert!(project.dir().join("src/components/brand").is_dir());
}

#[test]
fn test_init_with_failing_scaffolder_exits_one() {
    let project = TestProject::with_script("exit 2\n");

    project
        .cmd()
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error running shadcn init"));

    assert!(!project.dir().join(".brand-uirc.json").exists());
}

#[test]
fn test_init_twice_keeps_brand_overrides() {
    let project = TestProject::new();
    project.init();
    project.cmd().args(["add", "button"]).assert().success();
    fs::write(project.dir().join("src/components/brand/button.tsx"), "customized").unwrap();

    project.init();

    assert_eq!(project.read("src/components/brand/button.tsx"), "customized");
    assert_eq!(project.components_alias(), "@/components/base");
}

#[test]
fn test_add_without_init_reports_not_initialized() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["add", "button"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Project not initialized. Run \"brand-ui init\" first.",
        ));

    assert!(!project.dir().join("seen-during-add.json").exists());
}

#[test]
fn test_add_layers_component() {
    let project = TestProject::new();
    project.init();

    project
        .cmd()
        .args(["add", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved and updated base component"))
        .stdout(predicate::str::contains("Created brand component"));

    let base = project.read("src/components/base/foo.tsx");
    assert!(base.contains(r#"import { cn } from "@/lib/utils""#));

    let brand = project.read("src/components/brand/foo.tsx");
    assert!(brand.contains(r#"import { Foo as BaseFoo, type FooProps } from "../base/foo""#));
    assert!(brand.contains("export function Foo({ className, ...props }: FooProps)"));

    let seen: serde_json::Value =
        serde_json::from_str(&project.read("seen-during-add.json")).unwrap();
    assert_eq!(seen["aliases"]["components"], "src/components/ui");
    assert_eq!(project.components_alias(), "@/components/base");
    assert!(!project.dir().join("src/components/ui").exists());
}

#[test]
fn test_add_twice_overwrites_brand_file() {
    let project = TestProject::new();
    project.init();

    project.cmd().args(["add", "card"]).assert().success();
    let first = project.read("src/components/brand/card.tsx");
    fs::write(project.dir().join("src/components/brand/card.tsx"), "edited").unwrap();

    project.cmd().args(["add", "card"]).assert().success();

    assert_eq!(project.read("src/components/brand/card.tsx"), first);
}

#[test]
fn test_failed_add_restores_components_alias() {
    let project = TestProject::new();
    project.init();
    let failing = project.temp.path().join("fake-shadcn.sh");
    fs::write(&failing, "#!/bin/sh\nexit 1\n").unwrap();

    project
        .cmd()
        .args(["add", "not-a-component"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error running shadcn add"));

    assert_eq!(project.components_alias(), "@/components/base");
}

#[test]
fn test_brand_list_empty() {
    let project = TestProject::new();
    project.init();

    project
        .cmd()
        .args(["brand", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No brand overrides found."));
}

#[test]
fn test_brand_list_shows_component_files_only() {
    let project = TestProject::new();
    project.init();
    let brand_dir = project.dir().join("src/components/brand");
    for file in ["card.tsx", "button.tsx", "README.md"] {
        fs::write(brand_dir.join(file), "").unwrap();
    }

    project
        .cmd()
        .args(["brand", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Brand overrides:"))
        .stdout(predicate::str::contains("✓ button\n✓ card\n"))
        .stdout(predicate::str::contains("README").not());
}

#[test]
fn test_brand_unknown_subcommand() {
    let project = TestProject::new();
    project.init();

    project
        .cmd()
        .args(["brand", "tokens"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown subcommand: tokens"))
        .stdout(predicate::str::contains("Available subcommands: list"));
}

#[test]
fn test_update_missing_component() {
    let project = TestProject::new();
    project.init();

    project
        .cmd()
        .args(["update", "missing-component"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Component missing-component not found in base directory.",
        ))
        .stdout(predicate::str::contains(
            "Try adding it first with: brand-ui add missing-component",
        ));
}

#[test]
fn test_update_existing_component_changes_nothing() {
    let project = TestProject::new();
    project.init();
    project.cmd().args(["add", "existing-component"]).assert().success();
    let before = snapshot(&project.dir());

    project
        .cmd()
        .args(["update", "existing-component"])
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder"));

    assert_eq!(snapshot(&project.dir()), before);
}

#[test]
fn test_add_requires_component_name() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("add")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("<COMPONENT_NAME>"));
}

#[test]
fn test_brand_requires_subcommand() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("brand")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("<SUBCOMMAND>"));
}

#[test]
fn test_unknown_command_exits_one() {
    let project = TestProject::new();

    project.cmd().arg("bogus").assert().code(1);
}

#[test]
fn test_version_exits_zero() {
    let project = TestProject::new();

    project
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brand-ui"));
}
