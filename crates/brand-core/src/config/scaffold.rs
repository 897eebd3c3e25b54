//! shadcn's `components.json`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// File name of the scaffolder config in the project root
pub const SCAFFOLD_CONFIG_FILE: &str = "components.json";

/// Value shadcn assumes when no components alias is configured
const DEFAULT_COMPONENTS_ALIAS: &str = "components";

/// The scaffolder's config, kept as an ordered JSON object.
///
/// Everything except `aliases.components` belongs to shadcn and is written back
/// untouched, in the order it was read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaffoldConfig(Map<String, Value>);

impl ScaffoldConfig {
    /// The directory alias shadcn writes generated components into
    pub fn components_alias(&self) -> &str {
        self.0
            .get("aliases")
            .and_then(|aliases| aliases.get("components"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_COMPONENTS_ALIAS)
    }

    /// Point shadcn at a different components directory
    pub fn set_components_alias(&mut self, alias: &str) {
        let aliases = self
            .0
            .entry("aliases")
            .or_insert_with(|| Value::Object(Map::new()));
        if !aliases.is_object() {
            *aliases = Value::Object(Map::new());
        }
        if let Value::Object(map) = aliases {
            map.insert("components".to_string(), Value::String(alias.to_string()));
        }
    }
}
