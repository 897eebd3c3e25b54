//! Project config: where base and brand components live

use serde::{Deserialize, Serialize};

/// Default base directory, as a shadcn-style alias
pub const DEFAULT_BASE_DIR: &str = "@/components/base";

/// Default brand directory, as a shadcn-style alias
pub const DEFAULT_BRAND_DIR: &str = "@/components/brand";

/// Base and brand directories, stored as alias paths (e.g. `@/components/base`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Unmodified components as generated by shadcn
    pub base_dir: String,

    /// Brand wrappers around the base components
    pub brand_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            base_dir: DEFAULT_BASE_DIR.to_string(),
            brand_dir: DEFAULT_BRAND_DIR.to_string(),
        }
    }
}
