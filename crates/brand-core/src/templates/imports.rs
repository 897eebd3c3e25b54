//! Import rewriting for generated base components

/// Import emitted by shadcn when the components alias is a plain path
pub const PROJECT_RELATIVE_UTILS_IMPORT: &str = r#"from "src/lib/utils""#;

/// The same import in alias form, as used by the rest of the project
pub const ALIASED_UTILS_IMPORT: &str = r#"from "@/lib/utils""#;

/// Rewrite the first project-relative utils import to its alias form.
///
/// Matches the literal text only; imports with other quoting or spacing are
/// left alone. Returns `None` if there was nothing to rewrite.
pub fn rewrite_utils_import(source: &str) -> Option<String> {
    source
        .contains(PROJECT_RELATIVE_UTILS_IMPORT)
        .then(|| source.replacen(PROJECT_RELATIVE_UTILS_IMPORT, ALIASED_UTILS_IMPORT, 1))
}
