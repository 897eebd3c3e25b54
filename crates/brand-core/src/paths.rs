//! Alias path resolution and project layout constants

/// Symbolic prefix used by shadcn and tsconfig path aliases
pub const ALIAS_PREFIX: &str = "@/";

/// Source root the alias prefix stands for
pub const SOURCE_ROOT: &str = "src/";

/// Directory shadcn is pointed at for the duration of a single `add`
pub const TEMP_SCAFFOLD_DIR: &str = "src/components/ui";

/// Extension of generated component files
pub const COMPONENT_EXTENSION: &str = "tsx";

/// Convert `@/components` to `src/components`.
///
/// Paths without the alias prefix are returned unchanged.
pub fn resolve_alias(alias_path: &str) -> String {
    match alias_path.strip_prefix(ALIAS_PREFIX) {
        Some(rest) => format!("{}{}", SOURCE_ROOT, rest),
        None => alias_path.to_string(),
    }
}

/// File name of a component source file, e.g. `button.tsx`
pub fn component_file_name(component: &str) -> String {
    format!("{}.{}", component, COMPONENT_EXTENSION)
}

/// Relative import specifier from a directory to a module path.
///
/// Both arguments are `/`-separated project-relative paths. The result always
/// starts with `./` or `../` so bundlers treat it as relative.
pub fn relative_import(from_dir: &str, to_module: &str) -> String {
    let from: Vec<&str> = segments(from_dir).collect();
    let to: Vec<&str> = segments(to_module).collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from.len() - common];
    if parts.is_empty() {
        parts.push(".");
    }
    parts.extend(&to[common..]);
    parts.join("/")
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}
