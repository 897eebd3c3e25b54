//! The brand wrapper component template

/// Uppercase the first character, leaving the rest as is (`button` -> `Button`).
///
/// No identifier sanitization happens; `alert-dialog` becomes `Alert-dialog`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the brand wrapper for `component`, importing the base component
/// from `base_import` (e.g. `../base/button`).
pub fn render_brand_component(component: &str, base_import: &str) -> String {
    let name = capitalize(component);

    format!(
        r#"import {{ {name} as Base{name}, type {name}Props }} from "{base_import}"
import {{ twMerge }} from "tailwind-merge"

/**
 * This is your brand's {component} component.
 * It wraps the base {component} and can be enhanced with:
 *
 * 1. Extended props for brand-specific features:
 *    interface Brand{name}Props extends {name}Props {{
 *      // Add your brand-specific props here
 *      // Example: isLoading?: boolean
 *    }}
 *
 * 2. Custom styling:
 *    - Apply your brand's colors, spacing, and typography
 *    - Add hover, focus, and active states
 *    - Style different variants
 *
 * 3. Additional functionality:
 *    - Add brand-specific features
 *    - Enhance with additional behaviors
 *    - Wrap with brand-specific logic
 */
export function {name}({{ className, ...props }}: {name}Props) {{
  return (
    <Base{name}
      {{...props}}
      className={{twMerge(
        // Add your brand-specific styles here
        className
      )}}
    />
  )
}}
"#
    )
}
