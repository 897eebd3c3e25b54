//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface that each product (brand-ui, shadowfax) must
//! implement to configure naming, config files and the scaffolder invocation.

/// Default command used to run the shadcn scaffolder
pub const DEFAULT_SCAFFOLD_COMMAND: &str = "pnpm dlx shadcn@latest";

/// Configuration trait for different CLI products
///
/// Each product implements this trait to define:
/// - Product identity (program name)
/// - The project config file it owns
/// - How the scaffolder is invoked, and how users can override it
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Program name, used in hints such as `brand-ui init`
    fn name(&self) -> &'static str;

    /// File name of the project config in the project root
    fn project_config_file(&self) -> &'static str;

    /// Environment variable name for overriding the scaffolder command
    fn scaffold_command_env(&self) -> &'static str;

    /// Scaffolder command used when no override is set
    fn default_scaffold_command(&self) -> &'static str {
        DEFAULT_SCAFFOLD_COMMAND
    }

    /// Name of the scaffolder in user-facing messages
    fn scaffold_tool_name(&self) -> &'static str {
        "shadcn"
    }
}
