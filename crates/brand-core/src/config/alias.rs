//! Scoped override of shadcn's components alias
//!
//! shadcn has no flag for the output directory of `add`, so the alias in
//! `components.json` is rewritten for the duration of one invocation. The
//! override must always be undone: call [`AliasOverride::restore`] on every
//! path, and `Drop` restores synchronously if that never happened. Ctrl+C
//! does not exit the process while an override is alive.

use super::{ConfigError, ConfigStore, ScaffoldConfig};
use crate::runtime::signal::DeferInterrupt;

/// An applied alias override that still has to be restored
#[derive(Debug)]
pub struct AliasOverride<'a> {
    store: &'a ConfigStore,
    config: ScaffoldConfig,
    restore_to: String,
    armed: bool,
    _interrupt: DeferInterrupt,
}

impl<'a> AliasOverride<'a> {
    /// Write `temporary` as the components alias, remembering `restore_to`
    pub async fn apply(
        store: &'a ConfigStore,
        mut config: ScaffoldConfig,
        temporary: &str,
        restore_to: &str,
    ) -> Result<AliasOverride<'a>, ConfigError> {
        let interrupt = DeferInterrupt::enter();
        config.set_components_alias(temporary);
        store.write_scaffold_config(&config).await?;

        Ok(Self {
            store,
            config,
            restore_to: restore_to.to_string(),
            armed: true,
            _interrupt: interrupt,
        })
    }

    /// Set the alias back to its managed value.
    ///
    /// The file is re-read first so changes the scaffolder made while the
    /// override was active are kept. If it can no longer be read, the copy
    /// taken when the override was applied is written instead.
    pub async fn restore(mut self) -> Result<(), ConfigError> {
        self.armed = false;

        let mut config = match self.store.read_scaffold_config().await {
            Ok(current) => current,
            Err(_) => self.config.clone(),
        };
        config.set_components_alias(&self.restore_to);
        self.store.write_scaffold_config(&config).await
    }
}

impl Drop for AliasOverride<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.config.set_components_alias(&self.restore_to);
        let _ = self.store.write_scaffold_config_blocking(&self.config);
    }
}
