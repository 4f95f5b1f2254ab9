//! Registration, run and construction options.

use crate::{
    action::{DEFAULT_PRIORITY, Priority},
    error::ConfigError,
    path::{Excludes, SEPARATOR},
};

/// Default name of the global scope's node.
pub const DEFAULT_GLOBAL_KEY: &str = "*";

/// Default reserved entry key.
pub const DEFAULT_ENTRY_KEY: &str = "__entry";

/// Per-registration metadata.
///
/// # Example
/// ```
/// use nestcall_core::RegisterOptions;
///
/// let opts = RegisterOptions::new()
///     .with_priority(20)
///     .with_excludes(["admin", "admin.users"]);
/// assert_eq!(opts.priority, 20);
/// assert!(opts.excludes.contains("admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOptions {
    /// Priority (higher = executed first). Default is [`DEFAULT_PRIORITY`].
    pub priority: Priority,
    /// Scope paths under which the action is skipped.
    pub excludes: Excludes,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterOptions {
    /// Default priority, no exclusions.
    pub fn new() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            excludes: Excludes::none(),
        }
    }

    /// Set priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set excluded scope paths (a single path or a list).
    pub fn with_excludes(mut self, excludes: impl Into<Excludes>) -> Self {
        self.excludes = excludes.into();
        self
    }
}

/// Options for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Whether the global phase executes. Default is `true`.
    pub run_globals: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RunOptions {
    /// Globals enabled.
    pub const fn new() -> Self {
        Self { run_globals: true }
    }

    /// Enable or disable the global phase.
    pub const fn with_globals(mut self, run_globals: bool) -> Self {
        self.run_globals = run_globals;
        self
    }

    /// Skip the global phase.
    pub const fn without_globals(self) -> Self {
        self.with_globals(false)
    }
}

/// Construction options for a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    global_key: String,
    entry_key: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            global_key: DEFAULT_GLOBAL_KEY.to_owned(),
            entry_key: DEFAULT_ENTRY_KEY.to_owned(),
        }
    }
}

impl DispatcherConfig {
    /// Default keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the name of the global scope's node.
    pub fn global_key(mut self, key: impl Into<String>) -> Self {
        self.global_key = key.into();
        self
    }

    /// Override the reserved entry key.
    pub fn entry_key(mut self, key: impl Into<String>) -> Self {
        self.entry_key = key.into();
        self
    }

    /// The configured global key.
    pub fn global(&self) -> &str {
        &self.global_key
    }

    /// The configured entry key.
    pub fn entry(&self) -> &str {
        &self.entry_key
    }

    /// Check that both keys are usable as single path segments and differ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (which, key) in [("global", &self.global_key), ("entry", &self.entry_key)] {
            if key.is_empty() {
                return Err(ConfigError::EmptyKey { which });
            }
            if key.contains(SEPARATOR) {
                return Err(ConfigError::SeparatorInKey {
                    which,
                    key: key.clone(),
                });
            }
        }
        if self.global_key == self.entry_key {
            return Err(ConfigError::KeysCollide(self.global_key.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_options_defaults() {
        let opts = RegisterOptions::default();
        assert_eq!(opts.priority, DEFAULT_PRIORITY);
        assert!(opts.excludes.is_empty());
    }

    #[test]
    fn test_run_options_builder() {
        assert!(RunOptions::default().run_globals);
        assert!(!RunOptions::new().without_globals().run_globals);
        assert!(RunOptions::new().with_globals(false).with_globals(true).run_globals);
    }

    #[test]
    fn test_config_custom_keys() {
        let config = DispatcherConfig::new().global_key("**").entry_key("__custom");
        assert_eq!(config.global(), "**");
        assert_eq!(config.entry(), "__custom");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_keys() {
        assert_eq!(
            DispatcherConfig::new().entry_key("").validate(),
            Err(ConfigError::EmptyKey { which: "entry" })
        );
        assert!(matches!(
            DispatcherConfig::new().global_key("a.b").validate(),
            Err(ConfigError::SeparatorInKey { which: "global", .. })
        ));
        assert_eq!(
            DispatcherConfig::new().global_key("x").entry_key("x").validate(),
            Err(ConfigError::KeysCollide("x".to_string()))
        );
    }
}
