/// Environment variable consulted by [`RuntimeMode::from_env`].
pub const MODE_ENV_VAR: &str = "PROPCHECK_ENV";

/// Process-wide runtime mode gating all checks.
///
/// Under [`RuntimeMode::Production`] both the checking and asserting
/// operations are complete no-ops regardless of their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    #[default]
    Development,
    Production,
}

impl RuntimeMode {
    /// Read the mode from `PROPCHECK_ENV`. Only the exact value
    /// `"production"` selects [`RuntimeMode::Production`]; anything else,
    /// including an unset variable, selects [`RuntimeMode::Development`].
    pub fn from_env() -> Self {
        if std::env::var(MODE_ENV_VAR).ok().as_deref() == Some("production") {
            RuntimeMode::Production
        } else {
            RuntimeMode::Development
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, RuntimeMode::Production)
    }
}
