use thiserror::Error;

/// Validation failure surfaced inline under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid screen config: {0}")]
    Parse(#[from] serde_json::Error),
}
