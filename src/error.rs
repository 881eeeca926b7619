//! Error type shared by the library and the `idlesim` binary.

/// Errors that can stop a simulation before it produces an outcome.
///
/// A negative balance is deliberately not in here: the run stops and the
/// outcome carries the partial history instead.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Reading a config file or writing the CSV log failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`crate::config::SimConfig`].
    #[error("config parse error: {0}")]
    Config(String),

    /// The configuration parsed but describes an impossible economy.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::Config(err.to_string())
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, SimError>;
