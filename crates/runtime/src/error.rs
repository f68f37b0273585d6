//! Error types surfaced by the runtime.
//!
//! Behavior nodes never fail with an error; they answer with a [`Status`].
//! Errors only come from setting up controllers and from the host feeding
//! them inconsistent state.
//!
//! [`Status`]: behavior_tree::Status
use std::io;
use std::path::PathBuf;

use combat_core::{CombatError, ConfigError, EntityId, ErrorSeverity, RegistryError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config TOML")]
    ConfigSyntax(#[source] toml::de::Error),

    #[error("invalid AI config")]
    InvalidConfig(#[from] ConfigError),

    #[error("controlled unit {0} is not alive")]
    UnknownUnit(EntityId),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl CombatError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigRead { .. } | Self::ConfigSyntax(_) | Self::InvalidConfig(_) => {
                ErrorSeverity::Validation
            }
            Self::UnknownUnit(_) => ErrorSeverity::Recoverable,
            Self::Registry(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigRead { .. } => "CONFIG_READ",
            Self::ConfigSyntax(_) => "CONFIG_SYNTAX",
            Self::InvalidConfig(err) => err.error_code(),
            Self::UnknownUnit(_) => "UNKNOWN_UNIT",
            Self::Registry(err) => err.error_code(),
        }
    }
}
