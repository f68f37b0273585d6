//! Common error infrastructure for combat-core.
//!
//! The decision layer itself never fails: every query answers with a
//! boolean, an `Option` or an outcome enum that the behavior tree branches on.
//! Errors exist only at the setup and host-integration edges (validating
//! tunables, applying engine events to units).

use crate::state::EntityId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The event can be dropped and the frame continues
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - ignore the event and keep simulating.
    ///
    /// Examples: hit reported against an entity destroyed earlier this frame
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: negative cooldown, zero samples per ring
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: projectile registered as a unit
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all combat-core errors.
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// A tunable in [`crate::AiConfig`] is out of range.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be at least 1")]
    Zero { field: &'static str },

    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: f32,
        value: f32,
    },
}

impl CombatError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPositive { .. } => "CONFIG_NOT_POSITIVE",
            Self::Negative { .. } => "CONFIG_NEGATIVE",
            Self::Zero { .. } => "CONFIG_ZERO",
            Self::TooSmall { .. } => "CONFIG_TOO_SMALL",
        }
    }
}

/// Host events referenced entities the registry cannot use.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("entity {0} is not alive")]
    UnknownEntity(EntityId),

    #[error("entity {0} is not a unit")]
    NotAUnit(EntityId),

    #[error("entity {0} is not a projectile")]
    NotAProjectile(EntityId),
}

impl CombatError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownEntity(_) => ErrorSeverity::Recoverable,
            Self::NotAUnit(_) | Self::NotAProjectile(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntity(_) => "UNKNOWN_ENTITY",
            Self::NotAUnit(_) => "NOT_A_UNIT",
            Self::NotAProjectile(_) => "NOT_A_PROJECTILE",
        }
    }
}
