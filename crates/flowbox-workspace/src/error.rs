//! Error types for Flowbox workspaces
//!
//! Provides error handling for:
//! - Workspace edits (titles, views, board references)
//! - Timeline generation
//! - Configuration loading and validation

use crate::profile::View;
use flowbox_board::BoardError;
use flowbox_onboarding::UserRole;
use std::path::PathBuf;

/// Main workspace error type
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("board error: {0}")]
    Board(#[from] BoardError),

    /// Titles must contain at least one non-whitespace character
    #[error("workspace title must not be blank")]
    BlankTitle,

    #[error("view {view} is not offered for {role}")]
    ViewUnavailable { view: View, role: UserRole },

    #[error("timeline generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WorkspaceError {
    /// Whether the user can fix the input and try again
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Board(_) | Self::BlankTitle | Self::ViewUnavailable { .. }
        )
    }
}

/// Timeline generator failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("generator unavailable: {0}")]
    Unavailable(String),

    /// The request was superseded or the workspace dropped it
    #[error("generation request is stale")]
    Stale,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode TOML: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("placement bounds for {role} are empty or not finite")]
    InvalidBounds { role: UserRole },

    /// TOML integers are signed 64-bit
    #[error("rng_seed {0} exceeds {max}", max = i64::MAX)]
    SeedOutOfRange(u64),
}
