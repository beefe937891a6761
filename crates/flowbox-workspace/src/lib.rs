//! Flowbox Workspace
//!
//! Per-role workspace pages built on the board model.
//!
//! # Core Concepts
//!
//! - [`Workspace<P>`]: one page's state for profile `P` ([`Solo`], [`Study`], [`Team`], [`Pod`])
//! - [`AnyWorkspace`]: role chosen at runtime
//! - [`TimelineGenerator`]: async milestone generation, discarded when stale
//! - [`FlowboxConfig`]: TOML configuration for delays, placement and seeding
//! - [`Dashboard`]: searchable board catalog
//!
//! # Example
//!
//! ```rust,ignore
//! use flowbox_workspace::{FlowboxConfig, TimelineRequest, Workspace, Solo};
//!
//! # async fn example() -> Result<(), flowbox_workspace::WorkspaceError> {
//! let mut ws = Workspace::<Solo>::new(&FlowboxConfig::new().with_seed(7))?;
//! let generator = ws.mock_generator();
//! ws.generate_timeline(&generator, TimelineRequest::new("Portfolio")).await?;
//! assert_eq!(ws.title(), "Portfolio");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod any;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generation;
pub mod profile;
pub mod report;
mod seed;
pub mod workspace;

pub use any::AnyWorkspace;
pub use config::{FlowboxConfig, OnboardingConfig, PlacementConfig, TimelineConfig};
pub use dashboard::{BoardSummary, Dashboard};
pub use error::{ConfigError, GenerationError, WorkspaceError};
pub use generation::{
    starter_plan, MockTimelineGenerator, TimelineGenerator, TimelineRequest,
    DEFAULT_GENERATION_DELAY, FALLBACK_TITLE,
};
pub use profile::{Pod, Solo, Study, Team, View, WorkspaceProfile};
pub use report::{WorkspaceReport, WorkspaceSnapshot};
pub use workspace::{GenerationTicket, Workspace};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
