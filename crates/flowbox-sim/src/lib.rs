//! Flowbox Simulator
//!
//! Drivers that exercise the onboarding flow and the workspace model together.
//!
//! - [`run_simulator`]: seeded random operations checked against a model
//! - [`run_walkthrough`]: one scripted journey from sign-up to a workspace

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod simulator;
pub mod walkthrough;

pub use simulator::{
    run_simulator, ExpectedResult, InvariantCheck, InvariantViolation, OperationDistribution,
    OperationStats, SimulatedOperation, SimulationReport, SimulatorConfig, Violation,
};
pub use walkthrough::{run_walkthrough, ChannelNavigator, WalkthroughError, WalkthroughReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
