//! Runtime configuration
//!
//! Every field has a default, so an empty TOML document is a valid config.
//!
//! ```toml
//! rng_seed = 42
//!
//! [onboarding]
//! confirmation_delay_ms = 1000
//!
//! [timeline]
//! generation_delay_ms = 1200
//!
//! [placement.solo]
//! min_x = 100.0
//! max_x = 500.0
//! min_y = 100.0
//! max_y = 400.0
//! ```

use crate::error::ConfigError;
use flowbox_board::Bounds;
use flowbox_onboarding::UserRole;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowboxConfig {
    /// Seed for item placement and invite codes; entropy when unset.
    /// TOML files only hold seeds up to `i64::MAX`.
    pub rng_seed: Option<u64>,
    pub onboarding: OnboardingConfig,
    pub timeline: TimelineConfig,
    pub placement: PlacementConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    pub confirmation_delay_ms: u64,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            confirmation_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub generation_delay_ms: u64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: 1200,
        }
    }
}

/// Placement region per workspace role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub solo: Bounds,
    pub student: Bounds,
    pub team: Bounds,
    pub pod: Bounds,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            solo: Bounds::CANVAS,
            student: Bounds::COMPACT,
            team: Bounds::COMPACT,
            pod: Bounds::COMPACT,
        }
    }
}

impl PlacementConfig {
    #[must_use]
    pub fn for_role(&self, role: UserRole) -> Bounds {
        match role {
            UserRole::SoloCreator => self.solo,
            UserRole::Student => self.student,
            UserRole::SmallTeam => self.team,
            UserRole::LearningPod => self.pod,
        }
    }
}

impl FlowboxConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds above `i64::MAX` still drive the RNG but cannot be written
    /// back with [`to_toml_string`](Self::to_toml_string)
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.onboarding.confirmation_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_generation_delay(mut self, delay: Duration) -> Self {
        self.timeline.generation_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Encode as TOML
    ///
    /// # Errors
    /// `ConfigError::SeedOutOfRange` when `rng_seed` exceeds `i64::MAX`
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        if let Some(seed) = self.rng_seed {
            if i64::try_from(seed).is_err() {
                return Err(ConfigError::SeedOutOfRange(seed));
            }
        }
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject placement regions that cannot hold a card
    pub fn validate(&self) -> Result<(), ConfigError> {
        for role in UserRole::ALL {
            if !self.placement.for_role(role).is_valid() {
                return Err(ConfigError::InvalidBounds { role });
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.onboarding.confirmation_delay_ms)
    }

    #[inline]
    #[must_use]
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.timeline.generation_delay_ms)
    }

    /// Seeded RNG when `rng_seed` is set, otherwise one seeded from the OS
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
