//! User roles and the routes they hand off to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role picked during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    SoloCreator,
    Student,
    SmallTeam,
    LearningPod,
}

impl UserRole {
    /// The four options offered on the role selection step, in display order
    pub const ALL: [UserRole; 4] = [
        Self::SoloCreator,
        Self::Student,
        Self::SmallTeam,
        Self::LearningPod,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SoloCreator => "solo-creator",
            Self::Student => "student",
            Self::SmallTeam => "small-team",
            Self::LearningPod => "learning-pod",
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::SoloCreator => "Solo Creator",
            Self::Student => "Student",
            Self::SmallTeam => "Small Team",
            Self::LearningPod => "Learning Pod",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::SoloCreator => "Individual projects and personal workflows",
            Self::Student => "Academic projects and coursework",
            Self::SmallTeam => "Collaborative projects with 2-10 members",
            Self::LearningPod => "Study groups and educational communities",
        }
    }

    /// Route opened once the role is confirmed
    #[must_use]
    pub fn destination(&self) -> Destination {
        match self {
            Self::SoloCreator => Destination::SoloCreator,
            Self::Student => Destination::Student,
            Self::SmallTeam => Destination::TeamSetup,
            Self::LearningPod => Destination::PodEntry,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for UserRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

/// Route requested from the routing collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    Dashboard,
    SoloCreator,
    Student,
    TeamSetup,
    Team,
    PodEntry,
    PodSetup,
    Pod,
}

impl Destination {
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::SoloCreator => "/solo-creator",
            Self::Student => "/student",
            Self::TeamSetup => "/team-setup",
            Self::Team => "/team",
            Self::PodEntry => "/pod-entry",
            Self::PodSetup => "/pod-setup",
            Self::Pod => "/pod",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_destinations_are_fixed() {
        assert_eq!(UserRole::SoloCreator.destination().path(), "/solo-creator");
        assert_eq!(UserRole::Student.destination().path(), "/student");
        assert_eq!(UserRole::SmallTeam.destination().path(), "/team-setup");
        assert_eq!(UserRole::LearningPod.destination().path(), "/pod-entry");
    }

    #[test]
    fn role_parses_from_kebab_id() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("teacher".parse::<UserRole>().is_err());
    }

    #[test]
    fn role_serializes_as_kebab_id() {
        assert_eq!(
            serde_json::to_string(&UserRole::LearningPod).unwrap(),
            "\"learning-pod\""
        );
    }
}
