//! Team and pod setup steps that follow role selection

use crate::credentials::is_valid_email;
use crate::error::SetupError;
use crate::role::Destination;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 5;

static INVITE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^POD-[A-Z0-9]{5}$").expect("invite code pattern is valid"));

/// Split a comma separated invite list, dropping blank entries
pub fn parse_invites(raw: &str) -> Result<Vec<String>, SetupError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            if is_valid_email(entry) {
                Ok(entry.to_string())
            } else {
                Err(SetupError::InvalidInvite(entry.to_string()))
            }
        })
        .collect()
}

fn require(value: &str, field: &'static str) -> Result<String, SetupError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(SetupError::BlankField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamGoal {
    #[default]
    Project,
    Research,
    #[serde(rename = "Startup Idea")]
    StartupIdea,
}

impl TeamGoal {
    pub const ALL: [TeamGoal; 3] = [Self::Project, Self::Research, Self::StartupIdea];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Research => "Research",
            Self::StartupIdea => "Startup Idea",
        }
    }
}

/// Team setup form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSetup {
    pub name: String,
    /// Comma separated email addresses
    pub invites: String,
    pub goal: TeamGoal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPlan {
    pub name: String,
    pub invites: Vec<String>,
    pub goal: TeamGoal,
    pub destination: Destination,
}

impl TeamSetup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_invites(mut self, invites: impl Into<String>) -> Self {
        self.invites = invites.into();
        self
    }

    #[must_use]
    pub fn with_goal(mut self, goal: TeamGoal) -> Self {
        self.goal = goal;
        self
    }

    /// Whether the create button is enabled
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn create(&self) -> Result<TeamPlan, SetupError> {
        let name = require(&self.name, "team name")?;
        let invites = parse_invites(&self.invites)?;
        tracing::info!(
            "Creating team {} ({}) with {} invites",
            name,
            self.goal.label(),
            invites.len()
        );
        Ok(TeamPlan {
            name,
            invites,
            goal: self.goal,
            destination: Destination::Team,
        })
    }
}

/// `POD-` followed by five uppercase alphanumerics
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InviteCode(String);

impl InviteCode {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..CODE_LEN)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(format!("POD-{suffix}"))
    }

    /// Normalise user input; surrounding whitespace and case are ignored
    pub fn parse(input: &str) -> Result<Self, SetupError> {
        let normalized = input.trim().to_ascii_uppercase();
        if INVITE_CODE_RE.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(SetupError::InvalidInviteCode(input.trim().to_string()))
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pod entry screen: start a new pod or join one
#[derive(Debug, Clone, Copy, Default)]
pub struct PodEntry;

impl PodEntry {
    #[must_use]
    pub fn start_setup(&self) -> Destination {
        Destination::PodSetup
    }

    pub fn join(&self, code: &str) -> Result<(InviteCode, Destination), SetupError> {
        let code = InviteCode::parse(code)?;
        tracing::info!("Joining pod with code {}", code);
        Ok((code, Destination::Pod))
    }
}

/// Pod setup form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodSetup {
    pub name: String,
    pub subject: String,
    pub invites: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PodPlan {
    pub name: String,
    pub subject: String,
    pub invites: Vec<String>,
    pub code: InviteCode,
    pub destination: Destination,
}

impl PodSetup {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            invites: String::new(),
        }
    }

    #[must_use]
    pub fn with_invites(mut self, invites: impl Into<String>) -> Self {
        self.invites = invites.into();
        self
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.subject.trim().is_empty()
    }

    pub fn create<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PodPlan, SetupError> {
        let name = require(&self.name, "pod name")?;
        let subject = require(&self.subject, "subject")?;
        let invites = parse_invites(&self.invites)?;
        let code = InviteCode::generate(rng);
        tracing::info!("Created pod {} for {} with code {}", name, subject, code);
        Ok(PodPlan {
            name,
            subject,
            invites,
            code,
            destination: Destination::Pod,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn invites_skip_blank_entries() {
        assert_eq!(
            parse_invites(" a@b.com, ,c@d.org ,").unwrap(),
            vec!["a@b.com".to_string(), "c@d.org".to_string()]
        );
        assert_eq!(parse_invites("").unwrap(), Vec::<String>::new());
        assert_eq!(
            parse_invites("a@b.com, nope"),
            Err(SetupError::InvalidInvite("nope".to_string()))
        );
    }

    #[test]
    fn team_setup_requires_name() {
        assert!(!TeamSetup::new("  ").is_valid());
        assert_eq!(
            TeamSetup::new("").create(),
            Err(SetupError::BlankField("team name"))
        );

        let plan = TeamSetup::new(" Rockets ")
            .with_goal(TeamGoal::StartupIdea)
            .with_invites("a@b.com")
            .create()
            .unwrap();
        assert_eq!(plan.name, "Rockets");
        assert_eq!(plan.destination, Destination::Team);
        assert_eq!(plan.goal.label(), "Startup Idea");
    }

    #[test]
    fn generated_codes_match_pattern() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let code = InviteCode::generate(&mut rng);
            assert!(INVITE_CODE_RE.is_match(code.as_str()), "{code}");
        }
    }

    #[test]
    fn join_normalises_code() {
        let (code, destination) = PodEntry.join("  pod-ab12c ").unwrap();
        assert_eq!(code.as_str(), "POD-AB12C");
        assert_eq!(destination, Destination::Pod);
        assert!(PodEntry.join("POD-1234").is_err());
        assert!(PodEntry.join("").is_err());
        assert_eq!(PodEntry.start_setup(), Destination::PodSetup);
    }

    #[test]
    fn pod_setup_issues_code() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            PodSetup::new("Bio", " ").create(&mut rng),
            Err(SetupError::BlankField("subject"))
        );
        let plan = PodSetup::new("Bio crew", "Biology").create(&mut rng).unwrap();
        assert_eq!(plan.destination, Destination::Pod);
        assert!(InviteCode::parse(plan.code.as_str()).is_ok());
    }
}
