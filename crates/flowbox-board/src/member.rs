//! Static member rosters

use crate::error::BoardError;
use crate::id::MemberId;
use serde::{Deserialize, Serialize};

/// Display name for tasks without a resolvable assignee
pub const UNASSIGNED: &str = "Unassigned";

/// Board member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub initials: String,
    /// Display color token
    pub color: String,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        initials: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            initials: initials.into(),
            color: color.into(),
        }
    }

    /// First letter of each word, uppercased: "Alice Johnson" -> "AJ"
    #[must_use]
    pub fn derive_initials(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Fixed set of members for one board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    #[inline]
    #[must_use]
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|member| &member.id == id)
    }

    /// Look up a member that must exist
    ///
    /// # Errors
    /// - `BoardError::UnknownReference` if no member has this id
    pub fn require(&self, id: &MemberId) -> Result<&Member, BoardError> {
        self.get(id)
            .ok_or_else(|| BoardError::UnknownReference(id.to_string()))
    }

    /// Name for an optional member reference, [`UNASSIGNED`] when it does not resolve
    #[must_use]
    pub fn display_name(&self, id: Option<&MemberId>) -> &str {
        id.and_then(|id| self.get(id))
            .map_or(UNASSIGNED, |member| member.name.as_str())
    }

    #[inline]
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
