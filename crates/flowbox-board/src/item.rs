//! Canvas cards and the per-role card kinds

use crate::id::ItemId;
use crate::position::Position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Kind of card a board accepts
///
/// Each workspace role offers its own fixed add menu.
pub trait ItemKind: Copy + Eq + Hash + fmt::Debug + Serialize + Send + Sync + 'static {
    /// Every kind on the add menu, in menu order
    const ALL: &'static [Self];

    /// Label used for default titles and display
    fn label(&self) -> &'static str;
}

/// Solo creator canvas cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasKind {
    Task,
    Note,
    Inspiration,
    Log,
}

impl ItemKind for CanvasKind {
    const ALL: &'static [Self] = &[Self::Task, Self::Note, Self::Inspiration, Self::Log];

    fn label(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Note => "note",
            Self::Inspiration => "inspiration",
            Self::Log => "log",
        }
    }
}

/// Student canvas cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyKind {
    Assignment,
    Note,
    Resource,
    DailyLog,
}

impl ItemKind for StudyKind {
    const ALL: &'static [Self] = &[Self::Assignment, Self::Note, Self::Resource, Self::DailyLog];

    fn label(&self) -> &'static str {
        match self {
            Self::Assignment => "ASSIGNMENT",
            Self::Note => "NOTE",
            Self::Resource => "RESOURCE",
            Self::DailyLog => "DAILY_LOG",
        }
    }
}

/// Small team canvas cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamKind {
    Task,
    Note,
    Resource,
    DailyLog,
}

impl ItemKind for TeamKind {
    const ALL: &'static [Self] = &[Self::Task, Self::Note, Self::Resource, Self::DailyLog];

    fn label(&self) -> &'static str {
        match self {
            Self::Task => "TASK",
            Self::Note => "NOTE",
            Self::Resource => "RESOURCE",
            Self::DailyLog => "DAILY_LOG",
        }
    }
}

/// Learning pod canvas cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PodKind {
    Assignment,
    Note,
    Resource,
    PodLog,
}

impl ItemKind for PodKind {
    const ALL: &'static [Self] = &[Self::Assignment, Self::Note, Self::Resource, Self::PodLog];

    fn label(&self) -> &'static str {
        match self {
            Self::Assignment => "ASSIGNMENT",
            Self::Note => "NOTE",
            Self::Resource => "RESOURCE",
            Self::PodLog => "POD_LOG",
        }
    }
}

/// A positioned card on a canvas
///
/// Identity, kind and creation time are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardItem<K> {
    id: ItemId,
    kind: K,
    title: String,
    content: String,
    position: Position,
    created_at: DateTime<Utc>,
}

impl<K: ItemKind> BoardItem<K> {
    /// Create a card stamped with the current time
    pub fn new(
        id: impl Into<ItemId>,
        kind: K,
        title: impl Into<String>,
        content: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            content: content.into(),
            position,
            created_at: Utc::now(),
        }
    }

    /// Create a card with the add-menu default title and content
    pub fn with_defaults(id: impl Into<ItemId>, kind: K, position: Position) -> Self {
        let label = kind.label();
        Self::new(
            id,
            kind,
            format!("New {label}"),
            format!("Add your {label} content here..."),
            position,
        )
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> K {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn apply(&mut self, patch: ItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
    }
}

/// Partial update for a card. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub position: Option<Position>,
}

impl ItemPatch {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.position.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_derive_from_kind_label() {
        let item = BoardItem::with_defaults("1", CanvasKind::Note, Position::new(1.0, 2.0));
        assert_eq!(item.title(), "New note");
        assert_eq!(item.content(), "Add your note content here...");

        let item = BoardItem::with_defaults("2", PodKind::PodLog, Position::default());
        assert_eq!(item.title(), "New POD_LOG");
    }

    #[test]
    fn patch_preserves_identity_and_creation_time() {
        let mut item = BoardItem::with_defaults("1", TeamKind::Task, Position::new(0.0, 0.0));
        let created = item.created_at();

        item.apply(
            ItemPatch::new()
                .with_title("Backend Setup")
                .with_position(Position::new(40.0, 50.0)),
        );

        assert_eq!(item.id().as_str(), "1");
        assert_eq!(item.kind(), TeamKind::Task);
        assert_eq!(item.created_at(), created);
        assert_eq!(item.title(), "Backend Setup");
        assert_eq!(item.content(), "Add your TASK content here...");
        assert_eq!(item.position(), Position::new(40.0, 50.0));
    }

    #[test]
    fn kinds_serialize_with_role_casing() {
        assert_eq!(serde_json::to_string(&CanvasKind::Inspiration).unwrap(), "\"inspiration\"");
        assert_eq!(serde_json::to_string(&StudyKind::DailyLog).unwrap(), "\"DAILY_LOG\"");
        assert_eq!(serde_json::to_string(&PodKind::PodLog).unwrap(), "\"POD_LOG\"");
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ItemPatch::new().is_empty());
        assert!(!ItemPatch::new().with_content("x").is_empty());
    }
}
