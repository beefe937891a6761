//! Insertion-ordered card collection for one workspace canvas

use crate::error::BoardError;
use crate::id::ItemId;
use crate::item::{BoardItem, ItemKind, ItemPatch};
use crate::position::{Bounds, Position};
use indexmap::IndexMap;
use rand::Rng;

/// Canvas board
///
/// Owns its cards exclusively; every mutation goes through `&mut self`.
/// Unknown ids passed to `remove_item`, `update_item` or `move_item` are
/// ignored rather than reported.
#[derive(Debug, Clone)]
pub struct Board<K: ItemKind> {
    items: Vec<BoardItem<K>>,
    bounds: Bounds,
}

impl<K: ItemKind> Board<K> {
    /// Create an empty board placing new cards inside `bounds`
    #[inline]
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            items: Vec::new(),
            bounds,
        }
    }

    /// Create a board pre-populated with `items`
    ///
    /// # Errors
    /// - `BoardError::DuplicateItemId` if two items share an id
    pub fn with_items(
        bounds: Bounds,
        items: impl IntoIterator<Item = BoardItem<K>>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(bounds);
        for item in items {
            board.insert_item(item)?;
        }
        Ok(board)
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Add a default card of `kind` at a random position within the bounds
    ///
    /// Always succeeds; returns the generated id.
    pub fn add_item<R: Rng + ?Sized>(&mut self, kind: K, rng: &mut R) -> ItemId {
        let id = self.fresh_id();
        let position = self.bounds.sample(rng);
        tracing::debug!(
            "Adding {} card {} at ({:.1}, {:.1})",
            kind.label(),
            id,
            position.x,
            position.y
        );
        self.items
            .push(BoardItem::with_defaults(id.clone(), kind, position));
        id
    }

    /// Append a caller-built card
    ///
    /// # Errors
    /// - `BoardError::DuplicateItemId` if the id is already on the board
    pub fn insert_item(&mut self, item: BoardItem<K>) -> Result<(), BoardError> {
        if self.contains(item.id()) {
            return Err(BoardError::DuplicateItemId(item.id().to_string()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove a card, returning it if it was present
    pub fn remove_item(&mut self, id: &ItemId) -> Option<BoardItem<K>> {
        let index = self.index_of(id)?;
        tracing::debug!("Removing card {}", id);
        Some(self.items.remove(index))
    }

    /// Apply `patch` to a card. Returns `false` if the id is unknown.
    pub fn update_item(&mut self, id: &ItemId, patch: ItemPatch) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Move a card. Returns `false` if the id is unknown.
    pub fn move_item(&mut self, id: &ItemId, position: Position) -> bool {
        self.update_item(id, ItemPatch::new().with_position(position))
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&BoardItem<K>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Look up a card that must exist
    ///
    /// # Errors
    /// - `BoardError::UnknownReference` if no card has this id
    pub fn require_item(&self, id: &ItemId) -> Result<&BoardItem<K>, BoardError> {
        self.get(id)
            .ok_or_else(|| BoardError::UnknownReference(id.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.index_of(id).is_some()
    }

    /// Cards in insertion order
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[BoardItem<K>] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.items.iter().map(BoardItem::id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Card count per kind, in add-menu order, zero-filled
    #[must_use]
    pub fn counts_by_kind(&self) -> IndexMap<K, usize> {
        let mut counts: IndexMap<K, usize> = K::ALL.iter().map(|kind| (*kind, 0)).collect();
        for item in &self.items {
            *counts.entry(item.kind()).or_insert(0) += 1;
        }
        counts
    }

    fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl<K: ItemKind> Default for Board<K> {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::CanvasKind;
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn add_note_to_empty_board() {
        let mut board = Board::<CanvasKind>::new(Bounds::CANVAS);
        let id = board.add_item(CanvasKind::Note, &mut rng());

        assert_eq!(board.len(), 1);
        let item = &board.list()[0];
        assert_eq!(item.id(), &id);
        assert_eq!(item.kind(), CanvasKind::Note);
        assert!(Bounds::CANVAS.contains(item.position()));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut board = Board::<CanvasKind>::default();
        board.add_item(CanvasKind::Task, &mut rng());
        let before: Vec<ItemId> = board.ids().cloned().collect();

        assert!(board.remove_item(&ItemId::from("missing")).is_none());

        let after: Vec<ItemId> = board.ids().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn removal_preserves_survivor_order() {
        let mut rng = rng();
        let mut board = Board::<CanvasKind>::default();
        let a = board.add_item(CanvasKind::Task, &mut rng);
        let b = board.add_item(CanvasKind::Note, &mut rng);
        let c = board.add_item(CanvasKind::Log, &mut rng);

        let removed = board.remove_item(&b).unwrap();
        assert_eq!(removed.id(), &b);

        let ids: Vec<&ItemId> = board.ids().collect();
        assert_eq!(ids, vec![&a, &c]);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut board = Board::<CanvasKind>::default();
        let item = BoardItem::with_defaults("1", CanvasKind::Task, Position::new(100.0, 100.0));
        board.insert_item(item.clone()).unwrap();

        let err = board.insert_item(item).unwrap_err();
        assert_eq!(err, BoardError::DuplicateItemId("1".to_string()));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn update_unknown_id_reports_false() {
        let mut board = Board::<CanvasKind>::default();
        assert!(!board.update_item(&ItemId::from("x"), ItemPatch::new().with_title("t")));
        assert!(!board.move_item(&ItemId::from("x"), Position::new(1.0, 1.0)));
    }

    #[test]
    fn move_item_changes_only_position() {
        let mut board = Board::<CanvasKind>::default();
        let id = board.add_item(CanvasKind::Inspiration, &mut rng());
        let title = board.get(&id).unwrap().title().to_string();

        assert!(board.move_item(&id, Position::new(7.0, 8.0)));

        let item = board.require_item(&id).unwrap();
        assert_eq!(item.position(), Position::new(7.0, 8.0));
        assert_eq!(item.title(), title);
    }

    #[test]
    fn require_unknown_item_fails() {
        let board = Board::<CanvasKind>::default();
        assert!(matches!(
            board.require_item(&ItemId::from("nope")),
            Err(BoardError::UnknownReference(_))
        ));
    }

    #[test]
    fn counts_by_kind_zero_fills() {
        let mut rng = rng();
        let mut board = Board::<CanvasKind>::default();
        board.add_item(CanvasKind::Note, &mut rng);
        board.add_item(CanvasKind::Note, &mut rng);

        let counts = board.counts_by_kind();
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[&CanvasKind::Note], 2);
        assert_eq!(counts[&CanvasKind::Task], 0);
    }
}
