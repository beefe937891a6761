//! Flowbox Board Model
//!
//! In-memory state behind every Flowbox workspace page.
//!
//! # Core Concepts
//!
//! - [`Board<K>`]: insertion-ordered collection of canvas cards of kind `K`
//! - [`KanbanBoard<S>`]: tasks partitioned over the fixed status columns of `S`
//! - [`Roster`]: static members a task can be assigned to
//! - [`Timeline`]: milestone batch produced by timeline generation
//! - [`Bounds`]: placement region new cards are dropped into
//!
//! # Example
//!
//! ```rust,ignore
//! use flowbox_board::{Board, Bounds, CanvasKind};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut board = Board::new(Bounds::CANVAS);
//! let id = board.add_item(CanvasKind::Note, &mut rng);
//! assert_eq!(board.list()[0].id(), &id);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod board;
mod error;
mod id;
mod item;
mod kanban;
mod member;
mod position;
mod timeline;

pub use board::Board;
pub use error::BoardError;
pub use id::{ItemId, MemberId, MilestoneId, TaskId};
pub use item::{BoardItem, CanvasKind, ItemKind, ItemPatch, PodKind, StudyKind, TeamKind};
pub use kanban::{KanbanBoard, PodStatus, Task, TaskStatus, TeamStatus};
pub use member::{Member, Roster, UNASSIGNED};
pub use position::{Bounds, Position};
pub use timeline::{Milestone, MilestoneStatus, Timeline};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn board_and_kanban_lifecycle() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = Board::<TeamKind>::new(Bounds::COMPACT);
        let card = board.add_item(TeamKind::Task, &mut rng);

        let mut kanban = KanbanBoard::<TeamStatus>::new();
        let due = NaiveDate::from_ymd_opt(2025, 10, 8).unwrap();
        let task = kanban.add_task("Build project landing page", due, None);
        assert!(kanban.set_status(&task, TeamStatus::Done));

        assert_eq!(board.len(), 1);
        assert!(board.contains(&card));
        assert_eq!(kanban.completion_percent(), 100);
    }
}
