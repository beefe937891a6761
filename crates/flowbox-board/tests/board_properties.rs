use chrono::NaiveDate;
use flowbox_board::{
    Board, Bounds, CanvasKind, ItemId, ItemKind, ItemPatch, KanbanBoard, PodStatus, TaskStatus,
    TeamStatus,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug, Clone)]
enum BoardOp {
    Add(CanvasKind),
    /// Remove the n-th live item (modulo length), or an unknown id if empty
    Remove(usize),
    RemoveUnknown,
    Retitle(usize),
}

fn canvas_kind() -> impl Strategy<Value = CanvasKind> {
    prop::sample::select(CanvasKind::ALL.to_vec())
}

fn board_op() -> impl Strategy<Value = BoardOp> {
    prop_oneof![
        3 => canvas_kind().prop_map(BoardOp::Add),
        2 => any::<usize>().prop_map(BoardOp::Remove),
        1 => Just(BoardOp::RemoveUnknown),
        1 => any::<usize>().prop_map(BoardOp::Retitle),
    ]
}

fn team_status() -> impl Strategy<Value = TeamStatus> {
    prop::sample::select(TeamStatus::COLUMNS.to_vec())
}

#[test]
fn test_add_then_remove_everything() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut board = Board::new(Bounds::CANVAS);
    let ids: Vec<ItemId> = CanvasKind::ALL
        .iter()
        .map(|kind| board.add_item(*kind, &mut rng))
        .collect();

    for id in &ids {
        assert!(board.remove_item(id).is_some());
    }
    assert!(board.is_empty());
    for id in &ids {
        assert!(board.remove_item(id).is_none());
    }
}

#[test]
fn test_pod_columns_sum_after_moves() {
    let mut board = KanbanBoard::<PodStatus>::new();
    let due = NaiveDate::from_ymd_opt(2025, 10, 9).unwrap();
    let a = board.add_task("Complete Python Day 01", due, None);
    let b = board.add_task("Study slides summary", due, None);

    board.set_status(&a, PodStatus::Done);
    board.set_status(&b, PodStatus::InProgress);
    board.set_status(&a, PodStatus::Pending);

    let counts = board.column_counts();
    assert_eq!(counts.values().sum::<usize>(), 2);
    assert_eq!(counts[&PodStatus::Pending], 1);
    assert_eq!(counts[&PodStatus::InProgress], 1);
}

proptest! {
    #[test]
    fn prop_survivors_match_model_in_insertion_order(
        seed in any::<u64>(),
        ops in prop::collection::vec(board_op(), 0..60),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(Bounds::CANVAS);
        let mut model: Vec<ItemId> = Vec::new();

        for op in ops {
            match op {
                BoardOp::Add(kind) => {
                    let id = board.add_item(kind, &mut rng);
                    prop_assert!(!model.contains(&id));
                    model.push(id);
                }
                BoardOp::Remove(n) => {
                    if model.is_empty() {
                        prop_assert!(board.remove_item(&ItemId::from("absent")).is_none());
                    } else {
                        let id = model.remove(n % model.len());
                        prop_assert!(board.remove_item(&id).is_some());
                    }
                }
                BoardOp::RemoveUnknown => {
                    prop_assert!(board.remove_item(&ItemId::generate()).is_none());
                }
                BoardOp::Retitle(n) => {
                    if !model.is_empty() {
                        let id = &model[n % model.len()];
                        prop_assert!(board.update_item(id, ItemPatch::new().with_title("renamed")));
                    }
                }
            }

            let live: Vec<ItemId> = board.ids().cloned().collect();
            prop_assert_eq!(&live, &model);
        }
    }

    #[test]
    fn prop_added_items_land_inside_bounds(
        seed in any::<u64>(),
        kinds in prop::collection::vec(canvas_kind(), 1..30),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(Bounds::COMPACT);
        for kind in kinds {
            board.add_item(kind, &mut rng);
        }
        for item in board.list() {
            prop_assert!(Bounds::COMPACT.contains(item.position()));
        }
    }

    #[test]
    fn prop_column_counts_sum_to_task_count(
        task_count in 0usize..12,
        moves in prop::collection::vec((any::<usize>(), team_status()), 0..40),
    ) {
        let mut board = KanbanBoard::<TeamStatus>::new();
        let due = NaiveDate::from_ymd_opt(2025, 10, 15).unwrap();
        let ids: Vec<_> = (0..task_count)
            .map(|n| board.add_task(format!("task {n}"), due, None))
            .collect();

        for (pick, status) in moves {
            if !ids.is_empty() {
                let id = &ids[pick % ids.len()];
                prop_assert!(board.set_status(id, status));
                prop_assert_eq!(board.get(id).unwrap().status(), status);
            }
            let counts = board.column_counts();
            prop_assert_eq!(counts.len(), TeamStatus::COLUMNS.len());
            prop_assert_eq!(counts.values().sum::<usize>(), board.len());
        }
    }
}
