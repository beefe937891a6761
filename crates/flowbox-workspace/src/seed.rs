//! Starter content each workspace page opens with

use chrono::NaiveDate;
use flowbox_board::{
    BoardItem, CanvasKind, Member, PodKind, PodStatus, Position, Roster, StudyKind, Task, TeamKind,
    TeamStatus,
};

pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub(crate) fn solo_items() -> Vec<BoardItem<CanvasKind>> {
    vec![
        BoardItem::new(
            "1",
            CanvasKind::Task,
            "Draft first project plan",
            "Create a comprehensive outline for the new project including timeline and resources needed.",
            Position::new(100.0, 100.0),
        ),
        BoardItem::new(
            "2",
            CanvasKind::Note,
            "Capture new ideas here",
            "Brainstorming session notes and random thoughts that could lead to breakthrough ideas.",
            Position::new(400.0, 150.0),
        ),
        BoardItem::new(
            "3",
            CanvasKind::Inspiration,
            "Add moodboard images, quotes",
            "Visual inspiration and motivational quotes to keep the creative energy flowing.",
            Position::new(200.0, 300.0),
        ),
        BoardItem::new(
            "4",
            CanvasKind::Log,
            "Reflect on progress each day",
            "Daily reflection on what was accomplished and what needs attention tomorrow.",
            Position::new(500.0, 250.0),
        ),
    ]
}

pub(crate) fn study_items() -> Vec<BoardItem<StudyKind>> {
    vec![
        BoardItem::new(
            "a1",
            StudyKind::Assignment,
            "Complete Python Day 01",
            "Loops and functions",
            Position::new(120.0, 120.0),
        ),
        BoardItem::new(
            "n1",
            StudyKind::Note,
            "Lecture notes: Introduction to OOP",
            "Encapsulation, Inheritance",
            Position::new(420.0, 160.0),
        ),
        BoardItem::new(
            "r1",
            StudyKind::Resource,
            "Link: YouTube tutorial on Git",
            "https://youtube.com",
            Position::new(220.0, 300.0),
        ),
        BoardItem::new(
            "l1",
            StudyKind::DailyLog,
            "Reflect on what I learned today",
            "Daily reflections",
            Position::new(520.0, 260.0),
        ),
    ]
}

pub(crate) fn team_items() -> Vec<BoardItem<TeamKind>> {
    vec![
        BoardItem::new(
            "c1",
            TeamKind::Task,
            "Build project landing page",
            "",
            Position::new(120.0, 120.0),
        ),
        BoardItem::new(
            "c2",
            TeamKind::Note,
            "Brainstorm features",
            "",
            Position::new(420.0, 160.0),
        ),
        BoardItem::new(
            "c3",
            TeamKind::Resource,
            "Link: Design mockups",
            "",
            Position::new(220.0, 320.0),
        ),
        BoardItem::new(
            "c4",
            TeamKind::DailyLog,
            "Daily standup notes",
            "",
            Position::new(520.0, 240.0),
        ),
    ]
}

pub(crate) fn team_roster() -> Roster {
    Roster::new(vec![
        Member::new("u1", "Sarah", "SR", "purple"),
        Member::new("u2", "John", "JN", "teal"),
        Member::new("u3", "Mia", "MA", "rose"),
    ])
}

pub(crate) fn team_tasks() -> Vec<Task<TeamStatus>> {
    vec![
        Task::new("t1", "Build project landing page", day(2025, 10, 8), TeamStatus::ToDo)
            .with_assignee("u1"),
        Task::new("t2", "Backend Setup", day(2025, 10, 15), TeamStatus::InProgress)
            .with_assignee("u2"),
        Task::new("t3", "Write shared docs", day(2025, 10, 12), TeamStatus::ToDo)
            .with_assignee("u3"),
        Task::new("t4", "Design mockups", day(2025, 10, 9), TeamStatus::Done).with_assignee("u1"),
    ]
}

pub(crate) fn pod_items() -> Vec<BoardItem<PodKind>> {
    vec![
        BoardItem::new(
            "c1",
            PodKind::Assignment,
            "Complete Python Day 01",
            "",
            Position::new(120.0, 120.0),
        ),
        BoardItem::new(
            "c2",
            PodKind::Note,
            "Group notes: Functions & Loops",
            "",
            Position::new(420.0, 160.0),
        ),
        BoardItem::new(
            "c3",
            PodKind::Resource,
            "Drive link: Study slides",
            "",
            Position::new(220.0, 320.0),
        ),
        BoardItem::new(
            "c4",
            PodKind::PodLog,
            "Group reflections for the week",
            "",
            Position::new(520.0, 240.0),
        ),
    ]
}

pub(crate) fn pod_roster() -> Roster {
    Roster::new(vec![
        Member::new("u1", "Alex", "AX", "orange"),
        Member::new("u2", "Jamie", "JM", "blue"),
        Member::new("u3", "Riley", "RY", "amber"),
    ])
}

pub(crate) fn pod_assignments() -> Vec<Task<PodStatus>> {
    vec![
        Task::new("a1", "Complete Python Day 01", day(2025, 10, 9), PodStatus::Pending)
            .with_assignee("u1"),
        Task::new(
            "a2",
            "Group notes: Functions & Loops",
            day(2025, 10, 10),
            PodStatus::InProgress,
        )
        .with_assignee("u2"),
        Task::new("a3", "Study slides summary", day(2025, 10, 12), PodStatus::Done)
            .with_assignee("u3"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let ids: HashSet<_> = solo_items().iter().map(|i| i.id().clone()).collect();
        assert_eq!(ids.len(), 4);
        let ids: HashSet<_> = team_tasks().iter().map(|t| t.id().clone()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn seed_assignees_resolve() {
        let roster = team_roster();
        for task in team_tasks() {
            assert_ne!(task.assignee_name(&roster), flowbox_board::UNASSIGNED);
        }
        let roster = pod_roster();
        for task in pod_assignments() {
            assert!(roster.get(task.assignee().unwrap()).is_some());
        }
    }
}
