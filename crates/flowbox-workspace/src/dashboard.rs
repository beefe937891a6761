//! Dashboard board catalog

use crate::seed::day;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: u8,
    pub due: NaiveDate,
    pub members: Vec<String>,
    pub tags: Vec<String>,
    pub last_updated: String,
    pub starred: bool,
}

impl BoardSummary {
    /// Case-insensitive substring match on title or description
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    boards: Vec<BoardSummary>,
}

impl Dashboard {
    #[must_use]
    pub fn new(boards: Vec<BoardSummary>) -> Self {
        Self { boards }
    }

    /// Catalog shown to guests and freshly onboarded users
    #[must_use]
    pub fn sample() -> Self {
        #[allow(clippy::too_many_arguments)]
        fn summary(
            id: &str,
            title: &str,
            description: &str,
            progress: u8,
            due: NaiveDate,
            members: &[&str],
            tags: &[&str],
            last_updated: &str,
            starred: bool,
        ) -> BoardSummary {
            BoardSummary {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                progress,
                due,
                members: members.iter().map(ToString::to_string).collect(),
                tags: tags.iter().map(ToString::to_string).collect(),
                last_updated: last_updated.to_string(),
                starred,
            }
        }

        Self::new(vec![
            summary(
                "1",
                "Mobile App Redesign",
                "Complete redesign of our mobile application with new user experience",
                75,
                day(2024, 2, 15),
                &["Alice Johnson", "Bob Smith", "Carol Davis"],
                &["Design", "Mobile", "UX"],
                "2 hours ago",
                true,
            ),
            summary(
                "2",
                "Marketing Campaign Q1",
                "Launch campaign for new product line targeting millennials",
                45,
                day(2024, 3, 1),
                &["David Wilson", "Eva Brown"],
                &["Marketing", "Campaign"],
                "1 day ago",
                false,
            ),
            summary(
                "3",
                "Website Performance Optimization",
                "Improve site speed and SEO rankings across all pages",
                90,
                day(2024, 1, 30),
                &["Frank Miller"],
                &["Development", "SEO", "Performance"],
                "3 hours ago",
                true,
            ),
        ])
    }

    #[must_use]
    pub fn boards(&self) -> &[BoardSummary] {
        &self.boards
    }

    /// Boards matching `query`; an empty query matches everything
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a BoardSummary> + 'a {
        self.boards.iter().filter(move |board| board.matches(query))
    }

    pub fn starred(&self) -> impl Iterator<Item = &BoardSummary> + '_ {
        self.boards.iter().filter(|board| board.starred)
    }

    /// Flip the star on a board; returns the new state
    pub fn toggle_star(&mut self, id: &str) -> Option<bool> {
        let board = self.boards.iter_mut().find(|board| board.id == id)?;
        board.starred = !board.starred;
        Some(board.starred)
    }
}
