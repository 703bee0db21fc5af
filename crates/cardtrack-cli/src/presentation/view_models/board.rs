use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::presentation::views::{BoardListsView, ExportView, TrackedCardsView};

#[derive(Debug, Serialize)]
pub struct BoardListsViewModel {
    pub board_id: String,
    pub lists: Vec<BoardListEntry>,
}

#[derive(Debug, Serialize)]
pub struct BoardListEntry {
    pub id: String,
    pub name: String,
}

impl fmt::Display for BoardListsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BoardListsView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct TrackedCardsViewModel {
    pub created_after: Option<String>,
    pub card_id_contains: Option<String>,
    pub cards: Vec<TrackedCardViewModel>,
}

#[derive(Debug, Serialize)]
pub struct TrackedCardViewModel {
    pub id: i64,
    pub card_id: String,
    pub created_at: Option<NaiveDateTime>,
}

impl fmt::Display for TrackedCardsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TrackedCardsView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub card_id: String,
    pub format: String,
    pub path: PathBuf,
    pub bytes: usize,
}

impl fmt::Display for ExportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ExportView::new(self))
    }
}
