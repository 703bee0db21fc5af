use cardtrack_runtime::{HistoryRegion, PanelContent};
use serde::Serialize;
use std::fmt;

use crate::presentation::views::{BadgeListView, CardPanelView};

#[derive(Debug, Serialize)]
pub struct BadgeListViewModel {
    pub board_id: String,
    pub card_id: String,
    pub list_id: String,
    pub badges: Vec<BadgeViewModel>,
    /// Only the placeholder badge is shown
    pub fallback: bool,
}

#[derive(Debug, Serialize)]
pub struct BadgeViewModel {
    pub text: String,
    /// CSS color as stored in the board settings
    pub color: String,
}

impl fmt::Display for BadgeListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BadgeListView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct CardPanelViewModel {
    pub card_id: String,
    pub content: PanelContent,
    pub history: HistoryRegion,
}

impl fmt::Display for CardPanelViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CardPanelView::new(self))
    }
}
