use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{CardId, ListId, Viewer};

/// Where a card currently sits, with the list name resolved when the board
/// lists could be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlacement {
    pub card_id: CardId,
    pub list_id: ListId,
    #[serde(default)]
    pub list_name: Option<String>,
    #[serde(default)]
    pub viewer: Option<Viewer>,
}

impl CardPlacement {
    pub fn new(card_id: impl Into<CardId>, list_id: impl Into<ListId>) -> Self {
        Self {
            card_id: card_id.into(),
            list_id: list_id.into(),
            list_name: None,
            viewer: None,
        }
    }

    pub fn with_list_name(mut self, name: impl Into<String>) -> Self {
        self.list_name = Some(name.into());
        self
    }

    pub fn with_viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = Some(viewer);
        self
    }
}

/// A card registered in the backend (`GET /api/cards`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedCard {
    pub id: i64,
    pub trello_card_id: CardId,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Query filter for `GET /api/cards`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    /// Only cards created on or after this day (`YYYY-MM-DD`)
    pub created_after: Option<chrono::NaiveDate>,
    /// Substring match on the host card id
    pub card_id_contains: Option<String>,
}

impl CardFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_after(mut self, date: chrono::NaiveDate) -> Self {
        self.created_after = Some(date);
        self
    }

    pub fn card_id_contains(mut self, fragment: impl Into<String>) -> Self {
        self.card_id_contains = Some(fragment.into());
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = self.created_after {
            pairs.push(("created_after", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(fragment) = &self.card_id_contains {
            pairs.push(("trello_card_id", fragment.clone()));
        }
        pairs
    }
}
