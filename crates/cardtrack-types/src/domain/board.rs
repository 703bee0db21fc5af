use serde::{Deserialize, Serialize};

use super::{ListId, MemberId};

/// A list on a board, as returned by `GET /api/board/{board_id}/lists`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: ListId,
    pub name: String,
}

/// Find the display name for a list id.
pub fn list_name<'a>(lists: &'a [BoardList], id: &ListId) -> Option<&'a str> {
    lists
        .iter()
        .find(|list| &list.id == id)
        .map(|list| list.name.as_str())
}

/// The member viewing the card, used for the personal-time badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: MemberId,
    #[serde(default)]
    pub name: Option<String>,
}

impl Viewer {
    pub fn new(id: impl Into<MemberId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
