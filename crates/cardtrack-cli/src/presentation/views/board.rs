use std::fmt;

use crate::presentation::formatters::Table;
use crate::presentation::view_models::{BoardListsViewModel, ExportViewModel, TrackedCardsViewModel};

// --------------------------------------------------------
// Board Lists View
// --------------------------------------------------------

pub struct BoardListsView<'a> {
    data: &'a BoardListsViewModel,
}

impl<'a> BoardListsView<'a> {
    pub fn new(data: &'a BoardListsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for BoardListsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.lists.is_empty() {
            return writeln!(f, "Board {} has no lists.", self.data.board_id);
        }

        let mut table = Table::new(["Id", "Name"]);
        for list in &self.data.lists {
            table.row([list.id.as_str(), list.name.as_str()]);
        }
        write!(f, "{}", table)
    }
}

// --------------------------------------------------------
// Tracked Cards View
// --------------------------------------------------------

pub struct TrackedCardsView<'a> {
    data: &'a TrackedCardsViewModel,
}

impl<'a> TrackedCardsView<'a> {
    pub fn new(data: &'a TrackedCardsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for TrackedCardsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.cards.is_empty() {
            return writeln!(f, "No tracked cards.");
        }

        let mut table = Table::new(["Id", "Card", "Created"]);
        for card in &self.data.cards {
            let created = card
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "(unknown)".to_string());
            table.row([card.id.to_string(), card.card_id.clone(), created]);
        }
        write!(f, "{}", table)
    }
}

// --------------------------------------------------------
// Export View
// --------------------------------------------------------

pub struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> ExportView<'a> {
    pub fn new(data: &'a ExportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} export of card {} to {} ({} bytes)",
            self.data.format,
            self.data.card_id,
            self.data.path.display(),
            self.data.bytes
        )
    }
}
