use cardtrack_types::{BoardId, BoardList, CardFilter, CardId, ExportFormat, TrackedCard};
use std::path::PathBuf;

use crate::presentation::view_models::{
    BoardListEntry, BoardListsViewModel, CommandResultViewModel, ExportViewModel, Guidance,
    StatusBadge, TrackedCardViewModel, TrackedCardsViewModel,
};

pub fn present_board_lists(
    board: &BoardId,
    lists: Vec<BoardList>,
) -> CommandResultViewModel<BoardListsViewModel> {
    let content = BoardListsViewModel {
        board_id: board.to_string(),
        lists: lists
            .into_iter()
            .map(|list| BoardListEntry {
                id: list.id.to_string(),
                name: list.name,
            })
            .collect(),
    };

    CommandResultViewModel::new(content)
}

pub fn present_tracked_cards(
    filter: &CardFilter,
    cards: Vec<TrackedCard>,
) -> CommandResultViewModel<TrackedCardsViewModel> {
    let empty = cards.is_empty();
    let content = TrackedCardsViewModel {
        created_after: filter.created_after.map(|date| date.to_string()),
        card_id_contains: filter.card_id_contains.clone(),
        cards: cards
            .into_iter()
            .map(|card| TrackedCardViewModel {
                id: card.id,
                card_id: card.trello_card_id.to_string(),
                created_at: card.created_at,
            })
            .collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if empty && (filter.created_after.is_some() || filter.card_id_contains.is_some()) {
        result = result.with_suggestion(
            Guidance::new("Drop the filters to list every tracked card")
                .with_command("cardtrack cards"),
        );
    }
    result
}

pub fn present_export(
    card: &CardId,
    format: ExportFormat,
    path: PathBuf,
    bytes: usize,
) -> CommandResultViewModel<ExportViewModel> {
    let content = ExportViewModel {
        card_id: card.to_string(),
        format: format.to_string(),
        path,
        bytes,
    };

    CommandResultViewModel::new(content).with_badge(StatusBadge::success("Export saved"))
}
