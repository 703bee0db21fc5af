use cardtrack_runtime::{BadgeRequest, CardPanel, HistoryRegion, PanelContent};
use cardtrack_types::Badge;

use crate::presentation::view_models::{
    BadgeListViewModel, BadgeViewModel, CardPanelViewModel, CommandResultViewModel, Guidance,
    StatusBadge,
};

pub fn present_badges(
    request: &BadgeRequest,
    badges: Vec<Badge>,
) -> CommandResultViewModel<BadgeListViewModel> {
    let fallback = badges.iter().all(Badge::is_fallback);

    let content = BadgeListViewModel {
        board_id: request.board.to_string(),
        card_id: request.card.to_string(),
        list_id: request.list.to_string(),
        badges: badges
            .into_iter()
            .map(|badge| BadgeViewModel {
                text: badge.text,
                color: badge.color,
            })
            .collect(),
        fallback,
    };

    let mut result = CommandResultViewModel::new(content);
    if fallback {
        result = result.with_suggestion(
            Guidance::new("No badge applies; enable one for this board").with_command(format!(
                "cardtrack settings set --board {} show-total-time true",
                request.board
            )),
        );
    }
    result
}

pub fn present_card_panel(panel: CardPanel) -> CommandResultViewModel<CardPanelViewModel> {
    let badge = match (&panel.content, &panel.history) {
        (PanelContent::Failed(_), _) => Some(StatusBadge::error("Card metrics unavailable")),
        (_, HistoryRegion::Failed(_)) => Some(StatusBadge::warning("History unavailable")),
        _ => None,
    };

    let content = CardPanelViewModel {
        card_id: panel.card.to_string(),
        content: panel.content,
        history: panel.history,
    };

    let mut result = CommandResultViewModel::new(content);
    if let Some(badge) = badge {
        result = result.with_badge(badge);
    }
    result
}
