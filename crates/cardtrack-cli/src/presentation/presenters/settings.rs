use cardtrack_core::{
    BadgeKind, BoardSettings, Frame, MAX_FRAME_HEIGHT, MIN_FRAME_HEIGHT, PanelSection,
    PanelSettings, Scope,
};
use cardtrack_runtime::{SAVED_MESSAGE, SettingsForm};
use cardtrack_types::BoardId;

use crate::presentation::view_models::{
    BadgeSettingViewModel, BoardSettingsViewModel, CommandResultViewModel, FrameHeightViewModel,
    Guidance, ListOptionViewModel, ListSelectionViewModel, PanelToggleViewModel,
    SettingValueViewModel, SettingsFormViewModel, StatusBadge,
};

fn badge_settings(settings: &BoardSettings) -> Vec<BadgeSettingViewModel> {
    BadgeKind::ALL
        .into_iter()
        .map(|kind| BadgeSettingViewModel {
            key: kind.flag_key(),
            label: kind.label(),
            enabled: settings.is_enabled(kind),
            color: settings.colors.get(kind).to_string(),
        })
        .collect()
}

pub fn present_board_settings(
    board: &BoardId,
    settings: &BoardSettings,
    panel: &PanelSettings,
) -> CommandResultViewModel<BoardSettingsViewModel> {
    let content = BoardSettingsViewModel {
        board_id: board.to_string(),
        badges: badge_settings(settings),
        selected_lists: settings
            .selected_lists
            .iter()
            .map(ToString::to_string)
            .collect(),
        panel: PanelSection::ALL
            .into_iter()
            .map(|section| PanelToggleViewModel {
                key: section.key(),
                enabled: panel.is_enabled(section),
            })
            .collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if settings.show_specific_lists_time && settings.selected_lists.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Specific-list badges are on but no list is selected")
                .with_command(format!("cardtrack settings lists --board {} <LIST_ID>...", board)),
        );
    }
    result
}

pub fn present_setting(
    scope: &Scope,
    key: String,
    value: Option<String>,
    stored: bool,
) -> CommandResultViewModel<SettingValueViewModel> {
    let content = SettingValueViewModel {
        scope: scope.to_string(),
        key,
        value,
    };

    let result = CommandResultViewModel::new(content);
    if stored {
        result.with_badge(StatusBadge::success(format!("Saved to {}", scope)))
    } else {
        result
    }
}

pub fn present_removed_setting(
    scope: &Scope,
    key: String,
) -> CommandResultViewModel<SettingValueViewModel> {
    let content = SettingValueViewModel {
        scope: scope.to_string(),
        key,
        value: None,
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("Removed from {}", scope)))
}

pub fn present_list_selection(
    board: &BoardId,
    selected: Vec<String>,
    stored: bool,
) -> CommandResultViewModel<ListSelectionViewModel> {
    let content = ListSelectionViewModel {
        board_id: board.to_string(),
        selected_lists: selected,
    };

    let result = CommandResultViewModel::new(content);
    if stored {
        result.with_badge(StatusBadge::success("List selection saved"))
    } else {
        result
    }
}

/// How far a settings form invocation went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Unchanged,
    Previewed,
    Saved,
}

pub fn present_settings_form(
    form: SettingsForm,
    outcome: FormOutcome,
) -> CommandResultViewModel<SettingsFormViewModel> {
    let lists_failed = form.lists_error.is_some();
    let save_command = format!("cardtrack settings form --board {} ... --save", form.board);
    let content = SettingsFormViewModel {
        board_id: form.board.to_string(),
        badges: badge_settings(&form.settings),
        lists: form
            .lists
            .into_iter()
            .map(|option| ListOptionViewModel {
                id: option.list.id.to_string(),
                name: option.list.name,
                selected: option.selected,
            })
            .collect(),
        lists_error: form.lists_error,
    };

    let result = CommandResultViewModel::new(content);
    match (outcome, lists_failed) {
        (FormOutcome::Saved, false) => result.with_badge(StatusBadge::success(SAVED_MESSAGE)),
        (FormOutcome::Saved, true) => result.with_badge(StatusBadge::warning(
            "Saved, but board lists were unavailable so the list selection is unchanged",
        )),
        (_, true) => result.with_badge(StatusBadge::warning("Board lists unavailable")),
        (FormOutcome::Previewed, false) => result
            .with_badge(StatusBadge::info("Preview only, nothing stored"))
            .with_suggestion(Guidance::new("Store these edits").with_command(save_command)),
        (FormOutcome::Unchanged, false) => result,
    }
}

pub fn present_frame_height(
    frame: Frame,
    frame_name: String,
    start: u32,
    delta: i64,
    height: u32,
) -> CommandResultViewModel<FrameHeightViewModel> {
    let content = FrameHeightViewModel {
        frame: frame_name,
        key: frame.key(),
        start,
        delta,
        height,
        min: MIN_FRAME_HEIGHT,
        max: MAX_FRAME_HEIGHT,
    };

    CommandResultViewModel::new(content)
}
