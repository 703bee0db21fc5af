use serde::Serialize;
use std::fmt;

use crate::presentation::views::{
    BoardSettingsView, FrameHeightView, ListSelectionView, SettingValueView, SettingsFormView,
};

#[derive(Debug, Serialize)]
pub struct BadgeSettingViewModel {
    pub key: &'static str,
    pub label: &'static str,
    pub enabled: bool,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct PanelToggleViewModel {
    pub key: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct BoardSettingsViewModel {
    pub board_id: String,
    pub badges: Vec<BadgeSettingViewModel>,
    pub selected_lists: Vec<String>,
    pub panel: Vec<PanelToggleViewModel>,
}

impl fmt::Display for BoardSettingsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BoardSettingsView::new(self))
    }
}

/// One raw setting, after a read or a write
#[derive(Debug, Serialize)]
pub struct SettingValueViewModel {
    pub scope: String,
    pub key: String,
    pub value: Option<String>,
}

impl fmt::Display for SettingValueViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SettingValueView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct ListSelectionViewModel {
    pub board_id: String,
    pub selected_lists: Vec<String>,
}

impl fmt::Display for ListSelectionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ListSelectionView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct ListOptionViewModel {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct SettingsFormViewModel {
    pub board_id: String,
    pub badges: Vec<BadgeSettingViewModel>,
    pub lists: Vec<ListOptionViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists_error: Option<String>,
}

impl fmt::Display for SettingsFormViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SettingsFormView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct FrameHeightViewModel {
    pub frame: String,
    pub key: &'static str,
    pub start: u32,
    pub delta: i64,
    pub height: u32,
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for FrameHeightViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", FrameHeightView::new(self))
    }
}
