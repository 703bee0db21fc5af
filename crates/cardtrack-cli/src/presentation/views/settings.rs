use std::fmt;

use crate::presentation::formatters::Table;
use crate::presentation::view_models::{
    BadgeSettingViewModel, BoardSettingsViewModel, FrameHeightViewModel, ListSelectionViewModel,
    SettingValueViewModel, SettingsFormViewModel,
};

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn badge_table(badges: &[BadgeSettingViewModel]) -> Table {
    let mut table = Table::new(["Badge", "Key", "State", "Color"]).indent(2);
    for badge in badges {
        table.row([
            badge.label,
            badge.key,
            on_off(badge.enabled),
            badge.color.as_str(),
        ]);
    }
    table
}

// --------------------------------------------------------
// Board Settings View
// --------------------------------------------------------

pub struct BoardSettingsView<'a> {
    data: &'a BoardSettingsViewModel,
}

impl<'a> BoardSettingsView<'a> {
    pub fn new(data: &'a BoardSettingsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for BoardSettingsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Board {} badges:", self.data.board_id)?;
        write!(f, "{}", badge_table(&self.data.badges))?;

        writeln!(f)?;
        if self.data.selected_lists.is_empty() {
            writeln!(f, "Selected lists: (none)")?;
        } else {
            writeln!(f, "Selected lists: {}", self.data.selected_lists.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "Panel sections (global):")?;
        for toggle in &self.data.panel {
            writeln!(f, "  {:<24} {}", toggle.key, on_off(toggle.enabled))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Setting Value View
// --------------------------------------------------------

pub struct SettingValueView<'a> {
    data: &'a SettingValueViewModel,
}

impl<'a> SettingValueView<'a> {
    pub fn new(data: &'a SettingValueViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SettingValueView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.value {
            Some(value) => writeln!(f, "{} = {}", self.data.key, value),
            None => writeln!(f, "{} is not set", self.data.key),
        }
    }
}

// --------------------------------------------------------
// List Selection View
// --------------------------------------------------------

pub struct ListSelectionView<'a> {
    data: &'a ListSelectionViewModel,
}

impl<'a> ListSelectionView<'a> {
    pub fn new(data: &'a ListSelectionViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ListSelectionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.selected_lists.is_empty() {
            return writeln!(f, "No lists selected on board {}.", self.data.board_id);
        }
        for list in &self.data.selected_lists {
            writeln!(f, "{}", list)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Settings Form View
// --------------------------------------------------------

pub struct SettingsFormView<'a> {
    data: &'a SettingsFormViewModel,
}

impl<'a> SettingsFormView<'a> {
    pub fn new(data: &'a SettingsFormViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SettingsFormView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Board {} badges:", self.data.board_id)?;
        write!(f, "{}", badge_table(&self.data.badges))?;

        writeln!(f)?;
        writeln!(f, "Lists:")?;
        if let Some(error) = &self.data.lists_error {
            return writeln!(f, "  Error loading lists: {}", error);
        }
        if self.data.lists.is_empty() {
            return writeln!(f, "  (none)");
        }
        for list in &self.data.lists {
            let mark = if list.selected { "x" } else { " " };
            writeln!(f, "  [{}] {} ({})", mark, list.name, list.id)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Frame Height View
// --------------------------------------------------------

pub struct FrameHeightView<'a> {
    data: &'a FrameHeightViewModel,
}

impl<'a> FrameHeightView<'a> {
    pub fn new(data: &'a FrameHeightViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for FrameHeightView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} frame height: {}px", self.data.frame, self.data.height)
    }
}
