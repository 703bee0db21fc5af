use super::{KeyValueStore, ListSelection, Scope, SettingsStore};
use crate::Result;
use cardtrack_types::BoardId;
use serde::Serialize;

/// The badge kinds a board can enable, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    CurrentList,
    TotalTime,
    SpecificLists,
    PersonalTime,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 4] = [
        BadgeKind::CurrentList,
        BadgeKind::TotalTime,
        BadgeKind::SpecificLists,
        BadgeKind::PersonalTime,
    ];

    pub fn flag_key(&self) -> &'static str {
        match self {
            BadgeKind::CurrentList => "show-current-list-time",
            BadgeKind::TotalTime => "show-total-time",
            BadgeKind::SpecificLists => "show-specific-lists-time",
            BadgeKind::PersonalTime => "show-personal-time",
        }
    }

    pub fn color_key(&self) -> &'static str {
        match self {
            BadgeKind::CurrentList => "current-list-color",
            BadgeKind::TotalTime => "total-time-color",
            BadgeKind::SpecificLists => "specific-lists-color",
            BadgeKind::PersonalTime => "personal-time-color",
        }
    }

    pub fn default_color(&self) -> &'static str {
        match self {
            BadgeKind::CurrentList => "#0079bf",
            BadgeKind::TotalTime => "#61bd4f",
            BadgeKind::SpecificLists => "#ff9f43",
            BadgeKind::PersonalTime => "#eb5a46",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BadgeKind::CurrentList => "Show time in current list",
            BadgeKind::TotalTime => "Show total time",
            BadgeKind::SpecificLists => "Show time in specific lists",
            BadgeKind::PersonalTime => "Show time only for me",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeColors {
    pub current_list: String,
    pub total_time: String,
    pub specific_lists: String,
    pub personal_time: String,
}

impl Default for BadgeColors {
    fn default() -> Self {
        Self {
            current_list: BadgeKind::CurrentList.default_color().to_string(),
            total_time: BadgeKind::TotalTime.default_color().to_string(),
            specific_lists: BadgeKind::SpecificLists.default_color().to_string(),
            personal_time: BadgeKind::PersonalTime.default_color().to_string(),
        }
    }
}

impl BadgeColors {
    pub fn get(&self, kind: BadgeKind) -> &str {
        match kind {
            BadgeKind::CurrentList => &self.current_list,
            BadgeKind::TotalTime => &self.total_time,
            BadgeKind::SpecificLists => &self.specific_lists,
            BadgeKind::PersonalTime => &self.personal_time,
        }
    }

    pub fn set(&mut self, kind: BadgeKind, color: impl Into<String>) {
        let slot = match kind {
            BadgeKind::CurrentList => &mut self.current_list,
            BadgeKind::TotalTime => &mut self.total_time,
            BadgeKind::SpecificLists => &mut self.specific_lists,
            BadgeKind::PersonalTime => &mut self.personal_time,
        };
        *slot = color.into();
    }
}

/// Badge settings of one board. Unset values take their defaults: every
/// badge off, the default palette, no selected lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardSettings {
    pub show_current_list_time: bool,
    pub show_total_time: bool,
    pub show_specific_lists_time: bool,
    pub show_personal_time: bool,
    pub colors: BadgeColors,
    pub selected_lists: ListSelection,
}

impl BoardSettings {
    pub fn load<S: KeyValueStore>(store: &SettingsStore<S>, board: &BoardId) -> Self {
        let scope = Scope::Board(board.clone());
        let mut settings = BoardSettings::default();

        for kind in BadgeKind::ALL {
            let enabled = store.flag(&scope, kind.flag_key()).unwrap_or(false);
            settings.set_enabled(kind, enabled);
            let color = store.color_or(&scope, kind.color_key(), kind.default_color());
            settings.colors.set(kind, color);
        }
        settings.selected_lists = store.selected_lists(&scope);

        settings
    }

    /// Write every field, the way the settings panel's save button does.
    pub fn save<S: KeyValueStore>(&self, store: &SettingsStore<S>, board: &BoardId) -> Result<()> {
        let scope = Scope::Board(board.clone());
        for kind in BadgeKind::ALL {
            store.set_flag(&scope, kind.flag_key(), self.is_enabled(kind))?;
            store.set(&scope, kind.color_key(), self.colors.get(kind))?;
        }
        store.set_selected_lists(&scope, self.selected_lists.iter().cloned())
    }

    pub fn is_enabled(&self, kind: BadgeKind) -> bool {
        match kind {
            BadgeKind::CurrentList => self.show_current_list_time,
            BadgeKind::TotalTime => self.show_total_time,
            BadgeKind::SpecificLists => self.show_specific_lists_time,
            BadgeKind::PersonalTime => self.show_personal_time,
        }
    }

    pub fn set_enabled(&mut self, kind: BadgeKind, enabled: bool) {
        let slot = match kind {
            BadgeKind::CurrentList => &mut self.show_current_list_time,
            BadgeKind::TotalTime => &mut self.show_total_time,
            BadgeKind::SpecificLists => &mut self.show_specific_lists_time,
            BadgeKind::PersonalTime => &mut self.show_personal_time,
        };
        *slot = enabled;
    }

    /// True when some enabled badge needs the card's list name.
    pub fn needs_list_names(&self) -> bool {
        self.show_current_list_time || self.show_specific_lists_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use cardtrack_types::ListId;

    #[test]
    fn test_unset_board_uses_defaults() {
        let store = SettingsStore::new(MemoryStore::new());
        let settings = BoardSettings::load(&store, &BoardId::new("b1"));
        assert_eq!(settings, BoardSettings::default());
        assert_eq!(settings.colors.total_time, "#61bd4f");
    }

    #[test]
    fn test_save_then_load() -> Result<()> {
        let store = SettingsStore::new(MemoryStore::new());
        let board = BoardId::new("b1");

        let mut settings = BoardSettings::default();
        settings.set_enabled(BadgeKind::TotalTime, true);
        settings.colors.set(BadgeKind::TotalTime, "rgb(1, 2, 3)");
        settings.selected_lists = [ListId::new("l1")].into_iter().collect();
        settings.save(&store, &board)?;

        assert_eq!(
            store.backend().get_item("b1_show-total-time").as_deref(),
            Some("true")
        );
        assert_eq!(
            store.backend().get_item("b1_show-current-list-time").as_deref(),
            Some("false")
        );
        assert_eq!(BoardSettings::load(&store, &board), settings);
        Ok(())
    }

    #[test]
    fn test_non_literal_true_is_off() -> Result<()> {
        let store = SettingsStore::new(MemoryStore::new());
        let scope = Scope::board("b1");
        store.set(&scope, "show-total-time", "TRUE")?;
        store.set(&scope, "show-current-list-time", "1")?;

        let settings = BoardSettings::load(&store, &BoardId::new("b1"));
        assert!(!settings.show_total_time);
        assert!(!settings.show_current_list_time);
        Ok(())
    }
}
