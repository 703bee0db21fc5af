use super::{KeyValueStore, Scope, SettingsStore};
use crate::Result;
use serde::Serialize;

/// Toggleable sections of the metrics panel. These live in the global scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSection {
    TimePerList,
    TimePerMember,
    TotalTime,
    ListCounts,
    MoveCounts,
    History,
    DetailedHistory,
}

impl PanelSection {
    pub const ALL: [PanelSection; 7] = [
        PanelSection::TimePerList,
        PanelSection::TimePerMember,
        PanelSection::TotalTime,
        PanelSection::ListCounts,
        PanelSection::MoveCounts,
        PanelSection::History,
        PanelSection::DetailedHistory,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PanelSection::TimePerList => "show-time-per-list",
            PanelSection::TimePerMember => "show-time-per-member",
            PanelSection::TotalTime => "show-total-time",
            PanelSection::ListCounts => "show-list-counts",
            PanelSection::MoveCounts => "show-move-counts",
            PanelSection::History => "show-history",
            PanelSection::DetailedHistory => "show-detailed-history",
        }
    }

    /// Metric sections start on. The history tables cost an extra request
    /// each and start off.
    pub fn default_enabled(&self) -> bool {
        !matches!(self, PanelSection::History | PanelSection::DetailedHistory)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSettings {
    pub show_time_per_list: bool,
    pub show_time_per_member: bool,
    pub show_total_time: bool,
    pub show_list_counts: bool,
    pub show_move_counts: bool,
    pub show_history: bool,
    pub show_detailed_history: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        let mut settings = Self {
            show_time_per_list: false,
            show_time_per_member: false,
            show_total_time: false,
            show_list_counts: false,
            show_move_counts: false,
            show_history: false,
            show_detailed_history: false,
        };
        for section in PanelSection::ALL {
            settings.set_enabled(section, section.default_enabled());
        }
        settings
    }
}

impl PanelSettings {
    pub fn load<S: KeyValueStore>(store: &SettingsStore<S>) -> Self {
        let mut settings = Self::default();
        for section in PanelSection::ALL {
            if let Some(enabled) = store.flag(&Scope::Global, section.key()) {
                settings.set_enabled(section, enabled);
            }
        }
        settings
    }

    /// Persist one toggle, the way a checkbox change does.
    pub fn toggle<S: KeyValueStore>(
        store: &SettingsStore<S>,
        section: PanelSection,
        enabled: bool,
    ) -> Result<()> {
        store.set_flag(&Scope::Global, section.key(), enabled)
    }

    pub fn is_enabled(&self, section: PanelSection) -> bool {
        match section {
            PanelSection::TimePerList => self.show_time_per_list,
            PanelSection::TimePerMember => self.show_time_per_member,
            PanelSection::TotalTime => self.show_total_time,
            PanelSection::ListCounts => self.show_list_counts,
            PanelSection::MoveCounts => self.show_move_counts,
            PanelSection::History => self.show_history,
            PanelSection::DetailedHistory => self.show_detailed_history,
        }
    }

    pub fn set_enabled(&mut self, section: PanelSection, enabled: bool) {
        let slot = match section {
            PanelSection::TimePerList => &mut self.show_time_per_list,
            PanelSection::TimePerMember => &mut self.show_time_per_member,
            PanelSection::TotalTime => &mut self.show_total_time,
            PanelSection::ListCounts => &mut self.show_list_counts,
            PanelSection::MoveCounts => &mut self.show_move_counts,
            PanelSection::History => &mut self.show_history,
            PanelSection::DetailedHistory => &mut self.show_detailed_history,
        };
        *slot = enabled;
    }

    pub fn with(mut self, section: PanelSection, enabled: bool) -> Self {
        self.set_enabled(section, enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_defaults_skip_history_tables() {
        let settings = PanelSettings::default();
        assert!(settings.show_total_time);
        assert!(settings.show_move_counts);
        assert!(!settings.show_history);
        assert!(!settings.show_detailed_history);
    }

    #[test]
    fn test_toggle_is_global_and_isolated_from_boards() -> Result<()> {
        let store = SettingsStore::new(MemoryStore::new());
        store.set_flag(&Scope::board("b1"), "show-total-time", false)?;
        PanelSettings::toggle(&store, PanelSection::History, true)?;

        let settings = PanelSettings::load(&store);
        assert!(settings.show_history);
        assert!(settings.show_total_time);
        Ok(())
    }
}
