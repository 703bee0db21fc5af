// NOTE: Key namespacing
//
// Board-scoped settings are stored as `{board_id}_{name}`, global ones as
// plain `{name}`. The same setting name (e.g. `show-total-time`) exists in
// both scopes with different meanings: the board badge toggle and the
// panel section toggle. Callers always pass a `Scope`, so the two never
// share a key.

mod backend;
pub mod board;
pub mod frame;
pub mod panel;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use board::{BadgeColors, BadgeKind, BoardSettings};
pub use frame::{Frame, MAX_FRAME_HEIGHT, MIN_FRAME_HEIGHT};
pub use panel::{PanelSection, PanelSettings};

use crate::Result;
use cardtrack_types::{BoardId, ListId};
use serde::Serialize;
use std::fmt;

pub const SELECTED_LISTS_KEY: &str = "selected-lists";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Preferences shared by every board (panel toggles, frame heights)
    Global,
    /// Badge and display settings of one board
    Board(BoardId),
}

impl Scope {
    pub fn board(id: impl Into<BoardId>) -> Self {
        Scope::Board(id.into())
    }

    /// The storage key for a setting name in this scope.
    pub fn key(&self, name: &str) -> String {
        match self {
            Scope::Global => name.to_string(),
            Scope::Board(board) => format!("{}_{}", board, name),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Board(board) => write!(f, "board:{}", board),
        }
    }
}

/// Selected list ids in selection order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListSelection(Vec<ListId>);

impl ListSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ListId) -> bool {
        self.0.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ListId> {
        self.0.iter()
    }

    fn insert(&mut self, id: ListId) {
        if !self.0.contains(&id) {
            self.0.push(id);
        }
    }
}

impl FromIterator<ListId> for ListSelection {
    fn from_iter<I: IntoIterator<Item = ListId>>(iter: I) -> Self {
        let mut selection = ListSelection::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}

/// Scoped settings over any [`KeyValueStore`].
///
/// Values are strings. Booleans are `"true"`/`"false"`, colors are CSS color
/// strings, and the list selection is a JSON array of ids.
#[derive(Debug)]
pub struct SettingsStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn get(&self, scope: &Scope, name: &str) -> Option<String> {
        self.backend.get_item(&scope.key(name))
    }

    pub fn set(&self, scope: &Scope, name: &str, value: &str) -> Result<()> {
        tracing::debug!(%scope, name, value, "storing setting");
        self.backend.set_item(&scope.key(name), value)
    }

    pub fn remove(&self, scope: &Scope, name: &str) -> Result<()> {
        self.backend.remove_item(&scope.key(name))
    }

    /// `Some(true)` only for the literal `"true"`; `None` when unset.
    pub fn flag(&self, scope: &Scope, name: &str) -> Option<bool> {
        self.get(scope, name).map(|value| value == "true")
    }

    pub fn set_flag(&self, scope: &Scope, name: &str, enabled: bool) -> Result<()> {
        self.set(scope, name, if enabled { "true" } else { "false" })
    }

    /// A stored color, or `default` when unset or empty.
    pub fn color_or(&self, scope: &Scope, name: &str, default: &str) -> String {
        match self.get(scope, name) {
            Some(color) if !color.trim().is_empty() => color,
            _ => default.to_string(),
        }
    }

    /// The stored list selection. Missing or malformed data reads as empty.
    pub fn selected_lists(&self, scope: &Scope) -> ListSelection {
        let Some(raw) = self.get(scope, SELECTED_LISTS_KEY) else {
            return ListSelection::new();
        };

        match serde_json::from_str::<Vec<ListId>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                tracing::warn!(%scope, error = %err, "ignoring malformed list selection");
                ListSelection::new()
            }
        }
    }

    pub fn set_selected_lists<I>(&self, scope: &Scope, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = ListId>,
    {
        let selection: ListSelection = ids.into_iter().collect();
        let encoded = serde_json::to_string(&selection)?;
        self.set(scope, SELECTED_LISTS_KEY, &encoded)
    }

    /// Every stored setting of a scope as `(name, value)`.
    ///
    /// Board scopes strip the `{board_id}_` prefix. The global scope returns
    /// keys that belong to no board prefix, which cannot be told apart from a
    /// global name containing an underscore, so it returns every key.
    pub fn entries(&self, scope: &Scope) -> Vec<(String, String)> {
        let prefix = scope.key("");
        self.backend
            .keys()
            .into_iter()
            .filter_map(|key| {
                let name = key.strip_prefix(&prefix)?.to_string();
                let value = self.backend.get_item(&key)?;
                Some((name, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SettingsStore<MemoryStore> {
        SettingsStore::new(MemoryStore::new())
    }

    #[test]
    fn test_get_after_set_round_trips_in_every_scope() -> Result<()> {
        let store = store();
        for scope in [Scope::Global, Scope::board("b1"), Scope::board("b2")] {
            for value in ["true", "rgb(0, 121, 191)", "", "{\"x\":1}", "ünïcødé"] {
                store.set(&scope, "some-setting", value)?;
                assert_eq!(store.get(&scope, "some-setting").as_deref(), Some(value));
            }
        }
        Ok(())
    }

    #[test]
    fn test_scopes_do_not_collide() -> Result<()> {
        let store = store();
        store.set_flag(&Scope::Global, "show-total-time", true)?;
        store.set_flag(&Scope::board("b1"), "show-total-time", false)?;

        assert_eq!(store.flag(&Scope::Global, "show-total-time"), Some(true));
        assert_eq!(store.flag(&Scope::board("b1"), "show-total-time"), Some(false));
        assert_eq!(store.flag(&Scope::board("b2"), "show-total-time"), None);
        assert_eq!(
            store.backend().get_item("b1_show-total-time").as_deref(),
            Some("false")
        );
        Ok(())
    }

    #[test]
    fn test_malformed_selection_reads_empty() -> Result<()> {
        let store = store();
        let scope = Scope::board("b1");
        for raw in ["", "[", "{}", "null", "[1, 2]", "\"l1\"", "[\"a\", {}]"] {
            store.set(&scope, SELECTED_LISTS_KEY, raw)?;
            assert!(store.selected_lists(&scope).is_empty(), "input: {raw}");
        }
        Ok(())
    }

    #[test]
    fn test_selection_round_trip_dedupes_in_order() -> Result<()> {
        let store = store();
        let scope = Scope::board("b1");
        let ids = ["l2", "l1", "l2"].map(ListId::from);
        store.set_selected_lists(&scope, ids)?;

        assert_eq!(
            store.get(&scope, SELECTED_LISTS_KEY).as_deref(),
            Some(r#"["l2","l1"]"#)
        );
        let selection = store.selected_lists(&scope);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains(&ListId::new("l1")));
        Ok(())
    }

    #[test]
    fn test_color_falls_back_on_empty() -> Result<()> {
        let store = store();
        let scope = Scope::board("b1");
        assert_eq!(store.color_or(&scope, "total-time-color", "#61bd4f"), "#61bd4f");
        store.set(&scope, "total-time-color", "")?;
        assert_eq!(store.color_or(&scope, "total-time-color", "#61bd4f"), "#61bd4f");
        store.set(&scope, "total-time-color", "#123456")?;
        assert_eq!(store.color_or(&scope, "total-time-color", "#61bd4f"), "#123456");
        Ok(())
    }

    #[test]
    fn test_board_entries_strip_prefix() -> Result<()> {
        let store = store();
        store.set(&Scope::board("b1"), "custom-key", "x")?;
        store.set(&Scope::board("b2"), "custom-key", "y")?;

        let entries = store.entries(&Scope::board("b1"));
        assert_eq!(entries, vec![("custom-key".to_string(), "x".to_string())]);
        Ok(())
    }
}
