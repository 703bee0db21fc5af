use crate::Result;
use crate::client::MetricsClient;
use crate::error::FetchResult;
use cardtrack_core::{BoardSettings, KeyValueStore, Scope, SettingsStore};
use cardtrack_types::{BoardId, BoardList, ListId, UserSettingsUpdate};
use serde::Serialize;

pub const SAVED_MESSAGE: &str = "Settings saved! Refresh the board to see changes on cards.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOption {
    pub list: BoardList,
    pub selected: bool,
}

/// The board settings form: current values plus the lists to pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsForm {
    pub board: BoardId,
    pub settings: BoardSettings,
    pub lists: Vec<ListOption>,
    /// Why the list picker is empty, when loading lists failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists_error: Option<String>,
}

/// What an upload sent, and the backend's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSettingsUpload {
    pub username: String,
    pub keys: Vec<String>,
    pub message: String,
}

pub struct SettingsService<'a, S> {
    client: &'a MetricsClient,
    store: &'a SettingsStore<S>,
}

impl<'a, S: KeyValueStore> SettingsService<'a, S> {
    pub fn new(client: &'a MetricsClient, store: &'a SettingsStore<S>) -> Self {
        Self { client, store }
    }

    pub async fn form(&self, board: &BoardId) -> SettingsForm {
        let settings = BoardSettings::load(self.store, board);

        let (lists, lists_error) = match self.client.get_board_lists(board).await {
            Ok(lists) => (lists, None),
            Err(err) => {
                tracing::warn!(%board, error = %err, "failed to load board lists");
                (Vec::new(), Some(err.to_string()))
            }
        };

        let lists = lists
            .into_iter()
            .map(|list| ListOption {
                selected: settings.selected_lists.contains(&list.id),
                list,
            })
            .collect();

        SettingsForm {
            board: board.clone(),
            settings,
            lists,
            lists_error,
        }
    }

    /// Save the form. Only lists offered by the form can stay selected.
    pub fn save(&self, form: &SettingsForm) -> Result<()> {
        let mut settings = form.settings.clone();
        if form.lists_error.is_none() {
            settings.selected_lists = form
                .lists
                .iter()
                .filter(|option| option.selected)
                .map(|option| option.list.id.clone())
                .collect();
        }
        settings.save(self.store, &form.board)?;
        tracing::info!(board = %form.board, "board settings saved");
        Ok(())
    }

    /// Send every setting stored under `scope` as `username`'s backend
    /// settings, replacing what the backend held. Keys are relative to
    /// `scope`.
    pub async fn upload(&self, username: &str, scope: &Scope) -> FetchResult<UserSettingsUpload> {
        let mut entries = self.store.entries(scope);
        entries.sort();

        let keys: Vec<String> = entries.iter().map(|(key, _)| key.clone()).collect();
        let update = entries
            .into_iter()
            .fold(UserSettingsUpdate::new(username), |update, (key, value)| {
                update.with_setting(key, value)
            });

        let reply = self.client.update_user_settings(&update).await?;
        tracing::info!(username, %scope, count = keys.len(), "user settings uploaded");
        Ok(UserSettingsUpload {
            username: username.to_string(),
            keys,
            message: reply.message,
        })
    }
}

impl SettingsForm {
    pub fn select(&mut self, ids: &[ListId]) {
        for option in &mut self.lists {
            option.selected = ids.contains(&option.list.id);
        }
    }
}
