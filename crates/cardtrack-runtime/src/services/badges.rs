use crate::client::MetricsClient;
use cardtrack_core::{BoardSettings, KeyValueStore, SettingsStore};
use cardtrack_engine::compose_badges;
use cardtrack_types::{Badge, BoardId, CardId, CardPlacement, ListId, Viewer, list_name};

pub struct BadgeRequest {
    pub board: BoardId,
    pub card: CardId,
    pub list: ListId,
    pub viewer: Option<Viewer>,
}

pub struct BadgeService<'a, S> {
    client: &'a MetricsClient,
    store: &'a SettingsStore<S>,
}

impl<'a, S: KeyValueStore> BadgeService<'a, S> {
    pub fn new(client: &'a MetricsClient, store: &'a SettingsStore<S>) -> Self {
        Self { client, store }
    }

    /// Badges for one card. Never empty and never an error: failed
    /// requests drop the badges that depend on them.
    pub async fn badges(&self, request: &BadgeRequest) -> Vec<Badge> {
        let settings = BoardSettings::load(self.store, &request.board);

        let metrics = match self.client.get_metrics(&request.card).await {
            Ok(metrics) => Some(metrics),
            Err(err) => {
                tracing::warn!(card = %request.card, error = %err, "metrics unavailable for badges");
                None
            }
        };

        let mut placement = CardPlacement::new(request.card.clone(), request.list.clone());
        if let Some(viewer) = &request.viewer {
            placement = placement.with_viewer(viewer.clone());
        }

        let wants_list_name = settings.needs_list_names()
            && metrics
                .as_ref()
                .is_some_and(|metrics| metrics.time_per_list.is_some());
        if wants_list_name {
            match self.client.get_board_lists(&request.board).await {
                Ok(lists) => {
                    if let Some(name) = list_name(&lists, &request.list) {
                        placement = placement.with_list_name(name);
                    }
                }
                Err(err) => {
                    tracing::warn!(board = %request.board, error = %err, "board lists unavailable, skipping list badges");
                }
            }
        }

        compose_badges(metrics.as_ref(), &settings, &placement)
    }
}
