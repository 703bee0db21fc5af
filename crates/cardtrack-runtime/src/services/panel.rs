use crate::client::MetricsClient;
use crate::load::{LoadSequencer, LoadTicket, Region};
use cardtrack_core::PanelSettings;
use cardtrack_engine::{HistoryView, MetricsPanel, build_metrics_panel, render_history};
use cardtrack_types::CardId;
use chrono::TimeZone;
use futures::future::OptionFuture;
use serde::Serialize;
use std::fmt::Display;
use std::sync::{Mutex, PoisonError};

/// The metrics region of the card panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum PanelContent {
    Metrics(MetricsPanel),
    Failed(String),
}

/// The history region of the card panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum HistoryRegion {
    Loaded(HistoryView),
    Failed(String),
    /// Metrics failed, so history was not requested
    NotLoaded,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardPanel {
    pub card: CardId,
    pub content: PanelContent,
    pub history: HistoryRegion,
}

pub struct PanelService<'a> {
    client: &'a MetricsClient,
}

impl<'a> PanelService<'a> {
    pub fn new(client: &'a MetricsClient) -> Self {
        Self { client }
    }

    /// Load the card panel: trigger ingestion, read metrics, then the
    /// history tables that `settings` enables.
    ///
    /// A history failure only affects the history region.
    pub async fn load<Tz>(&self, card: &CardId, settings: &PanelSettings, tz: &Tz) -> CardPanel
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.client.ensure_history_loaded(card).await;

        let metrics = match self.client.get_metrics(card).await {
            Ok(metrics) => metrics,
            Err(err) => {
                tracing::warn!(%card, error = %err, "metrics request failed");
                return CardPanel {
                    card: card.clone(),
                    content: PanelContent::Failed(err.to_string()),
                    history: HistoryRegion::NotLoaded,
                };
            }
        };

        CardPanel {
            card: card.clone(),
            content: PanelContent::Metrics(build_metrics_panel(&metrics, settings)),
            history: self.load_history(card, settings, tz).await,
        }
    }

    async fn load_history<Tz>(
        &self,
        card: &CardId,
        settings: &PanelSettings,
        tz: &Tz,
    ) -> HistoryRegion
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let history: OptionFuture<_> = settings
            .show_history
            .then(|| self.client.get_history(card))
            .into();
        let detailed: OptionFuture<_> = settings
            .show_detailed_history
            .then(|| self.client.get_detailed_history(card))
            .into();
        let (history, detailed) = futures::join!(history, detailed);

        match (history.transpose(), detailed.transpose()) {
            (Ok(history), Ok(detailed)) => HistoryRegion::Loaded(render_history(
                history.as_deref(),
                detailed.as_deref(),
                settings,
                tz,
            )),
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(%card, error = %err, "history request failed");
                HistoryRegion::Failed(err.to_string())
            }
        }
    }
}

/// The two regions of an open card panel. Reloads may overlap; each region
/// keeps the result of the newest load only.
#[derive(Debug, Default)]
pub struct CardView {
    sequencer: LoadSequencer,
    content: Mutex<Region<PanelContent>>,
    history: Mutex<Region<HistoryRegion>>,
}

impl CardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `card` and show the result unless a newer load started
    /// meanwhile. Returns whether the result was shown.
    pub async fn load<Tz>(
        &self,
        service: &PanelService<'_>,
        card: &CardId,
        settings: &PanelSettings,
        tz: &Tz,
    ) -> bool
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let ticket = self.sequencer.issue();
        let panel = service.load(card, settings, tz).await;
        self.show(ticket, panel)
    }

    fn show(&self, ticket: LoadTicket, panel: CardPanel) -> bool {
        let mut content = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        if !content.offer(&self.sequencer, ticket, panel.content) {
            return false;
        }
        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history.offer(&self.sequencer, ticket, panel.history)
    }

    pub fn content(&self) -> Option<PanelContent> {
        let content = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        content.get().cloned()
    }

    pub fn history(&self) -> Option<HistoryRegion> {
        let history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        history.get().cloned()
    }
}
