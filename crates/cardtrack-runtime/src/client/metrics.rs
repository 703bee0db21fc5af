use super::Route;
use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use crate::{Error, Result};
use cardtrack_types::{
    BackendMessage, BoardId, BoardList, CardFilter, CardId, ExportFormat, HistoryEntry, Metrics,
    StoredUserSettings, TrackedCard, UserSettingsUpdate,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the card tracker backend.
///
/// Reads are plain GETs; only user settings are written with a JSON POST.
/// Non-success statuses, transport failures and undecodable bodies surface
/// as [`FetchError`].
#[derive(Debug, Clone)]
pub struct MetricsClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetricsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("could not build HTTP client: {}", e)))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.backend_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, route: &Route<'_>) -> String {
        format!("{}{}", self.base_url, route.path())
    }

    /// Ask the backend to ingest the card's history before reading metrics.
    ///
    /// Failures are logged and swallowed; callers go on to read whatever the
    /// backend already has. Returns whether the request succeeded.
    pub async fn ensure_history_loaded(&self, card: &CardId) -> bool {
        let url = self.url(&Route::FetchHistory(card));
        match self.send(&url, &[]).await {
            Ok(_) => {
                tracing::debug!(%card, "history fetched");
                true
            }
            Err(err) => {
                tracing::warn!(%card, error = %err, "history fetch failed, continuing");
                false
            }
        }
    }

    pub async fn get_metrics(&self, card: &CardId) -> FetchResult<Metrics> {
        self.get_json(&self.url(&Route::Metrics(card)), &[]).await
    }

    pub async fn get_history(&self, card: &CardId) -> FetchResult<Vec<HistoryEntry>> {
        self.get_json(&self.url(&Route::History(card)), &[]).await
    }

    pub async fn get_detailed_history(&self, card: &CardId) -> FetchResult<Vec<HistoryEntry>> {
        self.get_json(&self.url(&Route::DetailedHistory(card)), &[]).await
    }

    pub async fn get_board_lists(&self, board: &BoardId) -> FetchResult<Vec<BoardList>> {
        self.get_json(&self.url(&Route::BoardLists(board)), &[]).await
    }

    pub async fn list_cards(&self, filter: &CardFilter) -> FetchResult<Vec<TrackedCard>> {
        self.get_json(&self.url(&Route::Cards), &filter.query_pairs()).await
    }

    /// The raw export file body in the requested format
    pub async fn export_metrics(
        &self,
        card: &CardId,
        format: ExportFormat,
    ) -> FetchResult<Vec<u8>> {
        let url = self.url(&Route::Export(card, format));
        let response = self.send(&url, &[]).await?;
        let bytes = response.bytes().await.map_err(|e| FetchError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    /// Settings the backend keeps for `username`. An unknown user is a
    /// `404` status error.
    pub async fn get_user_settings(&self, username: &str) -> FetchResult<StoredUserSettings> {
        self.get_json(&self.url(&Route::UserSettings(username)), &[]).await
    }

    /// Replace the settings the backend keeps for `update.username`.
    pub async fn update_user_settings(
        &self,
        update: &UserSettingsUpdate,
    ) -> FetchResult<BackendMessage> {
        let url = self.url(&Route::SaveUserSettings);
        tracing::debug!(url = %url, username = %update.username, "POST");
        let response = self.execute(&url, self.http.post(&url).json(update)).await?;
        decode(&url, response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> FetchResult<T> {
        let response = self.send(url, query).await?;
        decode(url, response).await
    }

    async fn send(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> FetchResult<reqwest::Response> {
        tracing::debug!(url, "GET");
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(url, request).await
    }

    async fn execute(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> FetchResult<reqwest::Response> {
        let response = request.send().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> FetchResult<T> {
    let body = response.bytes().await.map_err(|e| FetchError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
