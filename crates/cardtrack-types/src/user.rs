use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/settings`. The backend replaces whatever it held for
/// `username`, creating the user on first save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettingsUpdate {
    pub username: String,
    pub settings: Map<String, Value>,
}

impl UserSettingsUpdate {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            settings: Map::new(),
        }
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

/// Response of `GET /api/settings/{username}`.
///
/// NOTE: the backend keeps the settings as one opaque string (a repr of the
/// submitted object), so `settings` is usually a JSON string, not an object.
/// It is `null` for a user that was created without settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredUserSettings {
    #[serde(default)]
    pub settings: Value,
}

impl StoredUserSettings {
    /// The stored settings as display text
    pub fn text(&self) -> Option<String> {
        match &self.settings {
            Value::Null => None,
            Value::String(raw) => Some(raw.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Plain acknowledgement such as `{"message": "Settings updated"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendMessage {
    #[serde(default)]
    pub message: String,
}
