use serde::Serialize;
use std::fmt;

use crate::presentation::views::{UserSettingsView, UserUploadView};

#[derive(Debug, Serialize)]
pub struct UserSettingsViewModel {
    pub username: String,
    pub found: bool,
    /// The backend's stored settings, verbatim
    pub settings: Option<String>,
}

impl fmt::Display for UserSettingsViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", UserSettingsView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct UserUploadViewModel {
    pub username: String,
    pub scope: String,
    pub keys: Vec<String>,
    pub message: String,
}

impl fmt::Display for UserUploadViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", UserUploadView::new(self))
    }
}
