use cardtrack_core::Scope;
use cardtrack_runtime::UserSettingsUpload;
use cardtrack_types::StoredUserSettings;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, UserSettingsViewModel, UserUploadViewModel,
};

/// `stored` is `None` when the backend does not know the user.
pub fn present_user_settings(
    username: String,
    stored: Option<StoredUserSettings>,
) -> CommandResultViewModel<UserSettingsViewModel> {
    let found = stored.is_some();
    let settings = stored.and_then(|stored| stored.text());
    let upload = format!("cardtrack user upload {}", username);

    let content = UserSettingsViewModel {
        username,
        found,
        settings,
    };

    let empty = content.settings.is_none();
    let result = CommandResultViewModel::new(content);
    match (found, empty) {
        (false, _) => result
            .with_badge(StatusBadge::warning("User not found"))
            .with_suggestion(
                Guidance::new("Uploading settings creates the user").with_command(upload),
            ),
        (true, true) => result.with_badge(StatusBadge::info("No settings stored")),
        (true, false) => result,
    }
}

pub fn present_user_upload(
    scope: &Scope,
    upload: UserSettingsUpload,
) -> CommandResultViewModel<UserUploadViewModel> {
    let badge = StatusBadge::success(upload.message.clone());
    let content = UserUploadViewModel {
        username: upload.username,
        scope: scope.to_string(),
        keys: upload.keys,
        message: upload.message,
    };

    CommandResultViewModel::new(content).with_badge(badge)
}
