use std::fmt;

use crate::presentation::view_models::{UserSettingsViewModel, UserUploadViewModel};

// --------------------------------------------------------
// User Settings View
// --------------------------------------------------------

pub struct UserSettingsView<'a> {
    data: &'a UserSettingsViewModel,
}

impl<'a> UserSettingsView<'a> {
    pub fn new(data: &'a UserSettingsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for UserSettingsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.data.settings, self.data.found) {
            (Some(settings), _) => {
                writeln!(f, "Settings for {}:", self.data.username)?;
                writeln!(f, "  {}", settings)
            }
            (None, true) => writeln!(f, "{} has no stored settings.", self.data.username),
            (None, false) => writeln!(f, "User {} not found.", self.data.username),
        }
    }
}

// --------------------------------------------------------
// User Upload View
// --------------------------------------------------------

pub struct UserUploadView<'a> {
    data: &'a UserUploadViewModel,
}

impl<'a> UserUploadView<'a> {
    pub fn new(data: &'a UserUploadViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for UserUploadView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Uploaded {} setting(s) from {} for {}",
            self.data.keys.len(),
            self.data.scope,
            self.data.username
        )?;
        for key in &self.data.keys {
            writeln!(f, "  {}", key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_user_and_empty_settings_differ() {
        let missing = UserSettingsViewModel {
            username: "alice".to_string(),
            found: false,
            settings: None,
        };
        assert_eq!(UserSettingsView::new(&missing).to_string(), "User alice not found.\n");

        let empty = UserSettingsViewModel {
            found: true,
            ..missing
        };
        assert_eq!(
            UserSettingsView::new(&empty).to_string(),
            "alice has no stored settings.\n"
        );
    }

    #[test]
    fn test_upload_lists_keys() {
        let data = UserUploadViewModel {
            username: "bob".to_string(),
            scope: "board:b1".to_string(),
            keys: vec!["show-total-time".to_string(), "total-time-color".to_string()],
            message: "Settings updated".to_string(),
        };
        insta::assert_snapshot!(UserUploadView::new(&data).to_string(), @r"
        Uploaded 2 setting(s) from board:b1 for bob
          show-total-time
          total-time-color
        ");
    }
}
