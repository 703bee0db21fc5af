pub mod badges;
pub mod panel;
pub mod settings;

pub use badges::{BadgeRequest, BadgeService};
pub use panel::{CardPanel, CardView, HistoryRegion, PanelContent, PanelService};
pub use settings::{ListOption, SAVED_MESSAGE, SettingsForm, SettingsService, UserSettingsUpload};
