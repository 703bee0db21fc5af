mod board;
mod card;
mod settings;
mod system;
mod user;

pub use board::{BoardListsView, ExportView, TrackedCardsView};
pub use card::{BadgeListView, CardPanelView};
pub use settings::{
    BoardSettingsView, FrameHeightView, ListSelectionView, SettingValueView, SettingsFormView,
};
pub use system::ConfigView;
pub use user::{UserSettingsView, UserUploadView};
