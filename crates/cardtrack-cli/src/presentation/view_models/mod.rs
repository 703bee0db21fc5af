pub mod board;
pub mod card;
pub mod common;
pub mod result;
pub mod settings;
pub mod system;
pub mod user;

pub use board::{
    BoardListEntry, BoardListsViewModel, ExportViewModel, TrackedCardViewModel,
    TrackedCardsViewModel,
};
pub use card::{BadgeListViewModel, BadgeViewModel, CardPanelViewModel};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use result::CommandResultViewModel;
pub use settings::{
    BadgeSettingViewModel, BoardSettingsViewModel, FrameHeightViewModel, ListOptionViewModel,
    ListSelectionViewModel, PanelToggleViewModel, SettingValueViewModel, SettingsFormViewModel,
};
pub use system::ConfigViewModel;
pub use user::{UserSettingsViewModel, UserUploadViewModel};
