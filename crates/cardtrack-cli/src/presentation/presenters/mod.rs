pub mod board;
pub mod card;
pub mod settings;
pub mod system;
pub mod user;

pub use board::{present_board_lists, present_export, present_tracked_cards};
pub use card::{present_badges, present_card_panel};
pub use settings::{
    FormOutcome, present_board_settings, present_frame_height, present_list_selection,
    present_removed_setting, present_setting, present_settings_form,
};
pub use system::{present_config, present_config_value};
pub use user::{present_user_settings, present_user_upload};
