mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
mod types;

pub use args::{Cli, Commands, ConfigCommand, ScopeArgs, SettingsCommand, UserCommand};
pub use commands::run;
pub use types::{BadgeArg, FrameArg, LogLevel, OutputFormat};
