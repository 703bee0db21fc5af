use crate::types::{BadgeArg, BadgeColorArg, FrameArg, LogLevel, OutputFormat, parse_badge_color};
use cardtrack_core::Scope;
use cardtrack_types::ExportFormat;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardtrack")]
#[command(about = "Card time-tracking badges, metrics and history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings and config directory [default: $CARDTRACK_PATH, then the system data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Metrics backend base URL (overrides CARDTRACK_BACKEND_URL and config.toml)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Host context file to wait for (also CARDTRACK_HOST_FILE)
    #[arg(long, global = true)]
    pub host_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the badges shown on a card's front
    Badges {
        #[arg(long)]
        board: Option<String>,

        #[arg(long)]
        card: Option<String>,

        /// Id of the list the card sits in
        #[arg(long)]
        list: Option<String>,

        /// Viewing member id, for the personal-time badge
        #[arg(long)]
        member: Option<String>,
    },

    /// Show the metrics panel and history tables of a card
    Show {
        #[arg(long, conflicts_with = "url")]
        card: Option<String>,

        /// Frame URL carrying the card in its query or fragment
        #[arg(long)]
        url: Option<String>,
    },

    /// List the lists of a board
    Lists {
        #[arg(long)]
        board: Option<String>,
    },

    /// List the cards the backend tracks
    Cards {
        /// Only cards created on or after this day (YYYY-MM-DD)
        #[arg(long)]
        created_after: Option<NaiveDate>,

        /// Only cards whose id contains this text
        #[arg(long)]
        card_id: Option<String>,
    },

    /// Download a card's metrics export
    Export {
        #[arg(long)]
        card: String,

        /// File type: json, csv, xml or xlsx
        #[arg(long = "type", default_value = "json")]
        kind: ExportFormat,

        /// Destination file [default: card_<id>_metrics.<format>]
        #[arg(long)]
        output: Option<PathBuf>,
    },

    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },

    /// Apply a drag to a resizable frame and store the new height
    Resize {
        #[arg(long, value_enum)]
        frame: FrameArg,

        /// Height when the drag started [default: the stored height]
        #[arg(long)]
        start: Option<u32>,

        /// Vertical drag distance in pixels
        #[arg(long, allow_negative_numbers = true)]
        delta: i64,
    },

    /// Settings the backend keeps per user
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show a board's badge settings and the global panel toggles
    Show {
        #[arg(long)]
        board: String,
    },

    /// Store one raw setting
    Set {
        #[command(flatten)]
        scope: ScopeArgs,

        key: String,

        value: String,
    },

    /// Read one raw setting
    Get {
        #[command(flatten)]
        scope: ScopeArgs,

        key: String,
    },

    /// Delete one raw setting
    Unset {
        #[command(flatten)]
        scope: ScopeArgs,

        key: String,
    },

    /// Replace the board's selected lists, or print them when no ids are given
    Lists {
        #[arg(long)]
        board: String,

        ids: Vec<String>,
    },

    /// The board settings form: current values and the board's lists.
    /// Edits are previewed unless --save is given.
    Form {
        #[arg(long)]
        board: String,

        /// Turn a badge on (repeatable)
        #[arg(long, value_enum)]
        enable: Vec<BadgeArg>,

        /// Turn a badge off (repeatable)
        #[arg(long, value_enum)]
        disable: Vec<BadgeArg>,

        /// Badge color as KIND=COLOR (repeatable)
        #[arg(long, value_parser = parse_badge_color)]
        color: Vec<BadgeColorArg>,

        /// List ids to select, replacing the current selection
        #[arg(long, num_args = 1.., value_delimiter = ',')]
        select: Vec<String>,

        /// Store the form
        #[arg(long)]
        save: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Print the settings the backend holds for a user
    Show { username: String },

    /// Replace a user's backend settings with the locally stored ones
    Upload {
        username: String,

        /// Only this board's settings, keyed without the board prefix
        #[arg(long)]
        board: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Store one value in config.toml
    Set {
        /// backend_url, request_timeout_secs, host.poll_interval_ms or host.max_attempts
        key: String,

        value: String,
    },
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ScopeArgs {
    #[arg(long)]
    pub board: Option<String>,

    #[arg(long)]
    pub global: bool,
}

impl ScopeArgs {
    pub fn scope(&self) -> Scope {
        match &self.board {
            Some(board) => Scope::board(board.as_str()),
            None => Scope::Global,
        }
    }
}
