pub mod badges;
pub mod cards;
pub mod config;
pub mod context;
pub mod export;
pub mod lists;
pub mod resize;
pub mod settings;
pub mod show;
pub mod user;
pub mod workspace;

pub use context::HandlerContext;
pub use workspace::Workspace;
