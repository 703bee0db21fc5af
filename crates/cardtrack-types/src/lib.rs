pub mod badge;
pub mod domain;
pub mod export;
pub mod history;
pub mod metrics;
pub mod user;

pub use badge::*;
pub use domain::*;
pub use export::*;
pub use history::*;
pub use metrics::*;
pub use user::*;
