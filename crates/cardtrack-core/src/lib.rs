pub mod error;
pub mod path;
pub mod settings;

pub use error::{Error, Result};
pub use path::*;
pub use settings::*;
