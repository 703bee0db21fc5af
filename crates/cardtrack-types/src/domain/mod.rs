pub mod board;
pub mod card;
pub mod ids;

pub use board::*;
pub use card::*;
pub use ids::*;
