pub mod color;
pub mod table;

pub use color::{paint_badge, parse_color};
pub use table::Table;
