mod console;

pub use console::ConsoleRenderer;

use crate::presentation::view_models::CommandResultViewModel;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

pub trait Renderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display + Send + Sync;
}
