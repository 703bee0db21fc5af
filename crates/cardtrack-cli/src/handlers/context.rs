use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display + Send + Sync,
    {
        let renderer = ConsoleRenderer::new(self.json_mode());
        renderer.render(view_model)
    }
}
