use super::{HandlerContext, Workspace};
use crate::presentation::presenters;
use anyhow::{Context, Result};
use cardtrack_types::{CardId, ExportFormat};
use std::path::PathBuf;

pub async fn handle(
    workspace: &Workspace,
    ctx: &HandlerContext,
    card: String,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let card = CardId::new(card);
    let body = workspace.client()?.export_metrics(&card, format).await?;

    let path = output.unwrap_or_else(|| PathBuf::from(format.file_name(card.as_str())));
    std::fs::write(&path, &body)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    tracing::info!(%card, path = %path.display(), bytes = body.len(), "export written");

    ctx.render(presenters::present_export(&card, format, path, body.len()))
}
